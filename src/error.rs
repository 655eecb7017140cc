// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error handling for collective option decoding and configuration
//!
//! Building or mutating an options record never fails. Errors only arise when
//! values come from outside the type system: names, raw discriminants,
//! serialized records, environment variables and config files.

use std::fmt;

/// Error codes shared with the rest of the Cylon status model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Invalid = 4,
    IoError = 5,
    SerializationError = 11,
    ValueError = 14,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Invalid => write!(f, "Invalid"),
            Code::IoError => write!(f, "IO error"),
            Code::SerializationError => write!(f, "Serialization error"),
            Code::ValueError => write!(f, "Value error"),
        }
    }
}

/// Main error type for collective option handling
#[derive(thiserror::Error, Debug)]
pub enum CollectiveError {
    #[error("Invalid reduce op: {0}")]
    InvalidReduceOp(String),

    #[error("Invalid timeout: {0}ms (only -1 may be negative)")]
    InvalidTimeout(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CollectiveError {
    /// Get the error code
    pub fn code(&self) -> Code {
        match self {
            CollectiveError::InvalidReduceOp(_) => Code::Invalid,
            CollectiveError::InvalidTimeout(_) => Code::ValueError,
            CollectiveError::Config(_) => Code::Invalid,
            CollectiveError::Io(_) => Code::IoError,
            CollectiveError::Serialization(_) => Code::SerializationError,
        }
    }
}

/// Type alias for Results using CollectiveError
pub type CollectiveResult<T> = Result<T, CollectiveError>;
