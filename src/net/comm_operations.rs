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

//! Communication operation types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CollectiveError;

/// Reduction operations for collective communication
///
/// The set is closed. `Band`, `Bor` and `Bxor` are only meaningful for
/// integer data; rejecting them for other element types is left to the
/// backend executing the collective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum ReduceOp {
    #[default]
    Sum = 0,
    /// Arithmetic mean across participants
    Avg,
    Product,
    Min,
    Max,
    /// Bitwise AND
    Band,
    /// Bitwise OR
    Bor,
    /// Bitwise XOR
    Bxor,
    /// No reduction operator supplied
    Unused,
}

impl ReduceOp {
    /// Every variant, in discriminant order
    pub const ALL: [ReduceOp; 9] = [
        ReduceOp::Sum,
        ReduceOp::Avg,
        ReduceOp::Product,
        ReduceOp::Min,
        ReduceOp::Max,
        ReduceOp::Band,
        ReduceOp::Bor,
        ReduceOp::Bxor,
        ReduceOp::Unused,
    ];

    /// Canonical upper-case name
    pub fn name(&self) -> &'static str {
        match self {
            ReduceOp::Sum => "SUM",
            ReduceOp::Avg => "AVG",
            ReduceOp::Product => "PRODUCT",
            ReduceOp::Min => "MIN",
            ReduceOp::Max => "MAX",
            ReduceOp::Band => "BAND",
            ReduceOp::Bor => "BOR",
            ReduceOp::Bxor => "BXOR",
            ReduceOp::Unused => "UNUSED",
        }
    }

    /// Returns true for the bitwise operators, which require integral data
    pub fn is_bitwise(&self) -> bool {
        matches!(self, ReduceOp::Band | ReduceOp::Bor | ReduceOp::Bxor)
    }

    /// Returns true for the `Unused` placeholder
    pub fn is_unused(&self) -> bool {
        matches!(self, ReduceOp::Unused)
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReduceOp {
    type Err = CollectiveError;

    /// Case-insensitive parse of the canonical names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReduceOp::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CollectiveError::InvalidReduceOp(s.to_string()))
    }
}

impl TryFrom<u8> for ReduceOp {
    type Error = CollectiveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ReduceOp::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| CollectiveError::InvalidReduceOp(format!("discriminant {}", value)))
    }
}

impl From<ReduceOp> for u8 {
    fn from(op: ReduceOp) -> Self {
        op as u8
    }
}
