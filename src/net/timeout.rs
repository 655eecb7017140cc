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

//! Collective timeouts
//!
//! A timeout is a millisecond count carried by every options record. The
//! value `-1` is reserved as [`UNSET_TIMEOUT`]: the caller did not ask for a
//! timeout and the backend should apply its own default. Any other value is
//! non-negative, which the constructors here guarantee.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CollectiveError, CollectiveResult};

const UNSET_MILLIS: i64 = -1;

/// Millisecond timeout for a single collective call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Timeout(i64);

/// "No explicit timeout requested"; defer to the backend default
pub const UNSET_TIMEOUT: Timeout = Timeout::UNSET;

impl Timeout {
    /// The unset sentinel, `-1` milliseconds
    pub const UNSET: Timeout = Timeout(UNSET_MILLIS);

    /// Concrete timeout, saturating at `i64::MAX` milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Timeout(i64::try_from(millis).unwrap_or(i64::MAX))
    }

    /// Concrete timeout in whole seconds, saturating
    pub fn from_secs(secs: u64) -> Self {
        Self::from_millis(secs.saturating_mul(1000))
    }

    /// Decode a raw signed millisecond count
    ///
    /// `-1` is the sentinel; any other negative value is rejected.
    pub fn try_from_millis(millis: i64) -> CollectiveResult<Self> {
        match millis {
            UNSET_MILLIS => Ok(Timeout::UNSET),
            m if m >= 0 => Ok(Timeout(m)),
            m => Err(CollectiveError::InvalidTimeout(m)),
        }
    }

    /// Returns true for the sentinel
    pub fn is_unset(&self) -> bool {
        self.0 == UNSET_MILLIS
    }

    /// Raw millisecond count, `-1` when unset
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// The explicit timeout, or `None` when unset
    pub fn as_duration(&self) -> Option<Duration> {
        if self.is_unset() {
            None
        } else {
            Some(Duration::from_millis(self.0 as u64))
        }
    }

    /// The explicit timeout, or `default` when unset
    pub fn resolve(&self, default: Duration) -> Duration {
        self.as_duration().unwrap_or(default)
    }
}

impl Default for Timeout {
    fn default() -> Self {
        UNSET_TIMEOUT
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        Timeout(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }
}

impl From<Option<Duration>> for Timeout {
    fn from(duration: Option<Duration>) -> Self {
        duration.map_or(UNSET_TIMEOUT, Timeout::from)
    }
}

impl From<Timeout> for Option<Duration> {
    fn from(timeout: Timeout) -> Self {
        timeout.as_duration()
    }
}

impl TryFrom<i64> for Timeout {
    type Error = CollectiveError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Timeout::try_from_millis(millis)
    }
}

impl From<Timeout> for i64 {
    fn from(timeout: Timeout) -> Self {
        timeout.0
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unset() {
            write!(f, "unset")
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}
