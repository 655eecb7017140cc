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

//! Communication configuration
//!
//! Holds the defaults a backend falls back on when an options record leaves
//! its timeout unset.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CollectiveError, CollectiveResult};

use super::timeout::Timeout;

/// Default applied to collectives whose timeout is unset (30 minutes)
pub const DEFAULT_COLLECTIVE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Environment variable overriding the default timeout, in milliseconds
pub const COLLECTIVE_TIMEOUT_ENV: &str = "CYLON_COLLECTIVE_TIMEOUT_MS";

/// Backend-side configuration for collective calls
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectiveConfig {
    /// Timeout used when a record carries the unset sentinel
    #[serde(rename = "default_timeout_ms", with = "duration_millis_serde")]
    pub default_timeout: Duration,
}

impl Default for CollectiveConfig {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_COLLECTIVE_TIMEOUT,
        }
    }
}

impl CollectiveConfig {
    /// Create a config with the 30 minute default timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default timeout
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Effective timeout for a call: the record's own value, or the default
    pub fn resolve_timeout(&self, timeout: Timeout) -> Duration {
        if timeout.is_unset() {
            crate::collective_trace!(
                "Timeout unset, using default of {}ms",
                self.default_timeout.as_millis()
            );
        }
        timeout.resolve(self.default_timeout)
    }

    /// Build a config from `CYLON_COLLECTIVE_TIMEOUT_MS`
    ///
    /// A missing variable yields the defaults. A value that is not a
    /// non-negative integer is an error.
    pub fn from_env() -> CollectiveResult<Self> {
        let value = match env::var(COLLECTIVE_TIMEOUT_ENV) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(e) => {
                crate::collective_warn!("Unreadable {}: {}", COLLECTIVE_TIMEOUT_ENV, e);
                return Err(CollectiveError::Config(format!(
                    "{}: {}",
                    COLLECTIVE_TIMEOUT_ENV, e
                )));
            }
        };

        let millis: u64 = value.trim().parse().map_err(|_| {
            crate::collective_warn!("Rejecting {}='{}'", COLLECTIVE_TIMEOUT_ENV, value);
            CollectiveError::Config(format!(
                "{} must be a non-negative integer, got '{}'",
                COLLECTIVE_TIMEOUT_ENV, value
            ))
        })?;

        crate::collective_debug!(
            "Collective default timeout set to {}ms from {}",
            millis,
            COLLECTIVE_TIMEOUT_ENV
        );
        Ok(Self::default().with_default_timeout(Duration::from_millis(millis)))
    }

    pub fn from_json_str(json: &str) -> CollectiveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> CollectiveResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            crate::collective_error!("Failed to read collective config {}: {}", path.display(), e);
            e
        })?;
        let config = Self::from_json_str(&contents)?;
        crate::collective_debug!("Loaded collective config from {}", path.display());
        Ok(config)
    }
}

/// Serde module storing a Duration as whole milliseconds
mod duration_millis_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
