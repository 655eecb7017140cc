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

//! Logging utilities
//!
//! The library only talks to the `log` facade. Applications pick a logger;
//! these helpers install `env_logger` for the common case. Both are safe to
//! call more than once: later calls leave the first logger in place.

/// Initialize logging from `RUST_LOG`
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Initialize logging with a specific level
pub fn init_logging_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
    crate::collective_info!("Logging initialized at level {}", level);
}

#[macro_export]
macro_rules! collective_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "cylon_collectives", $($arg)*)
    };
}

#[macro_export]
macro_rules! collective_info {
    ($($arg:tt)*) => {
        log::info!(target: "cylon_collectives", $($arg)*)
    };
}

#[macro_export]
macro_rules! collective_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "cylon_collectives", $($arg)*)
    };
}

#[macro_export]
macro_rules! collective_error {
    ($($arg:tt)*) => {
        log::error!(target: "cylon_collectives", $($arg)*)
    };
}

#[macro_export]
macro_rules! collective_trace {
    ($($arg:tt)*) => {
        log::trace!(target: "cylon_collectives", $($arg)*)
    };
}
