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

//! Collective communication options
//!
//! The types here describe *what* a collective call should do. Executing it
//! (moving bytes, resolving ranks against a process group, enforcing
//! deadlines) belongs to the communicator backends that consume them.

pub mod collective;
pub mod comm_config;
pub mod comm_operations;
pub mod comm_options;
pub mod timeout;

// Re-exports for convenience
pub use collective::{CollectiveKind, CollectiveOptions};
pub use comm_config::{CollectiveConfig, COLLECTIVE_TIMEOUT_ENV, DEFAULT_COLLECTIVE_TIMEOUT};
pub use comm_operations::ReduceOp;
pub use comm_options::*;
pub use timeout::{Timeout, UNSET_TIMEOUT};
