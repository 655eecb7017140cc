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

//! Cylon collectives: option records for collective communication
//!
//! Callers fill in one options record per collective call (broadcast,
//! all-reduce, reduce, all-gather, gather, scatter, reduce-scatter,
//! all-to-all, barrier) and hand it by value to a communicator backend.
//! Records are plain data: every field is public, every field has a default,
//! and nothing here validates ranks, device ids or operator/type pairings.
//!
//! ```
//! use cylon_collectives::{ReduceOp, ReduceOptions, UNSET_TIMEOUT};
//!
//! let opts = ReduceOptions::new().with_reduce_op(ReduceOp::Max).with_root_rank(3);
//! assert_eq!(opts.root_tensor, 0);
//! assert_eq!(opts.timeout, UNSET_TIMEOUT);
//! ```

pub mod error;
pub mod net;
pub mod util;

// Re-export commonly used types
pub use crate::error::{CollectiveError, CollectiveResult};
pub use crate::net::{
    AllToAllOptions, AllgatherOptions, AllreduceCoalescedOptions, AllreduceOptions,
    BarrierOptions, BroadcastOptions, CollectiveConfig, CollectiveKind, CollectiveOptions,
    GatherOptions, ReduceOp, ReduceOptions, ReduceScatterOptions, ScatterOptions, Timeout,
    UNSET_TIMEOUT,
};

/// The main entry point and version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
