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

//! Per-operation options for collective calls
//!
//! One plain record per collective kind. Every field is public and has a
//! default, so `XxxOptions::default()` is a valid request on its own. Ranks,
//! tensor indices and device ids are passed through untouched; checking them
//! against the live process group is the backend's job.

use serde::{Deserialize, Serialize};

use super::comm_operations::ReduceOp;
use super::timeout::Timeout;

/// Options for broadcasting from a root to every participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastOptions {
    /// Rank whose data is distributed
    pub root_rank: i64,
    /// Which of the root's co-broadcast buffers this call concerns
    pub root_tensor: i64,
    pub timeout: Timeout,
}

impl BroadcastOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root rank
    pub fn with_root_rank(mut self, root_rank: i64) -> Self {
        self.root_rank = root_rank;
        self
    }

    /// Set the root tensor index
    pub fn with_root_tensor(mut self, root_tensor: i64) -> Self {
        self.root_tensor = root_tensor;
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

/// Options for all-reduce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllreduceOptions {
    pub reduce_op: ReduceOp,
    pub timeout: Timeout,
}

impl AllreduceOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reduction operator
    pub fn with_reduce_op(mut self, reduce_op: ReduceOp) -> Self {
        self.reduce_op = reduce_op;
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

/// Options for coalesced all-reduce
///
/// Same fields as [`AllreduceOptions`]. The separate type tells the backend
/// to reduce a batch of buffers as one logical unit instead of one call per
/// buffer. Convert between the two with `From`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllreduceCoalescedOptions {
    pub reduce_op: ReduceOp,
    pub timeout: Timeout,
}

impl AllreduceCoalescedOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reduction operator
    pub fn with_reduce_op(mut self, reduce_op: ReduceOp) -> Self {
        self.reduce_op = reduce_op;
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

impl From<AllreduceOptions> for AllreduceCoalescedOptions {
    fn from(opts: AllreduceOptions) -> Self {
        Self {
            reduce_op: opts.reduce_op,
            timeout: opts.timeout,
        }
    }
}

impl From<AllreduceCoalescedOptions> for AllreduceOptions {
    fn from(opts: AllreduceCoalescedOptions) -> Self {
        Self {
            reduce_op: opts.reduce_op,
            timeout: opts.timeout,
        }
    }
}

impl PartialEq<AllreduceOptions> for AllreduceCoalescedOptions {
    fn eq(&self, other: &AllreduceOptions) -> bool {
        self.reduce_op == other.reduce_op && self.timeout == other.timeout
    }
}

impl PartialEq<AllreduceCoalescedOptions> for AllreduceOptions {
    fn eq(&self, other: &AllreduceCoalescedOptions) -> bool {
        other == self
    }
}

/// Options for reducing onto a single root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceOptions {
    pub reduce_op: ReduceOp,
    /// Destination of the reduced result
    pub root_rank: i64,
    /// Target buffer index at the root
    pub root_tensor: i64,
    pub timeout: Timeout,
}

impl ReduceOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reduction operator
    pub fn with_reduce_op(mut self, reduce_op: ReduceOp) -> Self {
        self.reduce_op = reduce_op;
        self
    }

    /// Set the root rank
    pub fn with_root_rank(mut self, root_rank: i64) -> Self {
        self.root_rank = root_rank;
        self
    }

    /// Set the root tensor index
    pub fn with_root_tensor(mut self, root_tensor: i64) -> Self {
        self.root_tensor = root_tensor;
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

/// Options for all-gather. Carries no operator and no root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllgatherOptions {
    pub timeout: Timeout,
}

impl AllgatherOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

/// Options for gathering onto a single root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatherOptions {
    /// Sole destination of the gathered data
    pub root_rank: i64,
    pub timeout: Timeout,
}

impl GatherOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root rank
    pub fn with_root_rank(mut self, root_rank: i64) -> Self {
        self.root_rank = root_rank;
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

/// Options for scattering distinct chunks from a single root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterOptions {
    /// Sole source of the scattered chunks
    pub root_rank: i64,
    pub timeout: Timeout,
}

impl ScatterOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root rank
    pub fn with_root_rank(mut self, root_rank: i64) -> Self {
        self.root_rank = root_rank;
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

/// Options for reduce-scatter, where each participant receives a distinct
/// reduced chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceScatterOptions {
    pub reduce_op: ReduceOp,
    pub timeout: Timeout,
}

impl ReduceScatterOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reduction operator
    pub fn with_reduce_op(mut self, reduce_op: ReduceOp) -> Self {
        self.reduce_op = reduce_op;
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllToAllOptions {
    pub timeout: Timeout,
}

impl AllToAllOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}

/// Options for a barrier
///
/// An empty `device_ids` leaves device selection to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarrierOptions {
    /// Local devices taking part in the barrier, in order
    pub device_ids: Vec<i32>,
    pub timeout: Timeout,
}

impl BarrierOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the participating device ids
    pub fn with_device_ids(mut self, device_ids: impl Into<Vec<i32>>) -> Self {
        self.device_ids = device_ids.into();
        self
    }

    /// Append a single device id
    pub fn with_device(mut self, device_id: i32) -> Self {
        self.device_ids.push(device_id);
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: impl Into<Timeout>) -> Self {
        self.timeout = timeout.into();
        self
    }
}
