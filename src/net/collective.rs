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

//! Tagged union over every options record
//!
//! Backends that receive requests through a single queue or control channel
//! can carry a [`CollectiveOptions`] and dispatch on [`CollectiveKind`]
//! instead of keeping one entry point per record type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::comm_operations::ReduceOp;
use super::comm_options::{
    AllToAllOptions, AllgatherOptions, AllreduceCoalescedOptions, AllreduceOptions,
    BarrierOptions, BroadcastOptions, GatherOptions, ReduceOptions, ReduceScatterOptions,
    ScatterOptions,
};
use super::timeout::Timeout;

/// Collective operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectiveKind {
    Broadcast,
    Allreduce,
    AllreduceCoalesced,
    Reduce,
    Allgather,
    Gather,
    Scatter,
    ReduceScatter,
    AllToAll,
    Barrier,
}

impl CollectiveKind {
    pub const ALL: [CollectiveKind; 10] = [
        CollectiveKind::Broadcast,
        CollectiveKind::Allreduce,
        CollectiveKind::AllreduceCoalesced,
        CollectiveKind::Reduce,
        CollectiveKind::Allgather,
        CollectiveKind::Gather,
        CollectiveKind::Scatter,
        CollectiveKind::ReduceScatter,
        CollectiveKind::AllToAll,
        CollectiveKind::Barrier,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CollectiveKind::Broadcast => "broadcast",
            CollectiveKind::Allreduce => "allreduce",
            CollectiveKind::AllreduceCoalesced => "allreduce_coalesced",
            CollectiveKind::Reduce => "reduce",
            CollectiveKind::Allgather => "allgather",
            CollectiveKind::Gather => "gather",
            CollectiveKind::Scatter => "scatter",
            CollectiveKind::ReduceScatter => "reduce_scatter",
            CollectiveKind::AllToAll => "all_to_all",
            CollectiveKind::Barrier => "barrier",
        }
    }
}

impl fmt::Display for CollectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for any collective call, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectiveOptions {
    Broadcast(BroadcastOptions),
    Allreduce(AllreduceOptions),
    AllreduceCoalesced(AllreduceCoalescedOptions),
    Reduce(ReduceOptions),
    Allgather(AllgatherOptions),
    Gather(GatherOptions),
    Scatter(ScatterOptions),
    ReduceScatter(ReduceScatterOptions),
    AllToAll(AllToAllOptions),
    Barrier(BarrierOptions),
}

impl CollectiveOptions {
    pub fn kind(&self) -> CollectiveKind {
        match self {
            CollectiveOptions::Broadcast(_) => CollectiveKind::Broadcast,
            CollectiveOptions::Allreduce(_) => CollectiveKind::Allreduce,
            CollectiveOptions::AllreduceCoalesced(_) => CollectiveKind::AllreduceCoalesced,
            CollectiveOptions::Reduce(_) => CollectiveKind::Reduce,
            CollectiveOptions::Allgather(_) => CollectiveKind::Allgather,
            CollectiveOptions::Gather(_) => CollectiveKind::Gather,
            CollectiveOptions::Scatter(_) => CollectiveKind::Scatter,
            CollectiveOptions::ReduceScatter(_) => CollectiveKind::ReduceScatter,
            CollectiveOptions::AllToAll(_) => CollectiveKind::AllToAll,
            CollectiveOptions::Barrier(_) => CollectiveKind::Barrier,
        }
    }

    pub fn timeout(&self) -> Timeout {
        match self {
            CollectiveOptions::Broadcast(o) => o.timeout,
            CollectiveOptions::Allreduce(o) => o.timeout,
            CollectiveOptions::AllreduceCoalesced(o) => o.timeout,
            CollectiveOptions::Reduce(o) => o.timeout,
            CollectiveOptions::Allgather(o) => o.timeout,
            CollectiveOptions::Gather(o) => o.timeout,
            CollectiveOptions::Scatter(o) => o.timeout,
            CollectiveOptions::ReduceScatter(o) => o.timeout,
            CollectiveOptions::AllToAll(o) => o.timeout,
            CollectiveOptions::Barrier(o) => o.timeout,
        }
    }

    /// The requested reduction, for the kinds that carry one
    pub fn reduce_op(&self) -> Option<ReduceOp> {
        match self {
            CollectiveOptions::Allreduce(o) => Some(o.reduce_op),
            CollectiveOptions::AllreduceCoalesced(o) => Some(o.reduce_op),
            CollectiveOptions::Reduce(o) => Some(o.reduce_op),
            CollectiveOptions::ReduceScatter(o) => Some(o.reduce_op),
            _ => None,
        }
    }

    /// The root rank, for rooted kinds (broadcast, reduce, gather, scatter)
    pub fn root_rank(&self) -> Option<i64> {
        match self {
            CollectiveOptions::Broadcast(o) => Some(o.root_rank),
            CollectiveOptions::Reduce(o) => Some(o.root_rank),
            CollectiveOptions::Gather(o) => Some(o.root_rank),
            CollectiveOptions::Scatter(o) => Some(o.root_rank),
            _ => None,
        }
    }

    pub fn is_coalesced(&self) -> bool {
        matches!(self, CollectiveOptions::AllreduceCoalesced(_))
    }
}

macro_rules! impl_from_options {
    ($($variant:ident => $opts:ty),* $(,)?) => {
        $(
            impl From<$opts> for CollectiveOptions {
                fn from(opts: $opts) -> Self {
                    CollectiveOptions::$variant(opts)
                }
            }
        )*
    };
}

impl_from_options! {
    Broadcast => BroadcastOptions,
    Allreduce => AllreduceOptions,
    AllreduceCoalesced => AllreduceCoalescedOptions,
    Reduce => ReduceOptions,
    Allgather => AllgatherOptions,
    Gather => GatherOptions,
    Scatter => ScatterOptions,
    ReduceScatter => ReduceScatterOptions,
    AllToAll => AllToAllOptions,
    Barrier => BarrierOptions,
}
