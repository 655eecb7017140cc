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

//! Tests for ReduceOp

use std::collections::HashSet;

use cylon_collectives::error::Code;
use cylon_collectives::{CollectiveError, ReduceOp};

#[test]
fn test_reduce_op_has_exactly_nine_variants() {
    assert_eq!(ReduceOp::ALL.len(), 9);

    let distinct: HashSet<ReduceOp> = ReduceOp::ALL.iter().copied().collect();
    assert_eq!(distinct.len(), 9);

    // Exhaustive match: adding a variant breaks this test at compile time
    for op in ReduceOp::ALL {
        let listed = match op {
            ReduceOp::Sum
            | ReduceOp::Avg
            | ReduceOp::Product
            | ReduceOp::Min
            | ReduceOp::Max
            | ReduceOp::Band
            | ReduceOp::Bor
            | ReduceOp::Bxor
            | ReduceOp::Unused => true,
        };
        assert!(listed);
    }
}

#[test]
fn test_reduce_op_default_is_sum() {
    assert_eq!(ReduceOp::default(), ReduceOp::Sum);
}

#[test]
fn test_reduce_op_discriminants() {
    for (i, op) in ReduceOp::ALL.iter().enumerate() {
        assert_eq!(u8::from(*op) as usize, i);
        assert_eq!(ReduceOp::try_from(i as u8).unwrap(), *op);
    }
    assert_eq!(ReduceOp::Sum as u8, 0);
    assert_eq!(ReduceOp::Unused as u8, 8);
}

#[test]
fn test_reduce_op_invalid_discriminant() {
    let err = ReduceOp::try_from(9u8).unwrap_err();
    assert!(matches!(err, CollectiveError::InvalidReduceOp(_)));
    assert_eq!(err.code(), Code::Invalid);

    assert!(ReduceOp::try_from(u8::MAX).is_err());
}

#[test]
fn test_reduce_op_bitwise_classification() {
    let bitwise: Vec<ReduceOp> = ReduceOp::ALL
        .iter()
        .copied()
        .filter(ReduceOp::is_bitwise)
        .collect();
    assert_eq!(bitwise, vec![ReduceOp::Band, ReduceOp::Bor, ReduceOp::Bxor]);

    assert!(ReduceOp::Unused.is_unused());
    assert!(!ReduceOp::Sum.is_unused());
}

#[test]
fn test_reduce_op_names() {
    assert_eq!(ReduceOp::Sum.to_string(), "SUM");
    assert_eq!(ReduceOp::Avg.to_string(), "AVG");
    assert_eq!(ReduceOp::Product.to_string(), "PRODUCT");
    assert_eq!(ReduceOp::Bxor.to_string(), "BXOR");
    assert_eq!(ReduceOp::Unused.name(), "UNUSED");
}

#[test]
fn test_reduce_op_from_str() {
    for op in ReduceOp::ALL {
        assert_eq!(op.name().parse::<ReduceOp>().unwrap(), op);
        assert_eq!(op.name().to_lowercase().parse::<ReduceOp>().unwrap(), op);
    }
    assert_eq!(" max ".parse::<ReduceOp>().unwrap(), ReduceOp::Max);

    let err = "LAND".parse::<ReduceOp>().unwrap_err();
    assert!(matches!(err, CollectiveError::InvalidReduceOp(ref s) if s == "LAND"));
    assert!("".parse::<ReduceOp>().is_err());
}

#[test]
fn test_reduce_op_serde_uses_canonical_names() {
    assert_eq!(serde_json::to_string(&ReduceOp::Bor).unwrap(), "\"BOR\"");
    assert_eq!(serde_json::to_string(&ReduceOp::Avg).unwrap(), "\"AVG\"");

    let op: ReduceOp = serde_json::from_str("\"PRODUCT\"").unwrap();
    assert_eq!(op, ReduceOp::Product);

    assert!(serde_json::from_str::<ReduceOp>("\"sum\"").is_err());
}
