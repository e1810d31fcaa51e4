// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::support::mock_failure_id;
use crate::support::test_utils::{MockZeroable, MockZeroableBehaviour};
use crate::{
    ScopeError, ZeroingError, ZeroizationProbe, shared, try_zeroing, zeroables, zeroing,
};

#[derive(Debug, PartialEq, Eq)]
enum BlockError {
    InvalidArgument,
    InvalidState,
}

impl core::fmt::Display for BlockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[test]
fn test_zeroing_returns_block_value_and_zeroes_everything() {
    let initial = [
        MockZeroable::with_id(0, MockZeroableBehaviour::None),
        MockZeroable::with_id(1, MockZeroableBehaviour::None),
    ];
    let dynamic = [
        MockZeroable::with_id(2, MockZeroableBehaviour::None),
        MockZeroable::with_id(3, MockZeroableBehaviour::None),
        MockZeroable::with_id(4, MockZeroableBehaviour::None),
    ];

    let value = zeroing(zeroables![initial[0].clone(), initial[1].clone()], |z| {
        for mock in &dynamic {
            z.register(mock.clone());
        }
        // Nothing is zeroed while the block runs.
        assert!(initial.iter().chain(&dynamic).all(|m| m.call_count() == 0));
        42
    })
    .expect("Failed to zeroing()");

    assert_eq!(value, 42);
    assert!(initial.iter().chain(&dynamic).all(|m| m.call_count() == 1));
}

#[test]
fn test_zeroing_registers_values_computed_in_block() {
    let mut password = *b"correct horse";

    let checksum = zeroing(zeroables![&mut password], |z| {
        let derived = z.zero_at_end(shared(vec![0u8; 4]));
        for (i, byte) in derived.borrow_mut().iter_mut().enumerate() {
            *byte = i as u8 + 1;
        }
        let sum: u32 = derived.borrow().iter().map(|b| u32::from(*b)).sum();
        sum
    })
    .expect("Failed to zeroing()");

    assert_eq!(checksum, 10);
    assert!(password.is_zeroized());
}

#[test]
fn test_zeroing_failure_propagates_as_aggregate() {
    let ok = MockZeroable::with_id(0, MockZeroableBehaviour::None);
    let bad = MockZeroable::with_id(1, MockZeroableBehaviour::FailAlways);

    let err = zeroing(zeroables![ok.clone()], |z| {
        z.register(bad.clone());
    })
    .expect_err("Expected zeroing() to fail");

    assert_eq!(err.len(), 1);
    assert_eq!(mock_failure_id(&err.failures()[0]), Some(1));
    assert_eq!(ok.call_count(), 1);
    assert_eq!(bad.call_count(), 1);
}

#[test]
fn test_try_zeroing_ok() {
    let mock = MockZeroable::new(MockZeroableBehaviour::None);

    let result: Result<&str, ScopeError<BlockError>> =
        try_zeroing(zeroables![mock.clone()], |_| Ok("done"));

    assert_eq!(result.expect("Failed to try_zeroing()"), "done");
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_try_zeroing_block_fails() {
    let first = MockZeroable::with_id(0, MockZeroableBehaviour::None);
    let second = MockZeroable::with_id(1, MockZeroableBehaviour::None);

    let result: Result<(), _> = try_zeroing(zeroables![first.clone()], |z| {
        z.register(second.clone());
        Err(BlockError::InvalidArgument)
    });

    let err = result.expect_err("Expected try_zeroing() to fail");
    assert_eq!(err.block_error(), Some(&BlockError::InvalidArgument));
    assert!(err.suppressed().is_none());
    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 1);
}

#[test]
fn test_try_zeroing_zeroing_fails() {
    let first = MockZeroable::with_id(0, MockZeroableBehaviour::None);
    let second = MockZeroable::with_id(1, MockZeroableBehaviour::FailAlways);

    let result: Result<(), ScopeError<BlockError>> =
        try_zeroing(zeroables![first.clone()], |z| {
            z.register(second.clone());
            Ok(())
        });

    let err = result.expect_err("Expected try_zeroing() to fail");
    let ScopeError::Zeroing(agg) = err else {
        panic!("Expected zeroing failure");
    };
    assert_eq!(agg.len(), 1);
    assert_eq!(mock_failure_id(&agg.failures()[0]), Some(1));
    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 1);
}

#[test]
fn test_try_zeroing_block_and_zeroing_fail() {
    let first = MockZeroable::with_id(0, MockZeroableBehaviour::None);
    let second = MockZeroable::with_id(1, MockZeroableBehaviour::FailAlways);

    let result: Result<(), _> = try_zeroing(zeroables![first.clone()], |z| {
        z.register(second.clone());
        Err(BlockError::InvalidState)
    });

    let err = result.expect_err("Expected try_zeroing() to fail");
    assert!(err.zeroing_error().is_some());

    let (error, suppressed) = err
        .into_block_error()
        .expect("Block failure must stay primary");
    assert_eq!(error, BlockError::InvalidState);

    let suppressed = suppressed.expect("Zeroing failure must be attached");
    assert_eq!(suppressed.len(), 1);
    assert_eq!(mock_failure_id(&suppressed.failures()[0]), Some(1));
    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 1);
}

#[test]
fn test_try_zeroing_display_uses_block_error() {
    let bad = MockZeroable::new(MockZeroableBehaviour::FailAlways);

    let result: Result<(), _> =
        try_zeroing(zeroables![bad], |_| Err(BlockError::InvalidArgument));

    let err = result.expect_err("Expected try_zeroing() to fail");
    assert_eq!(err.to_string(), "InvalidArgument");
}

#[test]
fn test_zeroing_zeroes_on_panic() {
    let initial = MockZeroable::with_id(0, MockZeroableBehaviour::None);
    let dynamic = MockZeroable::with_id(1, MockZeroableBehaviour::None);

    let outcome = catch_unwind(AssertUnwindSafe(|| -> Result<(), ZeroingError> {
        zeroing(zeroables![initial.clone()], |z| {
            z.register(dynamic.clone());
            panic!("block panicked");
        })
    }));

    assert!(outcome.is_err());
    assert_eq!(initial.call_count(), 1);
    assert_eq!(dynamic.call_count(), 1);
}

#[test]
fn test_zeroing_without_resources() {
    let value = zeroing(zeroables![], |z| z.len()).expect("Failed to zeroing()");
    assert_eq!(value, 0);
}

#[test]
fn test_zeroing_continues_after_panicking_resource() {
    struct PanicsOnZero;

    impl crate::Zeroable for PanicsOnZero {
        fn zero(&mut self) -> Result<(), crate::ZeroError> {
            panic!("zero() panicked");
        }
    }

    let initial = MockZeroable::with_id(0, MockZeroableBehaviour::None);
    let dynamic = MockZeroable::with_id(1, MockZeroableBehaviour::None);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        zeroing(zeroables![PanicsOnZero, initial.clone()], |z| {
            z.register(dynamic.clone());
        })
    }));

    assert!(outcome.is_err());
    assert_eq!(initial.call_count(), 1);
    assert_eq!(dynamic.call_count(), 1);
}
