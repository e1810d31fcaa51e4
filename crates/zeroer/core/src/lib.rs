// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # zeroer-core
//!
//! Deterministic, scope-bound zeroing of buffers that hold sensitive data.
//!
//! ## Core Types
//!
//! - [`Zeroable`]: anything that can be told to clear itself
//! - [`ZeroableArray`]: adapter over a primitive buffer (`[T]`, `[T; N]`, `Vec<T>`, `Box<[T]>`)
//! - [`ZeroableSeq`] / [`ZeroableCollection`]: adapters over many zeroable elements
//! - [`Zeroer`]: a registry of resources zeroed together when a scope ends
//! - [`zeroing`] / [`try_zeroing`]: run a block with a fresh [`Zeroer`] and zero it on exit
//!
//! ## Failure model
//!
//! Zeroing many resources is best-effort-complete: every element is attempted
//! and every failure is collected into a [`ZeroingError`]. A block failure
//! always stays primary; a teardown failure that follows it travels alongside
//! in the `suppressed` field of [`ScopeError::Block`].
//!
//! ## Example
//!
//! ```rust
//! use zeroer_core::{shared, try_zeroing, zeroables, ScopeError};
//!
//! let mut password = *b"hunter2";
//!
//! let result: Result<usize, ScopeError<&str>> = try_zeroing(zeroables![&mut password], |z| {
//!     let derived = z.zero_at_end(shared(vec![0x5Au8; 32]));
//!     Ok(derived.borrow().len())
//! });
//!
//! assert_eq!(result.ok(), Some(32));
//! assert_eq!(password, [0u8; 7]);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod collections;
mod error;
mod pointers;
mod primitives;
mod support;
mod traits;
mod zero_on_drop;
mod zeroer;
mod zeroing;

pub use collections::{ZeroableCollection, ZeroableSeq, zero_all};
pub use error::{ScopeError, ZeroError, ZeroingError};
pub use pointers::{Shared, shared};
pub use primitives::{
    PrimitiveBuffer, ZeroableArray, ZeroableBoolArray, ZeroableCharArray, ZeroableF32Array,
    ZeroableF64Array, ZeroableI8Array, ZeroableI16Array, ZeroableI32Array, ZeroableI64Array,
    ZeroableI128Array, ZeroableIsizeArray, ZeroableU8Array, ZeroableU16Array, ZeroableU32Array,
    ZeroableU64Array, ZeroableU128Array, ZeroableUsizeArray, wrap, zero,
};
pub use traits::{Zeroable, ZeroizationProbe};
pub use zero_on_drop::ZeroOnDrop;
pub use zeroer::{Zeroer, boxed};
pub use zeroing::{try_zeroing, zeroing};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
