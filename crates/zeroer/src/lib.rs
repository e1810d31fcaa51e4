// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # Zeroer
//!
//! Deterministic, scope-bound zeroing of buffers that hold sensitive data.
//!
//! This is a re-export crate over [`zeroer-core`] for convenience.
//!
//! ## Quick Start
//!
//! ```rust
//! use zeroer::{shared, zeroables, zeroing};
//!
//! let mut key = [0x42u8; 32];
//! let mut iv = vec![0x24u8; 12];
//!
//! let tag_len = zeroing(zeroables![&mut key, &mut iv], |z| {
//!     // Scratch buffers created inside the block are registered as they appear.
//!     let tag = z.zero_at_end(shared(vec![0xFFu8; 16]));
//!     let len = tag.borrow().len();
//!     len
//! })
//! .unwrap();
//!
//! assert_eq!(tag_len, 16);
//! assert_eq!(key, [0u8; 32]);
//! assert_eq!(iv, vec![0u8; 12]);
//! ```
//!
//! ## What's Included
//!
//! - **Traits**: [`Zeroable`], [`ZeroizationProbe`]
//! - **Adapters**: [`ZeroableArray`] and its per-primitive aliases, [`ZeroableSeq`], [`ZeroableCollection`]
//! - **Scopes**: [`Zeroer`], [`zeroing`], [`try_zeroing`], [`ZeroOnDrop`]
//! - **Errors**: [`ZeroError`], [`ZeroingError`], [`ScopeError`]
//! - **Test helpers**: `test_utils::MockZeroable` (feature `test-utils`)
//!
//! [`zeroer-core`]: https://docs.rs/zeroer-core
//! [`Zeroable`]: zeroer_core::Zeroable
//! [`ZeroizationProbe`]: zeroer_core::ZeroizationProbe
//! [`ZeroableArray`]: zeroer_core::ZeroableArray
//! [`ZeroableSeq`]: zeroer_core::ZeroableSeq
//! [`ZeroableCollection`]: zeroer_core::ZeroableCollection
//! [`Zeroer`]: zeroer_core::Zeroer
//! [`zeroing`]: zeroer_core::zeroing
//! [`try_zeroing`]: zeroer_core::try_zeroing
//! [`ZeroOnDrop`]: zeroer_core::ZeroOnDrop
//! [`ZeroError`]: zeroer_core::ZeroError
//! [`ZeroingError`]: zeroer_core::ZeroingError
//! [`ScopeError`]: zeroer_core::ScopeError

#![cfg_attr(not(test), no_std)]

pub use zeroer_core::*;
