// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Low-level helpers for clearing and inspecting primitive buffers.
//!
//! Writes go through [`zeroize`], which uses volatile stores followed by a
//! compiler fence, so the fill survives even when the buffer is never read
//! again.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

pub use zeroize::DefaultIsZeroes;
use zeroize::Zeroize;

/// Fills every element of `slice` with its type's zero value (`T::default()`).
///
/// # Example
///
/// ```
/// use zeroer_util::{is_slice_zeroized, zeroize_slice};
///
/// let mut key = [0xAAu8; 16];
/// zeroize_slice(&mut key);
/// assert!(is_slice_zeroized(&key));
/// ```
#[inline]
pub fn zeroize_slice<T: DefaultIsZeroes>(slice: &mut [T]) {
    slice.zeroize();
    compiler_fence(Ordering::SeqCst);
}

/// Zeroes the spare capacity (`len..capacity`) of a `Vec` without touching
/// its length or its live elements.
///
/// Bytes left behind by `truncate()` or `clear()` stay in the allocation
/// until overwritten; this clears them.
#[inline]
pub fn zeroize_spare_capacity<T>(vec: &mut Vec<T>) {
    vec.spare_capacity_mut().zeroize();
    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every element of `slice` equals `T::default()`.
///
/// # Example
///
/// ```
/// use zeroer_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u32; 4]));
/// assert!(is_slice_zeroized(&[false; 4]));
/// assert!(!is_slice_zeroized(&['a', '\0']));
/// ```
#[inline]
pub fn is_slice_zeroized<T: DefaultIsZeroes + PartialEq>(slice: &[T]) -> bool {
    let zero = T::default();
    slice.iter().all(|elem| *elem == zero)
}

/// Verifies that a `Vec<u8>` is zeroed across its whole allocation,
/// spare capacity included.
///
/// Only meaningful once the spare capacity has been written at least once
/// (e.g. by [`zeroize_spare_capacity`]); a fresh allocation may hold
/// arbitrary bytes there.
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    for i in 0..cap {
        // SAFETY: `base` is valid for `cap` bytes of the same allocation and
        // we only read.
        unsafe {
            if core::ptr::read_volatile(base.add(i)) != 0 {
                return false;
            }
        }
    }

    true
}

/// Fills `slice` with `pattern`.
///
/// Handy for seeding buffers with recognisable "secret" content before
/// zeroing them.
#[inline]
pub fn fill_with_pattern<T: Copy>(slice: &mut [T], pattern: T) {
    for elem in slice.iter_mut() {
        *elem = pattern;
    }
}
