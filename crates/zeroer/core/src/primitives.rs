// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Zeroing for primitive buffers.
//!
//! Every element type whose zero value is its `Default` is supported: signed
//! and unsigned integers, `f32`, `f64`, `bool` (`false`) and `char` (`'\0'`).

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use zeroer_util::DefaultIsZeroes;

use crate::error::ZeroError;
use crate::traits::{Zeroable, ZeroizationProbe};

/// A contiguous buffer of primitive elements that can be filled in place.
pub trait PrimitiveBuffer {
    /// Element type.
    type Elem: DefaultIsZeroes + PartialEq;

    /// The live elements.
    fn elems(&self) -> &[Self::Elem];

    /// The live elements, mutably.
    fn elems_mut(&mut self) -> &mut [Self::Elem];

    /// Clears storage beyond the live elements. No-op for fixed-size buffers.
    fn zero_spare(&mut self) {}
}

impl<T: DefaultIsZeroes + PartialEq> PrimitiveBuffer for [T] {
    type Elem = T;

    fn elems(&self) -> &[T] {
        self
    }

    fn elems_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: DefaultIsZeroes + PartialEq, const N: usize> PrimitiveBuffer for [T; N] {
    type Elem = T;

    fn elems(&self) -> &[T] {
        self
    }

    fn elems_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: DefaultIsZeroes + PartialEq> PrimitiveBuffer for Vec<T> {
    type Elem = T;

    fn elems(&self) -> &[T] {
        self
    }

    fn elems_mut(&mut self) -> &mut [T] {
        self
    }

    fn zero_spare(&mut self) {
        zeroer_util::zeroize_spare_capacity(self);
    }
}

impl<T: DefaultIsZeroes + PartialEq> PrimitiveBuffer for Box<[T]> {
    type Elem = T;

    fn elems(&self) -> &[T] {
        self
    }

    fn elems_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<B: PrimitiveBuffer + ?Sized> PrimitiveBuffer for &mut B {
    type Elem = B::Elem;

    fn elems(&self) -> &[B::Elem] {
        (**self).elems()
    }

    fn elems_mut(&mut self) -> &mut [B::Elem] {
        (**self).elems_mut()
    }

    fn zero_spare(&mut self) {
        (**self).zero_spare();
    }
}

/// Fills `buffer` with zeros in place, without wrapping it.
///
/// The length is preserved; for `Vec` the spare capacity is cleared too.
///
/// # Example
///
/// ```rust
/// let mut plaintext = vec![b'x'; 64];
/// zeroer_core::zero(&mut plaintext);
/// assert_eq!(plaintext, vec![0u8; 64]);
/// ```
pub fn zero<B: PrimitiveBuffer + ?Sized>(buffer: &mut B) {
    zeroer_util::zeroize_slice(buffer.elems_mut());
    buffer.zero_spare();
}

/// Zeroable adapter over a primitive buffer.
///
/// The buffer is held as given (owned, or borrowed via `&mut`); nothing is
/// copied, and [`inner`](Self::inner) hands back the very same buffer.
pub struct ZeroableArray<B> {
    inner: B,
}

/// Wraps `buffer` in a [`ZeroableArray`].
///
/// # Example
///
/// ```rust
/// use zeroer_core::{wrap, Zeroable};
///
/// let mut key = [1u8; 5];
/// let mut zeroable = wrap(&mut key);
/// zeroable.zero().unwrap();
/// assert_eq!(key, [0u8; 5]);
/// ```
pub fn wrap<B: PrimitiveBuffer>(buffer: B) -> ZeroableArray<B> {
    ZeroableArray::new(buffer)
}

impl<B> ZeroableArray<B> {
    /// Wraps `inner` without copying it.
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    /// The wrapped buffer.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// The wrapped buffer, mutably.
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    /// Unwraps the buffer. Its contents are left as they are.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B> fmt::Debug for ZeroableArray<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroableArray]")
    }
}

impl<B: PrimitiveBuffer> Zeroable for ZeroableArray<B> {
    fn zero(&mut self) -> Result<(), ZeroError> {
        zero(&mut self.inner);
        Ok(())
    }
}

impl<B: PrimitiveBuffer> ZeroizationProbe for ZeroableArray<B> {
    fn is_zeroized(&self) -> bool {
        zeroer_util::is_slice_zeroized(self.inner.elems())
    }
}

// === === === === === === === === === ===
// Raw buffers
// === === === === === === === === === ===

impl<T: DefaultIsZeroes + PartialEq> Zeroable for [T] {
    fn zero(&mut self) -> Result<(), ZeroError> {
        zero(self);
        Ok(())
    }
}

impl<T: DefaultIsZeroes + PartialEq, const N: usize> Zeroable for [T; N] {
    fn zero(&mut self) -> Result<(), ZeroError> {
        zero(self);
        Ok(())
    }
}

impl<T: DefaultIsZeroes + PartialEq> Zeroable for Vec<T> {
    fn zero(&mut self) -> Result<(), ZeroError> {
        zero(self);
        Ok(())
    }
}

impl<T: DefaultIsZeroes + PartialEq> ZeroizationProbe for [T] {
    fn is_zeroized(&self) -> bool {
        zeroer_util::is_slice_zeroized(self)
    }
}

impl<T: DefaultIsZeroes + PartialEq, const N: usize> ZeroizationProbe for [T; N] {
    fn is_zeroized(&self) -> bool {
        zeroer_util::is_slice_zeroized(self)
    }
}

impl<T: DefaultIsZeroes + PartialEq> ZeroizationProbe for Vec<T> {
    fn is_zeroized(&self) -> bool {
        zeroer_util::is_slice_zeroized(self)
    }
}

// === === === === === === === === === ===
// Per-kind borrowed adapters
// === === === === === === === === === ===

macro_rules! impl_primitive_array_aliases {
    ($(($ty:ty, $alias:ident)),* $(,)?) => {
        $(
            #[doc = concat!("[`ZeroableArray`] borrowing a `[", stringify!($ty), "]` buffer.")]
            pub type $alias<'a> = ZeroableArray<&'a mut [$ty]>;
        )*
    };
}

impl_primitive_array_aliases!(
    (u8, ZeroableU8Array),
    (u16, ZeroableU16Array),
    (u32, ZeroableU32Array),
    (u64, ZeroableU64Array),
    (u128, ZeroableU128Array),
    (usize, ZeroableUsizeArray),
    (i8, ZeroableI8Array),
    (i16, ZeroableI16Array),
    (i32, ZeroableI32Array),
    (i64, ZeroableI64Array),
    (i128, ZeroableI128Array),
    (isize, ZeroableIsizeArray),
    (f32, ZeroableF32Array),
    (f64, ZeroableF64Array),
    (bool, ZeroableBoolArray),
    (char, ZeroableCharArray),
);
