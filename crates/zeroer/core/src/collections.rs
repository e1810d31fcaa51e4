// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Best-effort zeroing of many resources, and adapters over collections of them.
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::error::{ZeroError, ZeroingError};
use crate::traits::{Zeroable, ZeroizationProbe};

/// Zeroes every element in iteration order.
///
/// A failing element does not stop the pass: its error is recorded and the
/// next element is attempted. Once all elements have been visited, the
/// collected failures (if any) are returned as one [`ZeroingError`], in the
/// order they occurred.
///
/// Elements may be borrowed (`&mut Z`) or owned (`Box<dyn Zeroable>`); an
/// owned element is dropped right after its own `zero()` returns.
///
/// # Example
///
/// ```rust
/// let mut a = [1u8; 4];
/// let mut b = vec![2u32; 4];
///
/// zeroer_core::zero_all([&mut a as &mut dyn zeroer_core::Zeroable, &mut b]).unwrap();
///
/// assert_eq!(a, [0; 4]);
/// assert_eq!(b, [0; 4]);
/// ```
pub fn zero_all<I>(elements: I) -> Result<(), ZeroingError>
where
    I: IntoIterator,
    I::Item: Zeroable,
{
    let mut failures: Vec<ZeroError> = Vec::new();

    for (index, mut element) in elements.into_iter().enumerate() {
        if let Err(e) = element.zero() {
            log::debug!("element #{index} failed to zero: {e}");
            failures.push(e);
        }
        compiler_fence(Ordering::SeqCst);
    }

    match ZeroingError::from_failures(failures) {
        None => Ok(()),
        Some(err) => {
            log::warn!("{err}");
            Err(err)
        }
    }
}

// === === === === === === === === === ===
// Ordered sequences
// === === === === === === === === === ===

/// Zeroable adapter over an ordered sequence of zeroable elements
/// (`Vec<Z>`, `[Z; N]`, `Box<[Z]>`, `&mut [Z]`).
///
/// Elements are zeroed front to back. Absent elements (`None` in a sequence
/// of `Option<Z>`) are skipped.
pub struct ZeroableSeq<Z, S> {
    inner: S,
    _elem: PhantomData<fn() -> Z>,
}

impl<Z, S> ZeroableSeq<Z, S>
where
    Z: Zeroable,
    S: AsMut<[Z]>,
{
    /// Wraps `inner` without copying it.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            _elem: PhantomData,
        }
    }
}

impl<Z, S> ZeroableSeq<Z, S> {
    /// The wrapped sequence.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// The wrapped sequence, mutably.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwraps the sequence.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<Z, S> fmt::Debug for ZeroableSeq<Z, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroableSeq]")
    }
}

impl<Z, S> Zeroable for ZeroableSeq<Z, S>
where
    Z: Zeroable,
    S: AsMut<[Z]>,
{
    fn zero(&mut self) -> Result<(), ZeroError> {
        zero_all(self.inner.as_mut().iter_mut())?;
        Ok(())
    }
}

impl<Z, S> ZeroizationProbe for ZeroableSeq<Z, S>
where
    Z: ZeroizationProbe,
    S: AsRef<[Z]>,
{
    fn is_zeroized(&self) -> bool {
        self.inner.as_ref().iter().all(ZeroizationProbe::is_zeroized)
    }
}

// === === === === === === === === === ===
// General containers
// === === === === === === === === === ===

/// Zeroable adapter over any container whose elements can be visited
/// mutably (`VecDeque<Z>`, `LinkedList<Z>`, ...).
///
/// Elements are zeroed in the container's iteration order, which need not be
/// meaningful.
pub struct ZeroableCollection<Z, C> {
    inner: C,
    _elem: PhantomData<fn() -> Z>,
}

impl<Z, C> ZeroableCollection<Z, C>
where
    Z: Zeroable,
    for<'x> &'x mut C: IntoIterator<Item = &'x mut Z>,
{
    /// Wraps `inner` without copying it.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            _elem: PhantomData,
        }
    }
}

impl<Z, C> ZeroableCollection<Z, C> {
    /// The wrapped container.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// The wrapped container, mutably.
    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Unwraps the container.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<Z, C> fmt::Debug for ZeroableCollection<Z, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroableCollection]")
    }
}

impl<Z, C> Zeroable for ZeroableCollection<Z, C>
where
    Z: Zeroable,
    for<'x> &'x mut C: IntoIterator<Item = &'x mut Z>,
{
    fn zero(&mut self) -> Result<(), ZeroError> {
        zero_all(&mut self.inner)?;
        Ok(())
    }
}

impl<Z, C> ZeroizationProbe for ZeroableCollection<Z, C>
where
    Z: ZeroizationProbe,
    for<'x> &'x C: IntoIterator<Item = &'x Z>,
{
    fn is_zeroized(&self) -> bool {
        (&self.inner).into_iter().all(ZeroizationProbe::is_zeroized)
    }
}
