// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard that zeroes a resource when it goes out of scope.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::error::ZeroError;
use crate::traits::{Zeroable, ZeroizationProbe};

/// RAII guard that zeroes the wrapped resource on drop.
///
/// Dropping cannot report failure, so a failed drop-time zeroing is logged at
/// `error` level. Call [`close`](Self::close) to zero explicitly and get the
/// result back.
///
/// # Example
///
/// ```rust
/// use zeroer_core::ZeroOnDrop;
///
/// let mut session_key = [0x42u8; 32];
///
/// {
///     let mut guard = ZeroOnDrop::new(&mut session_key);
///     guard[0] = 0x43;
/// } // guard drops here, session_key is zeroed
///
/// assert_eq!(session_key, [0u8; 32]);
/// ```
pub struct ZeroOnDrop<Z: Zeroable> {
    inner: Z,
    closed: bool,
}

impl<Z: Zeroable> ZeroOnDrop<Z> {
    /// Guards `inner` until drop.
    pub fn new(inner: Z) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Zeroes the resource now and reports the outcome. Drop does nothing
    /// afterwards.
    pub fn close(mut self) -> Result<(), ZeroError> {
        self.closed = true;
        self.inner.zero()
    }
}

impl<Z: Zeroable> fmt::Debug for ZeroOnDrop<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroOnDrop]")
    }
}

impl<Z: Zeroable> Deref for ZeroOnDrop<Z> {
    type Target = Z;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<Z: Zeroable> DerefMut for ZeroOnDrop<Z> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<Z: Zeroable> Zeroable for ZeroOnDrop<Z> {
    fn zero(&mut self) -> Result<(), ZeroError> {
        self.inner.zero()
    }
}

impl<Z: Zeroable + ZeroizationProbe> ZeroizationProbe for ZeroOnDrop<Z> {
    fn is_zeroized(&self) -> bool {
        self.inner.is_zeroized()
    }
}

impl<Z: Zeroable> Drop for ZeroOnDrop<Z> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }

        if let Err(err) = self.inner.zero() {
            log::error!("zeroing on drop: {err}");
        }
    }
}
