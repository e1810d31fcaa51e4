// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for scope-bound zeroing.

use crate::error::ZeroError;

/// A resource that can clear its own contents on demand.
///
/// `zero()` must be safe to call repeatedly: zeroing an already-cleared
/// resource is a no-op. On failure the resource's state is unspecified, but
/// the failure is always reported.
///
/// This trait is dyn-compatible; [`Zeroer`](crate::Zeroer) stores resources
/// as `Box<dyn Zeroable>`.
///
/// # Example
///
/// ```rust
/// use zeroer_core::{Zeroable, ZeroError};
///
/// struct Pin {
///     digits: [u8; 4],
/// }
///
/// impl Zeroable for Pin {
///     fn zero(&mut self) -> Result<(), ZeroError> {
///         self.digits.zero()
///     }
/// }
///
/// let mut pin = Pin { digits: [1, 2, 3, 4] };
/// pin.zero().unwrap();
/// assert_eq!(pin.digits, [0; 4]);
/// ```
pub trait Zeroable {
    /// Overwrites the resource's contents with its zero value.
    fn zero(&mut self) -> Result<(), ZeroError>;

    /// Closes the resource by zeroing it, consuming the handle.
    ///
    /// For drop-time zeroing see [`ZeroOnDrop`](crate::ZeroOnDrop).
    fn close(mut self) -> Result<(), ZeroError>
    where
        Self: Sized,
    {
        self.zero()
    }
}

/// Runtime check that a value has been zeroed.
pub trait ZeroizationProbe {
    /// Returns `true` if every slot holds its type's zero value.
    fn is_zeroized(&self) -> bool;
}
