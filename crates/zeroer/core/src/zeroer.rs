// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Registry of resources zeroed together when a scope ends.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::fmt;
use core::iter;

use crate::collections::zero_all;
use crate::error::{ZeroError, ZeroingError};
use crate::pointers::Shared;
use crate::traits::Zeroable;

/// Boxes `resource` as a registry entry.
///
/// Used by the [`zeroables!`](crate::zeroables) macro to build the initial
/// resources of a [`zeroing`](crate::zeroing) call.
pub fn boxed<'a, Z: Zeroable + 'a>(resource: Z) -> Box<dyn Zeroable + 'a> {
    Box::new(resource)
}

/// Ordered registry of zeroable resources tied to one scope.
///
/// Resources are zeroed in registration order by [`drain`](Self::drain) (or
/// [`Zeroable::zero`]). A `Zeroer` is itself [`Zeroable`], and it zeroes
/// whatever is still registered when it is dropped, so a panic unwinding
/// through the scope still clears everything.
///
/// Prefer [`zeroing`](crate::zeroing) / [`try_zeroing`](crate::try_zeroing)
/// over driving a `Zeroer` by hand.
///
/// # Example
///
/// ```rust
/// use zeroer_core::{shared, Zeroer};
///
/// let mut zeroer = Zeroer::new();
/// let nonce = zeroer.zero_at_end(shared(vec![7u8; 12]));
///
/// assert_eq!(nonce.borrow()[0], 7);
///
/// zeroer.drain().unwrap();
/// assert_eq!(*nonce.borrow(), vec![0u8; 12]);
/// ```
#[derive(Default)]
pub struct Zeroer<'a> {
    to_zero: VecDeque<Box<dyn Zeroable + 'a>>,
    drained: bool,
}

impl<'a> Zeroer<'a> {
    /// Creates an empty, active registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with `resources`, in iteration order.
    pub fn from_resources<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Zeroable + 'a>>,
    {
        Self {
            to_zero: resources.into_iter().collect(),
            drained: false,
        }
    }

    /// Registers `resource` and returns the registry, for builder-style seeding.
    pub fn with<Z: Zeroable + 'a>(mut self, resource: Z) -> Self {
        self.register(resource);
        self
    }

    /// Takes ownership of `resource` and zeroes it when the scope ends.
    ///
    /// Pass `&mut buffer` to register a borrowed resource instead.
    pub fn register<Z: Zeroable + 'a>(&mut self, resource: Z) {
        self.push(Box::new(resource));
    }

    /// Registers a shared resource and hands the same handle back, so the
    /// resource can be created, registered and used in one expression.
    ///
    /// The returned handle is the one passed in (`Rc::ptr_eq` holds); the
    /// registry keeps its own clone.
    ///
    /// Only the value inside the handle is zeroed. Moving an inline array
    /// into [`shared`](crate::shared) may leave a copy of it on the stack;
    /// prefer heap-backed buffers (`Vec<T>`, `Box<[T]>`) for secrets created
    /// this way.
    pub fn zero_at_end<Z: Zeroable + 'a>(&mut self, resource: Shared<Z>) -> Shared<Z> {
        self.push(Box::new(Rc::clone(&resource)));
        resource
    }

    fn push(&mut self, resource: Box<dyn Zeroable + 'a>) {
        if self.drained {
            log::warn!("resource registered after the scope was zeroed");
        }
        self.to_zero.push_back(resource);
        log::trace!("registered resource #{}", self.to_zero.len());
    }

    /// Number of resources waiting to be zeroed.
    pub fn len(&self) -> usize {
        self.to_zero.len()
    }

    /// Returns `true` if nothing is waiting to be zeroed.
    pub fn is_empty(&self) -> bool {
        self.to_zero.is_empty()
    }

    /// Returns `true` once the registry has been zeroed at least once.
    pub fn is_drained(&self) -> bool {
        self.drained
    }

    /// Zeroes every registered resource in registration order and empties
    /// the registry.
    ///
    /// All resources are attempted even if some fail; failures come back
    /// together as one [`ZeroingError`].
    ///
    /// Each resource leaves the registry only when its turn comes, so if one
    /// panics the rest are still registered and get zeroed by `Drop`.
    pub fn drain(&mut self) -> Result<(), ZeroingError> {
        self.drained = true;

        log::debug!("zeroing {} registered resource(s)", self.to_zero.len());

        let to_zero = &mut self.to_zero;
        zero_all(iter::from_fn(|| to_zero.pop_front()))
    }
}

impl fmt::Debug for Zeroer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zeroer")
            .field("registered", &self.to_zero.len())
            .field("drained", &self.drained)
            .finish()
    }
}

impl Zeroable for Zeroer<'_> {
    fn zero(&mut self) -> Result<(), ZeroError> {
        self.drain()?;
        Ok(())
    }
}

impl Drop for Zeroer<'_> {
    fn drop(&mut self) {
        if self.to_zero.is_empty() {
            return;
        }

        if let Err(err) = self.drain() {
            log::error!("zeroing on drop: {err}");
            for failure in &err {
                log::error!("  caused by: {failure}");
            }
        }
    }
}
