// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Forwarding implementations for references, boxes, options and shared handles.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use crate::error::ZeroError;
use crate::traits::{Zeroable, ZeroizationProbe};

/// Shared, single-threaded handle to a zeroable resource.
///
/// Cloning the handle aliases the same storage, which is what lets a
/// [`Zeroer`](crate::Zeroer) keep one clone for teardown while the caller
/// keeps using the other.
pub type Shared<Z> = Rc<RefCell<Z>>;

/// Moves `value` into a new [`Shared`] handle.
pub fn shared<Z>(value: Z) -> Shared<Z> {
    Rc::new(RefCell::new(value))
}

impl<Z: Zeroable + ?Sized> Zeroable for &mut Z {
    fn zero(&mut self) -> Result<(), ZeroError> {
        (**self).zero()
    }
}

impl<Z: Zeroable + ?Sized> Zeroable for Box<Z> {
    fn zero(&mut self) -> Result<(), ZeroError> {
        (**self).zero()
    }
}

/// `None` is an absent element: zeroing it succeeds without doing anything.
impl<Z: Zeroable> Zeroable for Option<Z> {
    fn zero(&mut self) -> Result<(), ZeroError> {
        match self {
            Some(inner) => inner.zero(),
            None => Ok(()),
        }
    }
}

/// Fails with [`ZeroError::NotWritable`] while the value is borrowed elsewhere.
impl<Z: Zeroable + ?Sized> Zeroable for Rc<RefCell<Z>> {
    fn zero(&mut self) -> Result<(), ZeroError> {
        let mut inner = self.try_borrow_mut().map_err(|_| ZeroError::NotWritable)?;
        inner.zero()
    }
}

impl<Z: ZeroizationProbe + ?Sized> ZeroizationProbe for &mut Z {
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

impl<Z: ZeroizationProbe + ?Sized> ZeroizationProbe for Box<Z> {
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

impl<Z: ZeroizationProbe> ZeroizationProbe for Option<Z> {
    fn is_zeroized(&self) -> bool {
        self.as_ref().is_none_or(|inner| inner.is_zeroized())
    }
}

/// A handle that is mutably borrowed elsewhere reports `false`.
impl<Z: ZeroizationProbe + ?Sized> ZeroizationProbe for Rc<RefCell<Z>> {
    fn is_zeroized(&self) -> bool {
        self.try_borrow()
            .map(|inner| inner.is_zeroized())
            .unwrap_or(false)
    }
}
