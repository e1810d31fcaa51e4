// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scoped zeroing: run a block, then zero everything it registered.

use alloc::boxed::Box;

use crate::error::{ScopeError, ZeroingError};
use crate::traits::Zeroable;
use crate::zeroer::Zeroer;

/// Builds the initial resources of a [`zeroing`] / [`try_zeroing`] call.
///
/// Each argument is any [`Zeroable`](crate::Zeroable) value (often
/// `&mut buffer`); the macro boxes them in order.
///
/// ```rust
/// use zeroer_core::{zeroables, zeroing};
///
/// let mut key = [1u8; 32];
/// let mut iv = vec![2u8; 16];
///
/// zeroing(zeroables![&mut key, &mut iv], |_| ()).unwrap();
///
/// assert_eq!(key, [0u8; 32]);
/// assert_eq!(iv, vec![0u8; 16]);
/// ```
#[macro_export]
macro_rules! zeroables {
    ($($resource:expr),* $(,)?) => {
        [$($crate::boxed($resource)),*]
    };
}

/// Runs `block` with a fresh [`Zeroer`] seeded with `initial`, then zeroes
/// every registered resource in registration order.
///
/// Zeroing always happens after `block` has returned. If `block` panics the
/// registry is zeroed while unwinding (see [`Zeroer`]'s `Drop`).
///
/// Returns the block's value, or the collected [`ZeroingError`] if any
/// resource failed to zero.
///
/// # Example
///
/// ```rust
/// use zeroer_core::{shared, zeroables, zeroing};
///
/// let secret_len = zeroing(zeroables![], |z| {
///     let secret = z.zero_at_end(shared(vec![0xFFu8; 24]));
///     let len = secret.borrow().len();
///     len
/// })
/// .unwrap();
///
/// assert_eq!(secret_len, 24);
/// ```
pub fn zeroing<'a, I, T, F>(initial: I, block: F) -> Result<T, ZeroingError>
where
    I: IntoIterator<Item = Box<dyn Zeroable + 'a>>,
    F: FnOnce(&mut Zeroer<'a>) -> T,
{
    let mut zeroer = Zeroer::from_resources(initial);
    let value = block(&mut zeroer);
    zeroer.drain()?;

    Ok(value)
}

/// Like [`zeroing`], for blocks that can fail.
///
/// | block    | zeroing  | result                                                 |
/// |----------|----------|--------------------------------------------------------|
/// | `Ok(v)`  | ok       | `Ok(v)`                                                |
/// | `Ok(_)`  | failed   | `Err(ScopeError::Zeroing(agg))`                        |
/// | `Err(e)` | ok       | `Err(ScopeError::Block { error: e, suppressed: None })` |
/// | `Err(e)` | failed   | `Err(ScopeError::Block { error: e, suppressed: Some(agg) })` |
///
/// The block's failure is always primary; a teardown failure is attached to
/// it, never dropped and never promoted over it.
pub fn try_zeroing<'a, I, T, E, F>(initial: I, block: F) -> Result<T, ScopeError<E>>
where
    I: IntoIterator<Item = Box<dyn Zeroable + 'a>>,
    F: FnOnce(&mut Zeroer<'a>) -> Result<T, E>,
{
    let mut zeroer = Zeroer::from_resources(initial);
    let outcome = block(&mut zeroer);
    let zeroed = zeroer.drain();

    match (outcome, zeroed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(ScopeError::Zeroing(e)),
        (Err(error), Ok(())) => Err(ScopeError::Block {
            error,
            suppressed: None,
        }),
        (Err(error), Err(e)) => {
            log::debug!("block failed; attaching {} zeroing failure(s) as suppressed", e.len());
            Err(ScopeError::Block {
                error,
                suppressed: Some(e),
            })
        }
    }
}
