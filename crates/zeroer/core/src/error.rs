// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for zeroing.
use alloc::boxed::Box;
use alloc::vec::Vec;

use thiserror::Error;

/// Failure of a single resource to clear itself.
#[derive(Debug, Error)]
pub enum ZeroError {
    /// The underlying storage could not be written (e.g. it is borrowed elsewhere).
    #[error("storage is not writable")]
    NotWritable,

    /// Implementation-specific failure raised by a [`Zeroable`](crate::Zeroable).
    #[error("failed to zero resource: {0}")]
    Custom(Box<dyn core::error::Error + Send + Sync + 'static>),

    /// An aggregate resource failed on one or more of its elements.
    #[error(transparent)]
    Aggregate(#[from] ZeroingError),
}

impl ZeroError {
    /// Wraps an implementation-specific failure.
    pub fn custom<E: core::error::Error + Send + Sync + 'static>(e: E) -> Self {
        Self::Custom(Box::new(e))
    }
}

/// Every failure collected during one best-effort zeroing pass, in the order
/// they occurred. Never empty.
#[derive(Debug, Error)]
#[error("one or more failures occurred during zeroing ({count} collected)", count = .failures.len())]
pub struct ZeroingError {
    failures: Vec<ZeroError>,
}

impl ZeroingError {
    /// Builds the aggregate, or returns `None` when nothing failed.
    pub fn from_failures(failures: Vec<ZeroError>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    /// The collected failures, in occurrence order.
    pub fn failures(&self) -> &[ZeroError] {
        &self.failures
    }

    /// Number of collected failures (always at least one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Iterates over the collected failures.
    pub fn iter(&self) -> core::slice::Iter<'_, ZeroError> {
        self.failures.iter()
    }

    /// Consumes the aggregate, returning the collected failures.
    pub fn into_failures(self) -> Vec<ZeroError> {
        self.failures
    }
}

impl<'a> IntoIterator for &'a ZeroingError {
    type Item = &'a ZeroError;
    type IntoIter = core::slice::Iter<'a, ZeroError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outcome of a failed [`try_zeroing`](crate::try_zeroing) call.
#[derive(Debug, Error)]
pub enum ScopeError<E> {
    /// The block failed. Any teardown failure that followed is kept in
    /// `suppressed` and never replaces the block's own error.
    #[error("{error}")]
    Block {
        /// The block's own failure.
        error: E,
        /// Zeroing failures collected while tearing the scope down.
        suppressed: Option<ZeroingError>,
    },

    /// The block succeeded but zeroing its resources did not.
    #[error(transparent)]
    Zeroing(#[from] ZeroingError),
}

impl<E> ScopeError<E> {
    /// The block's failure, if the block failed.
    pub fn block_error(&self) -> Option<&E> {
        match self {
            Self::Block { error, .. } => Some(error),
            Self::Zeroing(_) => None,
        }
    }

    /// Teardown failures attached to a block failure.
    pub fn suppressed(&self) -> Option<&ZeroingError> {
        match self {
            Self::Block { suppressed, .. } => suppressed.as_ref(),
            Self::Zeroing(_) => None,
        }
    }

    /// Teardown failures, whether primary or suppressed.
    pub fn zeroing_error(&self) -> Option<&ZeroingError> {
        match self {
            Self::Block { suppressed, .. } => suppressed.as_ref(),
            Self::Zeroing(e) => Some(e),
        }
    }

    /// Splits a block failure into its error and suppressed teardown failures.
    ///
    /// Returns `Err` with the teardown failure when the block itself succeeded.
    pub fn into_block_error(self) -> Result<(E, Option<ZeroingError>), ZeroingError> {
        match self {
            Self::Block { error, suppressed } => Ok((error, suppressed)),
            Self::Zeroing(e) => Err(e),
        }
    }
}
