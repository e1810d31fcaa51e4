// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use thiserror::Error;

use crate::error::ZeroError;
use crate::traits::{Zeroable, ZeroizationProbe};

/// Shared record of mock ids, in the order their `zero()` was called.
pub type ZeroJournal = Rc<RefCell<Vec<usize>>>;

/// Configurable behavior for [`MockZeroable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockZeroableBehaviour {
    /// Always succeed.
    None,
    /// Always fail.
    FailAlways,
    /// Fail on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthZero(usize),
}

/// Failure raised by a [`MockZeroable`]; carries the mock's id.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("mock zeroable #{id} failed")]
pub struct MockZeroFailure {
    /// Id of the failing mock.
    pub id: usize,
}

/// Mock resource for testing.
///
/// Clones share their call counter, so a test can register one clone and
/// inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MockZeroable {
    id: usize,
    behaviour: MockZeroableBehaviour,
    zero_count: Rc<Cell<usize>>,
    journal: Option<ZeroJournal>,
}

impl MockZeroable {
    /// Creates a mock with id `0` and the given behavior.
    pub fn new(behaviour: MockZeroableBehaviour) -> Self {
        Self::with_id(0, behaviour)
    }

    /// Creates a mock with an explicit id.
    pub fn with_id(id: usize, behaviour: MockZeroableBehaviour) -> Self {
        Self {
            id,
            behaviour,
            zero_count: Rc::new(Cell::new(0)),
            journal: None,
        }
    }

    /// Creates a mock that appends its id to `journal` on every `zero()` call.
    pub fn journaled(id: usize, behaviour: MockZeroableBehaviour, journal: &ZeroJournal) -> Self {
        Self {
            journal: Some(Rc::clone(journal)),
            ..Self::with_id(id, behaviour)
        }
    }

    /// The mock's id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockZeroableBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&self) {
        self.zero_count.set(0);
    }

    /// Number of `zero()` calls so far, across all clones.
    pub fn call_count(&self) -> usize {
        self.zero_count.get()
    }
}

impl Zeroable for MockZeroable {
    fn zero(&mut self) -> Result<(), ZeroError> {
        let current = self.zero_count.get();
        self.zero_count.set(current + 1);

        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(self.id);
        }

        let fail = match self.behaviour {
            MockZeroableBehaviour::None => false,
            MockZeroableBehaviour::FailAlways => true,
            MockZeroableBehaviour::FailAtNthZero(n) => current + 1 == n,
        };

        if fail {
            Err(ZeroError::custom(MockZeroFailure { id: self.id }))
        } else {
            Ok(())
        }
    }
}

/// A mock counts as zeroed once `zero()` has been called at least once.
impl ZeroizationProbe for MockZeroable {
    fn is_zeroized(&self) -> bool {
        self.zero_count.get() > 0
    }
}
