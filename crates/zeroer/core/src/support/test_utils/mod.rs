// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for code that drives [`Zeroable`](crate::Zeroable) resources.

mod mock_zeroable;

pub use mock_zeroable::{MockZeroFailure, MockZeroable, MockZeroableBehaviour, ZeroJournal};
