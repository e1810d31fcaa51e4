// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ZeroError;
use crate::support::test_utils::MockZeroFailure;

/// Id of the mock behind a failure, if it is one.
pub(crate) fn mock_failure_id(e: &ZeroError) -> Option<usize> {
    match e {
        ZeroError::Custom(inner) => inner.downcast_ref::<MockZeroFailure>().map(|f| f.id),
        _ => None,
    }
}
