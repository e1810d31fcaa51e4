// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::{MockZeroable, MockZeroableBehaviour};
use crate::{PrimitiveBuffer, Zeroable, ZeroableArray, ZeroizationProbe, wrap, zero};

const SIZE: usize = 1024;

macro_rules! test_zero_primitive {
    ($(($name:ident, $ty:ty, $seed:expr, $zero:expr)),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let mut buffer: [$ty; 5] = [$seed; 5];
                assert!(!buffer.is_zeroized());

                let mut zeroable = ZeroableArray::new(&mut buffer);
                zeroable.zero().expect("Failed to zero()");
                assert!(zeroable.is_zeroized());

                assert_eq!(buffer, [$zero; 5]);
            }
        )*
    };
}

test_zero_primitive!(
    (test_zero_u8, u8, 1, 0),
    (test_zero_u16, u16, u16::MAX, 0),
    (test_zero_u32, u32, 7, 0),
    (test_zero_u64, u64, u64::MAX, 0),
    (test_zero_u128, u128, 1, 0),
    (test_zero_usize, usize, 3, 0),
    (test_zero_i8, i8, -1, 0),
    (test_zero_i16, i16, i16::MIN, 0),
    (test_zero_i32, i32, 1, 0),
    (test_zero_i64, i64, -42, 0),
    (test_zero_i128, i128, i128::MAX, 0),
    (test_zero_isize, isize, -3, 0),
    (test_zero_f32, f32, 1.5, 0.0),
    (test_zero_f64, f64, -2.25, 0.0),
    (test_zero_bool, bool, true, false),
    (test_zero_char, char, 'a', '\0'),
);

#[test]
fn test_byte_buffer_scenario() {
    let mut buffer = [1u8, 1, 1, 1, 1];

    wrap(&mut buffer).zero().expect("Failed to zero()");

    assert_eq!(buffer, [0, 0, 0, 0, 0]);
}

#[test]
fn test_bool_and_char_buffers_scenario() {
    let mut flags = [true; 5];
    let mut chars = ['a'; 5];

    crate::ZeroableBoolArray::new(&mut flags)
        .zero()
        .expect("Failed to zero() bools");
    crate::ZeroableCharArray::new(&mut chars)
        .zero()
        .expect("Failed to zero() chars");

    assert_eq!(flags, [false; 5]);
    assert_eq!(chars, ['\u{0}'; 5]);
}

#[test]
fn test_zero_is_idempotent() {
    let mut buffer = vec![0u64; SIZE];
    let mut zeroable = wrap(&mut buffer);

    zeroable.zero().expect("Failed to zero() (#1)");
    zeroable.zero().expect("Failed to zero() (#2)");

    assert!(zeroable.is_zeroized());
    assert_eq!(buffer.len(), SIZE);
}

#[test]
fn test_wrap_does_not_copy() {
    let buffer = vec![9u8; 16];
    let ptr = buffer.as_ptr();

    let mut zeroable = wrap(buffer);
    assert_eq!(zeroable.inner().as_ptr(), ptr);

    zeroable.zero().expect("Failed to zero()");

    let buffer = zeroable.into_inner();
    assert_eq!(buffer.as_ptr(), ptr);
    assert_eq!(buffer, vec![0u8; 16]);
}

#[test]
fn test_inner_mut_exposes_buffer() {
    let mut zeroable = wrap([0u32; 4]);
    zeroable.inner_mut()[2] = 5;
    assert!(!zeroable.is_zeroized());

    zeroable.zero().expect("Failed to zero()");
    assert_eq!(*zeroable.inner(), [0u32; 4]);
}

#[test]
fn test_zero_keeps_vec_len_and_clears_spare_capacity() {
    let mut buffer = vec![0xAAu8; SIZE];
    buffer.truncate(SIZE / 2);

    zero(&mut buffer);

    assert_eq!(buffer.len(), SIZE / 2);
    assert!(zeroer_util::is_vec_fully_zeroized(&buffer));
}

#[test]
fn test_zero_boxed_slice() {
    let mut buffer: Box<[i16]> = vec![-1i16; 8].into_boxed_slice();

    buffer.zero().expect("Failed to zero()");

    assert!(buffer.elems().iter().all(|x| *x == 0));
}

#[test]
fn test_raw_buffers_are_zeroable() {
    let mut array = [5u8; 8];
    let mut vec = vec![1.0f32; 8];
    let slice: &mut [char] = &mut ['z'; 3];

    array.zero().expect("Failed to zero() array");
    vec.zero().expect("Failed to zero() vec");
    slice.zero().expect("Failed to zero() slice");

    assert!(array.is_zeroized());
    assert!(vec.is_zeroized());
    assert!(slice.is_zeroized());
}

#[test]
fn test_close_zeroes() {
    let mut buffer = [3u8; 4];

    wrap(&mut buffer).close().expect("Failed to close()");

    assert_eq!(buffer, [0u8; 4]);
}

#[test]
fn test_debug_is_redacted() {
    let zeroable = wrap(vec![0x42u8; 4]);
    let debug = format!("{:?}", zeroable);

    assert_eq!(debug, "[REDACTED ZeroableArray]");
}

#[test]
fn test_close_on_mock_calls_zero_once() {
    let mock = MockZeroable::new(MockZeroableBehaviour::None);
    let probe = mock.clone();

    mock.close().expect("Failed to close()");

    assert_eq!(probe.call_count(), 1);
}

#[test]
fn test_reused_buffer_is_zeroed_again() {
    let mut buffer = vec![0u64; 8];
    let mut zeroable = wrap(&mut buffer);

    for round in 1..=3u64 {
        zeroer_util::fill_with_pattern(zeroable.inner_mut(), round * 0x0101);
        assert!(!zeroable.is_zeroized());

        zeroable.zero().expect("Failed to zero()");
        assert!(zeroable.is_zeroized());
    }

    assert_eq!(buffer, vec![0u64; 8]);
}
