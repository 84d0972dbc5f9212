//! Bit primitives used by the architectural pseudocode.
//!
//! All values are carried in a `u64` regardless of the width being operated
//! on. Widths outside `1..=64` are clamped rather than trusted, so no shift is
//! ever by the full width of the integer.

/// Returns whether bit `bit` (0 is the least significant) of `value` is set.
///
/// Bits at index 64 and above read as clear.
#[inline]
pub const fn is_bit_set(value: u64, bit: u32) -> bool {
    match value.checked_shr(bit) {
        Some(shifted) => shifted & 1 == 1,
        None => false,
    }
}

/// A value with the low `length` bits set, `(1 << length) - 1`.
///
/// `length` must be at most 64; `ones(64)` is `u64::MAX`.
#[inline]
pub const fn ones(length: u32) -> u64 {
    debug_assert!(length <= 64);
    if length >= 64 {
        u64::MAX
    } else {
        (1 << length) - 1
    }
}

/// The index of the most significant set bit of `value`, or `None` if
/// `value` is zero.
#[inline]
pub const fn highest_set_bit(value: u64) -> Option<u32> {
    if value == 0 {
        None
    } else {
        Some(u64::BITS - 1 - value.leading_zeros())
    }
}

/// Rotates the low `width` bits of `value` right by `shift`.
///
/// Bits shifted out of the bottom of the field reappear at bit `width - 1`.
/// Bits of `value` at or above `width` are ignored and the result never has
/// any of them set. `shift` is taken modulo `width`, widths above 64 are
/// treated as 64 and an empty field rotates to 0.
#[inline]
pub const fn rotate_right(value: u64, shift: u32, width: u32) -> u64 {
    if width == 0 {
        return 0;
    }
    if width >= 64 {
        return value.rotate_right(shift);
    }
    let field = value & ones(width);
    let shift = shift % width;
    if shift == 0 {
        return field;
    }
    ((field >> shift) | (field << (width - shift))) & ones(width)
}

/// Repeats the low `esize` bits of `value` until `total_width` bits have been
/// produced.
///
/// `total_width` is expected to be a multiple of `esize`; a trailing partial
/// element is truncated at `total_width` bits. Both widths are clamped to 64
/// and a zero `esize` produces 0.
#[inline]
pub const fn replicate(value: u64, esize: u32, total_width: u32) -> u64 {
    if esize == 0 {
        return 0;
    }
    let esize = if esize > 64 { 64 } else { esize };
    let total_width = if total_width > 64 { 64 } else { total_width };
    let element = value & ones(esize);
    let mut result = 0;
    let mut produced = 0;
    while produced < total_width {
        result |= element << produced;
        produced += esize;
    }
    result & ones(total_width)
}
