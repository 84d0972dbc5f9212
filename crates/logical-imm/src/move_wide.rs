//! The architectural `MoveWidePreferred` function.
//!
//! `orr <Rd>, zr, #imm` disassembles as `mov <Rd>, #imm`, except when the
//! same value can be produced by a single `movz` or `movn`, in which case the
//! move-wide form is the preferred disassembly.

/// Returns whether a logical immediate is better expressed as `movz`/`movn`.
///
/// `sf` selects a 64-bit (1) or 32-bit (0) register, `imm_n`, `imms` and
/// `immr` are the encoding fields. The value is preferred as a move-wide
/// immediate when it is a single run of at most sixteen ones (`movz`) or
/// zeros (`movn`) that doesn't cross a halfword boundary.
pub fn move_wide_preferred(sf: u8, imm_n: u8, imms: u8, immr: u8) -> bool {
    let s = u32::from(imms & 0x3f);
    let r = u32::from(immr & 0x3f);
    let width = if sf & 1 == 1 { 64 } else { 32 };

    // The element size must equal the register size: `1xxxxxx` for 64-bit,
    // `00xxxxx` for 32-bit.
    let full_width = match width {
        64 => imm_n & 1 == 1,
        _ => imm_n & 1 == 0 && s & 0b10_0000 == 0,
    };
    if !full_width {
        return false;
    }

    if s < 16 {
        // At most sixteen ones, which must not straddle a halfword once rotated.
        r.wrapping_neg() % 16 <= 15 - s
    } else if s >= width - 15 {
        // At most sixteen zeros, likewise.
        r % 16 <= s - (width - 15)
    } else {
        false
    }
}
