//! `MoveWidePreferred` against the values the encodings decode to.

use crate::all_encodings;
use a64_logical_imm::{LogicalImm, OperandSize, move_wide_preferred};

/// Whether `value` fits in one halfword of a `size` register, which is what
/// `movz` can produce.
fn single_halfword(value: u64, size: OperandSize) -> bool {
    (0..size.bits()).step_by(16).any(|shift| value & !(0xffff << shift) == 0)
}

fn each_defined(size: OperandSize, mut f: impl FnMut(LogicalImm, u64)) {
    for (n, imms, immr) in all_encodings() {
        let imm = LogicalImm::new(n == 1, immr, imms).unwrap();
        if let Ok(value) = imm.value(size) {
            f(imm, value);
        }
    }
}

#[test]
fn preferred_values_are_move_wide() {
    for size in [OperandSize::Size32, OperandSize::Size64] {
        each_defined(size, |imm, value| {
            if imm.move_wide_preferred(size) {
                let inverted = size.truncate(!value);
                assert!(
                    single_halfword(value, size) || single_halfword(inverted, size),
                    "{imm} ({value:#x}) is not a movz/movn value"
                );
            }
        });
    }
}

#[test]
fn movz_values_are_preferred() {
    for size in [OperandSize::Size32, OperandSize::Size64] {
        let mut preferred = 0;
        each_defined(size, |imm, value| {
            if imm.imms < 16 && (imm.n || size == OperandSize::Size32) {
                assert_eq!(
                    imm.move_wide_preferred(size),
                    single_halfword(value, size),
                    "{imm} ({value:#x})"
                );
                // Count each value once; a 32-bit `immr` of 32 or more
                // repeats the rotation of `immr - 32`.
                if imm.is_canonical() && single_halfword(value, size) {
                    preferred += 1;
                }
            }
        });
        // Runs of 1..=16 ones placed inside one of the halfwords.
        let halfwords = size.bits() / 16;
        let runs: u32 = (1..=16).map(|len| 17 - len).sum();
        assert_eq!(preferred, halfwords * runs);
    }
}

#[test]
fn preference_ignores_unused_rotation_bits() {
    each_defined(OperandSize::Size32, |imm, value| {
        let masked = LogicalImm { immr: imm.immr & 0x1f, ..imm };
        assert_eq!(masked.value(OperandSize::Size32), Ok(value));
        assert_eq!(
            imm.move_wide_preferred(OperandSize::Size32),
            masked.move_wide_preferred(OperandSize::Size32),
            "{imm}"
        );
    });
}

#[test]
fn replicated_elements_are_never_preferred() {
    for (n, imms, immr) in all_encodings() {
        // `N == 0` with a 64-bit register, or an element below 32 bits.
        assert!(!move_wide_preferred(1, 0, imms, immr));
        if imms & 0b10_0000 != 0 {
            assert!(!move_wide_preferred(0, n, imms, immr));
        }
        assert!(!move_wide_preferred(0, 1, imms, immr));
    }
}

#[test]
fn single_bit_is_preferred_at_any_rotation() {
    for immr in 0..64 {
        assert!(move_wide_preferred(1, 1, 0, immr));
    }
}
