//! Sweeps over every possible encoding.

use crate::{all_encodings, canonical_encodings};
use a64_logical_imm::bits::{highest_set_bit, ones};
use a64_logical_imm::{LogicalImm, OperandSize, Undefined, decode_bitmask, encode_bitmask};
use std::collections::HashMap;

#[test]
fn decode_is_total() {
    let _ = env_logger::try_init();
    let mut defined = 0;
    let mut undefined = 0;
    for logical in [true, false] {
        for (n, imms, immr) in all_encodings() {
            match decode_bitmask(n, imms, immr, logical) {
                Ok(_) => defined += 1,
                Err(Undefined::NoElementSize { .. } | Undefined::ReservedAllOnes { .. }) => {
                    undefined += 1
                }
                Err(e) => panic!("unexpected error for {n} {imms} {immr}: {e}"),
            }
        }
    }
    assert_eq!(defined + undefined, 2 * 64 * 64 * 2);
}

#[test]
fn canonical_encodings_are_unique() {
    let mut seen = HashMap::new();
    for (n, imms, immr) in canonical_encodings() {
        let Ok(value) = decode_bitmask(n, imms, immr, true) else {
            continue;
        };
        if let Some(prev) = seen.insert(value, (n, imms, immr)) {
            panic!("{value:#x} decoded from both {prev:?} and {:?}", (n, imms, immr));
        }
    }
    assert_eq!(seen.len(), 5334);
}

#[test]
fn rotation_above_element_size_is_ignored() {
    let mut defined = 0;
    for (n, imms, immr) in all_encodings() {
        let imm = LogicalImm::new(n == 1, immr, imms).unwrap();
        let Some(esize) = imm.element_size() else {
            continue;
        };
        let masked = immr & (esize - 1) as u8;
        for logical in [true, false] {
            assert_eq!(
                decode_bitmask(n, imms, immr, logical),
                decode_bitmask(n, imms, masked, logical),
                "N={n} imms={imms:#b} immr={immr:#b}"
            );
        }
        if decode_bitmask(n, imms, immr, true).is_ok() {
            defined += 1;
        }
    }
    // 5334 distinct values, most of them reachable from several `immr`s.
    assert_eq!(defined, 7680);
}

#[test]
fn round_trip_64() {
    for (n, imms, immr) in canonical_encodings() {
        let Ok(value) = decode_bitmask(n, imms, immr, true) else {
            continue;
        };
        let imm = encode_bitmask(value, OperandSize::Size64)
            .unwrap_or_else(|| panic!("{value:#x} should re-encode"));
        assert_eq!((u8::from(imm.n), imm.imms, imm.immr), (n, imms, immr), "{value:#x}");
    }
}

#[test]
fn round_trip_32() {
    let mut count = 0;
    for (n, imms, immr) in canonical_encodings() {
        let imm = LogicalImm::new(n == 1, immr, imms).unwrap();
        let Ok(value) = imm.value(OperandSize::Size32) else {
            continue;
        };
        count += 1;
        assert!(value <= u64::from(u32::MAX));
        let back = encode_bitmask(value, OperandSize::Size32)
            .unwrap_or_else(|| panic!("{value:#x} should re-encode"));
        assert!(!back.n);
        assert_eq!(back, imm, "{value:#x}");
    }
    assert_eq!(count, 1302);
}

#[test]
fn all_ones_rejection_ignores_immr() {
    for (n, imms, immr) in all_encodings() {
        let selector = (u64::from(n) << 6) | u64::from(!imms & 0x3f);
        let Some(length) = highest_set_bit(selector) else {
            continue;
        };
        if length < 1 {
            continue;
        }
        let levels = ones(length) as u8;
        if imms & levels == levels {
            assert!(
                matches!(
                    decode_bitmask(n, imms, immr, true),
                    Err(Undefined::ReservedAllOnes { .. })
                ),
                "N={n} imms={imms:#b} immr={immr:#b}"
            );
            assert!(decode_bitmask(n, imms, immr, false).is_ok());
        }
    }
}

#[test]
fn values_are_tiled_runs() {
    for (n, imms, immr) in all_encodings() {
        let Ok(value) = decode_bitmask(n, imms, immr, false) else {
            continue;
        };
        let elements = if n == 1 {
            1
        } else {
            let length = 31 - u32::from(!imms & 0x3f).leading_zeros();
            64 >> length
        };
        assert_eq!(value.count_ones() % elements, 0, "{value:#x}");
        // A tiling of a single (possibly wrapped) run has at most one
        // 0->1 transition per element when read circularly.
        let transitions = (value ^ value.rotate_right(1)).count_ones();
        assert!(transitions == 0 || transitions == 2 * elements, "{value:#x}");
    }
}
