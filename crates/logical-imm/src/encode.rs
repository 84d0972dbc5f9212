//! Encoding values as logical immediates.

use crate::bits::{ones, replicate, rotate_right};
use crate::imms::{LogicalImm, OperandSize};

/// Finds the `N:immr:imms` encoding of `value` for an instruction of the
/// given size, if there is one.
///
/// For [`OperandSize::Size32`] only the low 32 bits of `value` are
/// considered. The result is the canonical encoding (see
/// [`LogicalImm::is_canonical`]), and decoding it in a logical context
/// yields `value` again.
pub fn encode_bitmask(value: u64, size: OperandSize) -> Option<LogicalImm> {
    let value = match size {
        OperandSize::Size32 => replicate(value, 32, 64),
        OperandSize::Size64 => value,
    };

    // All zeros and all ones would need an all-ones element, which is
    // reserved.
    if value == 0 || value == u64::MAX {
        log::trace!("{value:#x} is not a logical immediate");
        return None;
    }

    // Narrow to the smallest element the value is a tiling of.
    let mut esize = 64;
    while esize > 2 {
        let half = esize / 2;
        if value & ones(half) != (value >> half) & ones(half) {
            break;
        }
        esize = half;
    }
    let element = value & ones(esize);

    // The element must be a single, possibly wrapped, run of ones: rotating
    // it right by some amount has to leave `ones(len)`.
    let len = element.count_ones();
    let run = ones(len);
    let rotation = match (0..esize).find(|&k| rotate_right(element, k, esize) == run) {
        Some(k) => k,
        None => {
            log::trace!("{value:#x} has more than one run of ones per {esize}-bit element");
            return None;
        }
    };

    // `len` is at least 1 and less than `esize`, and `esize` is at most 64.
    let s = len - 1;
    let immr = (esize - rotation) % esize;
    let imms = ((!(esize - 1) << 1) & 0x3f) | s;
    Some(LogicalImm {
        n: esize == 64,
        immr: immr as u8,
        imms: imms as u8,
    })
}
