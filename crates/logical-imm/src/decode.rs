//! The architectural `DecodeBitMasks` function.

use crate::bits::{highest_set_bit, ones, replicate, rotate_right};

/// An `N:immr:imms` combination that never arises from a valid instruction.
///
/// Callers must not substitute a value for an undefined encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Undefined {
    /// `N:NOT(imms)` selects no element size of at least two bits.
    #[error("undefined bitmask encoding: N={n} imms={imms:#08b} selects no element size")]
    NoElementSize {
        /// The `N` field.
        n: u8,
        /// The `imms` field.
        imms: u8,
    },

    /// All the significant bits of `imms` are set, which would describe an
    /// element of all ones. This is reserved for logical immediates.
    #[error("undefined bitmask encoding: imms={imms:#08b} is all ones for a {esize}-bit element")]
    ReservedAllOnes {
        /// The `imms` field.
        imms: u8,
        /// The element size selected by `N:imms`.
        esize: u32,
    },

    /// `N` is set for a 32-bit operation, which can't hold a 64-bit element.
    #[error("undefined bitmask encoding: N=1 imms={imms:#08b} in a 32-bit operation")]
    WideElement {
        /// The `imms` field.
        imms: u8,
    },
}

/// Both masks produced by `DecodeBitMasks`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitMasks {
    /// The rotated and replicated run of ones. For logical instructions this
    /// is the immediate itself.
    pub wmask: u64,
    /// The unrotated run of `((S - R) mod esize) + 1` ones, replicated. Used
    /// by the bitfield-move instructions.
    pub tmask: u64,
}

/// Decodes a logical immediate into the 64-bit value it describes.
///
/// `n` is the single-bit `N` field, `imms` and `immr` the 6-bit fields; any
/// higher bits are ignored. When `logical` is set the all-ones element
/// encodings are rejected as the logical instructions require; clear it for
/// contexts where they are legal.
///
/// The element is always replicated across all 64 bits, so a 32-bit
/// instruction uses the low half of the result.
pub fn decode_bitmask(n: u8, imms: u8, immr: u8, logical: bool) -> Result<u64, Undefined> {
    decode_bit_masks(n, imms, immr, logical).map(|masks| masks.wmask)
}

/// Decodes both the `wmask` and `tmask` of an `N:immr:imms` encoding.
///
/// See [`decode_bitmask`] for the meaning of the arguments.
pub fn decode_bit_masks(n: u8, imms: u8, immr: u8, logical: bool) -> Result<BitMasks, Undefined> {
    debug_assert!(n <= 1, "N is a single bit: {n}");
    debug_assert!(imms <= 0x3f, "imms is six bits: {imms:#x}");
    debug_assert!(immr <= 0x3f, "immr is six bits: {immr:#x}");
    let n = n & 1;
    let imms = imms & 0x3f;
    let immr = immr & 0x3f;

    // `N:NOT(imms)` is a thermometer code for the element size.
    let selector = (u64::from(n) << 6) | u64::from(!imms & 0x3f);
    let length = match highest_set_bit(selector) {
        Some(length) if length >= 1 => length,
        _ => {
            log::trace!("no element size for N={n} imms={imms:#08b}");
            return Err(Undefined::NoElementSize { n, imms });
        }
    };

    // `length` is at most 6, so this fits the six bit fields.
    let levels = ones(length) as u8;
    let esize = 1u32 << length;
    if logical && imms & levels == levels {
        log::trace!("reserved all-ones element: imms={imms:#08b} esize={esize}");
        return Err(Undefined::ReservedAllOnes { imms, esize });
    }

    let s = imms & levels;
    let r = immr & levels;
    let diff = s.wrapping_sub(r) & levels;

    let welem = ones(u32::from(s) + 1);
    let telem = ones(u32::from(diff) + 1);
    let wmask = replicate(rotate_right(welem, u32::from(r), esize), esize, 64);
    let tmask = replicate(telem, esize, 64);
    Ok(BitMasks { wmask, tmask })
}
