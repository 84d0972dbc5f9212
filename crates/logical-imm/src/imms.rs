//! Typed encoding fields of a logical immediate.

use crate::bits::{highest_set_bit, ones};
use crate::decode::{BitMasks, Undefined, decode_bit_masks};
use crate::move_wide::move_wide_preferred;
use core::fmt;

/// The register width an instruction operates on, selected by its `sf` bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperandSize {
    /// 32-bit `w` registers.
    Size32,
    /// 64-bit `x` registers.
    Size64,
}

impl OperandSize {
    /// The size selected by an `sf` bit; only the low bit is looked at.
    pub fn from_sf(sf: u8) -> OperandSize {
        if sf & 1 == 1 {
            OperandSize::Size64
        } else {
            OperandSize::Size32
        }
    }

    /// The size for a register width in bits, if it is 32 or 64.
    pub fn from_bits(bits: u32) -> Option<OperandSize> {
        match bits {
            32 => Some(OperandSize::Size32),
            64 => Some(OperandSize::Size64),
            _ => None,
        }
    }

    /// The `sf` bit for this size.
    pub fn sf_bit(&self) -> u8 {
        match self {
            OperandSize::Size32 => 0,
            OperandSize::Size64 => 1,
        }
    }

    /// The width in bits.
    pub fn bits(&self) -> u32 {
        match self {
            OperandSize::Size32 => 32,
            OperandSize::Size64 => 64,
        }
    }

    /// Truncates `value` to this width.
    pub fn truncate(&self, value: u64) -> u64 {
        value & ones(self.bits())
    }
}

/// The `N:immr:imms` fields of a logical immediate.
///
/// This is only the encoding; whether it describes a value depends on the
/// operand size and context, see [`LogicalImm::value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogicalImm {
    /// `N` flag: the element may be 64 bits wide.
    pub n: bool,
    /// `immr` field: rotate amount.
    pub immr: u8,
    /// `imms` field: element size and run length.
    pub imms: u8,
}

impl LogicalImm {
    /// Creates the fields, or `None` if `immr` or `imms` don't fit in six
    /// bits.
    pub fn new(n: bool, immr: u8, imms: u8) -> Option<LogicalImm> {
        if immr > 0x3f || imms > 0x3f {
            return None;
        }
        Some(LogicalImm { n, immr, imms })
    }

    /// Splits the 13-bit `N:immr:imms` field; bits above it are ignored.
    pub fn from_enc_bits(bits: u32) -> LogicalImm {
        LogicalImm {
            n: (bits >> 12) & 1 == 1,
            immr: ((bits >> 6) & 0x3f) as u8,
            imms: (bits & 0x3f) as u8,
        }
    }

    /// Extracts the operand size and fields of a logical (immediate)
    /// instruction word.
    ///
    /// The `sf` bit is bit 31 and the `N:immr:imms` field is bits 22..=10.
    /// The opcode bits are not checked.
    pub fn from_insn(insn: u32) -> (OperandSize, LogicalImm) {
        let size = OperandSize::from_sf((insn >> 31) as u8);
        (size, LogicalImm::from_enc_bits(insn >> 10))
    }

    /// The 13-bit `N:immr:imms` field.
    pub fn enc_bits(&self) -> u32 {
        (u32::from(self.n) << 12) | (u32::from(self.immr) << 6) | u32::from(self.imms)
    }

    /// The element size `N:imms` selects, or `None` if it selects none.
    ///
    /// This doesn't look at whether the element would be all ones.
    pub fn element_size(&self) -> Option<u32> {
        let selector = (u32::from(self.n) << 6) | u32::from(!self.imms & 0x3f);
        match highest_set_bit(u64::from(selector)) {
            Some(length) if length >= 1 => Some(1 << length),
            _ => None,
        }
    }

    /// Whether `immr` only uses the bits the element size gives it.
    ///
    /// Bits of `immr` at or above the element size are ignored by the
    /// decoder, so several encodings can describe one value. Exactly one of
    /// them is canonical, and that's the one [`encode_bitmask`] returns.
    ///
    /// [`encode_bitmask`]: crate::encode_bitmask
    pub fn is_canonical(&self) -> bool {
        match self.element_size() {
            Some(esize) => u32::from(self.immr) < esize,
            None => false,
        }
    }

    /// Runs `DecodeBitMasks` on these fields.
    pub fn bit_masks(&self, logical: bool) -> Result<BitMasks, Undefined> {
        decode_bit_masks(u8::from(self.n), self.imms, self.immr, logical)
    }

    /// The immediate a logical instruction of the given size uses.
    ///
    /// Besides the encodings `DecodeBitMasks` rejects, a 32-bit instruction
    /// with `N` set is undefined.
    pub fn value(&self, size: OperandSize) -> Result<u64, Undefined> {
        if size == OperandSize::Size32 && self.n {
            return Err(Undefined::WideElement { imms: self.imms });
        }
        let masks = self.bit_masks(true)?;
        Ok(size.truncate(masks.wmask))
    }

    /// Whether `movz`/`movn` is the preferred form of an `orr` with this
    /// immediate and the zero register.
    pub fn move_wide_preferred(&self, size: OperandSize) -> bool {
        move_wide_preferred(size.sf_bit(), u8::from(self.n), self.imms, self.immr)
    }
}

impl fmt::Display for LogicalImm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N={} immr={:#08b} imms={:#08b}",
            u8::from(self.n),
            self.immr,
            self.imms
        )
    }
}
