//! ARM64 logical (bitmask) immediates.
//!
//! The AND/ORR/EOR/ANDS immediate instructions, and the `mov` alias of
//! `orr`, don't carry their immediate verbatim. Instead a 13-bit `N:immr:imms`
//! field describes a run of ones inside a power-of-two sized element, a
//! rotation of that element, and implicitly the replication of the element
//! across the register. This crate implements the architectural
//! `DecodeBitMasks` and `MoveWidePreferred` pseudocode functions, the
//! inverse encoding, and the bit primitives they're built from.
//!
//! ```
//! use a64_logical_imm::{OperandSize, decode_bitmask, encode_bitmask};
//!
//! let wmask = decode_bitmask(1, 0b011100, 0, true).unwrap();
//! assert_eq!(wmask, 0x0000_0000_1fff_ffff);
//!
//! let imm = encode_bitmask(wmask, OperandSize::Size64).unwrap();
//! assert_eq!((imm.n, imm.immr, imm.imms), (true, 0, 0b011100));
//! ```

#![deny(missing_docs)]
#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod bits;
mod decode;
mod encode;
mod imms;
mod move_wide;

pub use crate::decode::{BitMasks, Undefined, decode_bit_masks, decode_bitmask};
pub use crate::encode::encode_bitmask;
pub use crate::imms::{LogicalImm, OperandSize};
pub use crate::move_wide::move_wide_preferred;
