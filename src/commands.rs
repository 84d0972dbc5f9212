//! The module for the a64imm CLI commands.

mod check;
mod decode;
mod encode;
mod table;

pub use self::{check::*, decode::*, encode::*, table::*};

use a64_logical_imm::OperandSize;

/// Parses `--width`, which is either 32 or 64.
fn parse_width(s: &str) -> Result<OperandSize, String> {
    let bits = s
        .parse::<u32>()
        .map_err(|e| format!("invalid width `{s}`: {e}"))?;
    OperandSize::from_bits(bits).ok_or_else(|| format!("width must be 32 or 64, not {bits}"))
}

/// Parses an integer written in hex (`0x`), binary (`0b`) or decimal.
fn parse_int(s: &str) -> Result<u64, String> {
    let digits = s.replace('_', "");
    let parsed = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = digits.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else if let Some(neg) = digits.strip_prefix('-') {
        neg.parse::<i64>().map(|v| v.wrapping_neg() as u64)
    } else {
        digits.parse::<u64>()
    };
    parsed.map_err(|e| format!("invalid integer `{s}`: {e}"))
}

/// Parses a six-bit encoding field.
fn parse_field(s: &str) -> Result<u8, String> {
    let value = parse_int(s)?;
    match u8::try_from(value) {
        Ok(field) if field <= 0x3f => Ok(field),
        _ => Err(format!("`{s}` does not fit in six bits")),
    }
}

/// Parses a 32-bit instruction word.
fn parse_insn(s: &str) -> Result<u32, String> {
    let value = parse_int(s)?;
    u32::try_from(value).map_err(|_| format!("`{s}` is wider than an instruction"))
}
