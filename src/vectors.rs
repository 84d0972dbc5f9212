//! Reading and writing logical-immediate test vectors.
//!
//! A vector file has one vector per line: the expected immediate in hex
//! first, then any number of other tokens of which `N=`, `immr=` and
//! `imms=` give the encoding. For example:
//!
//! ```text
//! 0x000000001fffffff and x0, x0, #0x1fffffff N=1 immr=0b000000 imms=0b011100
//! ```
//!
//! Blank lines and lines starting with `#` or `//` are ignored.

use a64_logical_imm::{LogicalImm, OperandSize};
use anyhow::{Context, Result, bail};

/// A single expected decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    /// 1-based line number in the file the vector was read from.
    pub line: usize,
    /// The immediate the encoding is expected to decode to.
    pub expected: u64,
    /// The encoding.
    pub imm: LogicalImm,
}

/// Parses every vector in `contents`.
pub fn parse(contents: &str) -> Result<Vec<TestVector>> {
    let mut vectors = Vec::new();
    for (index, text) in contents.lines().enumerate() {
        let line = index + 1;
        if let Some(vector) = parse_line(text, line).with_context(|| format!("line {line}"))? {
            vectors.push(vector);
        }
    }
    Ok(vectors)
}

/// Parses one line, returning `None` for blank and comment lines.
pub fn parse_line(text: &str, line: usize) -> Result<Option<TestVector>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') || text.starts_with("//") {
        return Ok(None);
    }

    let mut tokens = text.split_whitespace();
    let first = tokens.next().context("empty line")?;
    let digits = first
        .strip_prefix("0x")
        .or_else(|| first.strip_prefix("0X"))
        .unwrap_or(first);
    let expected = u64::from_str_radix(digits, 16)
        .with_context(|| format!("invalid expected immediate `{first}`"))?;

    let mut n = None;
    let mut immr = None;
    let mut imms = None;
    for token in tokens {
        if let Some(value) = token.strip_prefix("N=") {
            n = Some(parse_binary(value).with_context(|| format!("invalid `{token}`"))?);
        } else if let Some(value) = token.strip_prefix("immr=") {
            immr = Some(parse_binary(value).with_context(|| format!("invalid `{token}`"))?);
        } else if let Some(value) = token.strip_prefix("imms=") {
            imms = Some(parse_binary(value).with_context(|| format!("invalid `{token}`"))?);
        }
    }

    let n = n.context("missing `N=` field")?;
    let immr = immr.context("missing `immr=` field")?;
    let imms = imms.context("missing `imms=` field")?;
    if n > 1 {
        bail!("`N` must be 0 or 1, found {n}");
    }
    let imm = LogicalImm::new(n == 1, immr, imms)
        .with_context(|| format!("field out of range: immr={immr} imms={imms}"))?;

    Ok(Some(TestVector {
        line,
        expected,
        imm,
    }))
}

/// Parses a binary field value, with or without a `0b` prefix.
fn parse_binary(text: &str) -> Result<u8> {
    let digits = text.strip_prefix("0b").unwrap_or(text);
    Ok(u8::from_str_radix(digits, 2)?)
}

/// Renders a vector in the format [`parse`] reads, as the `and` instruction
/// with the immediate.
pub fn format_line(value: u64, imm: &LogicalImm, size: OperandSize) -> String {
    let (reg, digits) = match size {
        OperandSize::Size32 => ('w', 8usize),
        OperandSize::Size64 => ('x', 16),
    };
    format!(
        "{value:#0width$x} and {reg}0, {reg}0, #{value:#x} {imm}",
        width = digits + 2
    )
}
