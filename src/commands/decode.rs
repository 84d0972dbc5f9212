//! Implementation of the `a64imm decode` CLI command.

use a64_logical_imm::{LogicalImm, OperandSize};
use anyhow::{Context, Result, bail};
use clap::Parser;

/// Decodes a logical immediate from its `N`, `immr` and `imms` fields or
/// from a whole instruction word.
#[derive(Parser)]
pub struct DecodeCommand {
    /// The `N` field, 0 or 1.
    #[arg(value_parser = clap::value_parser!(u8).range(0..=1), required_unless_present = "insn")]
    n: Option<u8>,

    /// The `immr` field, e.g. `0b000011` or `3`.
    #[arg(value_parser = super::parse_field, required_unless_present = "insn")]
    immr: Option<u8>,

    /// The `imms` field, e.g. `0b011100` or `28`.
    #[arg(value_parser = super::parse_field, required_unless_present = "insn")]
    imms: Option<u8>,

    /// Take the operand size and fields from a logical (immediate)
    /// instruction word instead.
    #[arg(long, value_name = "WORD", value_parser = super::parse_insn, conflicts_with_all = ["n", "immr", "imms", "width"])]
    insn: Option<u32>,

    /// The register width of the instruction.
    #[arg(long, default_value = "64", value_name = "32|64", value_parser = super::parse_width)]
    width: OperandSize,

    /// Decode for a bitfield move, where all-ones elements are allowed, and
    /// also print `tmask`.
    #[arg(long)]
    bitfield: bool,
}

impl DecodeCommand {
    /// Executes the command.
    pub fn execute(self) -> Result<()> {
        let (size, imm) = self.fields()?;
        log::debug!("decoding {imm} for a {}-bit operation", size.bits());

        println!("fields: {imm} ({:#06x})", imm.enc_bits());
        if self.bitfield {
            if size == OperandSize::Size32 && imm.n {
                bail!("N=1 is undefined for a 32-bit bitfield move");
            }
            let masks = imm.bit_masks(false)?;
            println!("wmask:  {:#x}", size.truncate(masks.wmask));
            println!("tmask:  {:#x}", size.truncate(masks.tmask));
            return Ok(());
        }

        let value = imm.value(size)?;
        println!("value:  {value:#x}");
        let form = if imm.move_wide_preferred(size) {
            "movz/movn"
        } else {
            "mov (bitmask immediate)"
        };
        println!("prefer: {form}");
        Ok(())
    }

    fn fields(&self) -> Result<(OperandSize, LogicalImm)> {
        if let Some(insn) = self.insn {
            return Ok(LogicalImm::from_insn(insn));
        }
        let (Some(n), Some(immr), Some(imms)) = (self.n, self.immr, self.imms) else {
            bail!("`N`, `immr` and `imms` are required without `--insn`");
        };
        let imm = LogicalImm::new(n == 1, immr, imms).context("field out of range")?;
        Ok((self.width, imm))
    }
}
