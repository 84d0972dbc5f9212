//! Implementation of the `a64imm encode` CLI command.

use a64_logical_imm::{OperandSize, encode_bitmask};
use anyhow::{Result, bail};
use clap::Parser;

/// Finds the logical-immediate encoding of a value.
#[derive(Parser)]
pub struct EncodeCommand {
    /// The value, in hex (`0x`), binary (`0b`) or decimal.
    #[arg(value_parser = super::parse_int, allow_hyphen_values = true)]
    value: u64,

    /// The register width of the instruction.
    #[arg(long, default_value = "64", value_name = "32|64", value_parser = super::parse_width)]
    width: OperandSize,
}

impl EncodeCommand {
    /// Executes the command.
    pub fn execute(self) -> Result<()> {
        let value = self.width.truncate(self.value);
        if value != self.value {
            log::warn!(
                "{:#x} truncated to {value:#x} for a {}-bit operation",
                self.value,
                self.width.bits()
            );
        }

        let Some(imm) = encode_bitmask(value, self.width) else {
            bail!(
                "{value:#x} is not encodable as a {}-bit logical immediate",
                self.width.bits()
            );
        };
        println!("fields: {imm} ({:#06x})", imm.enc_bits());
        if imm.move_wide_preferred(self.width) {
            println!("prefer: movz/movn");
        }
        Ok(())
    }
}
