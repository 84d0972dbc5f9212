//! Implementation of the `a64imm table` CLI command.

use crate::vectors;
use a64_logical_imm::{LogicalImm, OperandSize};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes every valid logical immediate as a test-vector file.
#[derive(Parser)]
pub struct TableCommand {
    /// The register width to list immediates for.
    #[arg(long, default_value = "64", value_name = "32|64", value_parser = super::parse_width)]
    width: OperandSize,

    /// Where to write the table; stdout if not given.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Every value a logical instruction of the given size can use, with its
/// canonical encoding, sorted by value.
pub fn all_immediates(size: OperandSize) -> Vec<(u64, LogicalImm)> {
    let mut table = Vec::new();
    for enc in 0..(1 << 13) {
        let imm = LogicalImm::from_enc_bits(enc);
        // Non-canonical `immr` values repeat a canonical encoding's value.
        if !imm.is_canonical() {
            continue;
        }
        if let Ok(value) = imm.value(size) {
            table.push((value, imm));
        }
    }
    table.sort_by_key(|(value, _)| *value);
    table
}

impl TableCommand {
    /// Executes the command.
    pub fn execute(self) -> Result<()> {
        let table = all_immediates(self.width);
        log::info!(
            "{} valid {}-bit logical immediates",
            table.len(),
            self.width.bits()
        );

        let mut out: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path).with_context(|| format!("failed to create {path:?}"))?,
            ),
            None => Box::new(std::io::stdout().lock()),
        };
        let mut out = BufWriter::new(&mut out);
        for (value, imm) in &table {
            writeln!(out, "{}", vectors::format_line(*value, imm, self.width))?;
        }
        out.flush()?;
        Ok(())
    }
}
