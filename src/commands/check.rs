//! Implementation of the `a64imm check` CLI command.

use crate::vectors::{self, TestVector};
use a64_logical_imm::OperandSize;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Decodes every vector of a test-vector file and compares the result with
/// the expected immediate.
#[derive(Parser)]
pub struct CheckCommand {
    /// The path to a test-vector file.
    ///
    /// If this is `-` or not provided then stdin is used as input.
    file: Option<PathBuf>,

    /// The register width the expected immediates are for.
    #[arg(long, default_value = "64", value_name = "32|64", value_parser = super::parse_width)]
    width: OperandSize,

    /// Only print the vectors that fail.
    #[arg(long, short)]
    quiet: bool,

    /// Whether or not to use color.
    #[arg(long, default_value = "auto")]
    color: ColorChoice,
}

/// How a single vector fared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Decoded to the expected value.
    Pass,
    /// Decoded to a different value.
    Mismatch {
        /// What the encoding actually decodes to.
        actual: u64,
    },
    /// The encoding is undefined.
    Undefined(a64_logical_imm::Undefined),
}

/// Checks one vector for an operation of the given width.
pub fn check_vector(vector: &TestVector, size: OperandSize) -> Outcome {
    match vector.imm.value(size) {
        Ok(actual) if actual == size.truncate(vector.expected) => Outcome::Pass,
        Ok(actual) => Outcome::Mismatch { actual },
        Err(e) => Outcome::Undefined(e),
    }
}

impl CheckCommand {
    /// Executes the command.
    pub fn execute(self) -> Result<()> {
        let mut choice = self.color;
        if choice == ColorChoice::Auto && !std::io::stdout().is_terminal() {
            choice = ColorChoice::Never;
        }
        let mut stdout = StandardStream::stdout(choice);

        let mut color_pass = ColorSpec::new();
        color_pass.set_bold(true).set_fg(Some(Color::Green));
        let mut color_fail = ColorSpec::new();
        color_fail.set_bold(true).set_fg(Some(Color::Red));

        let contents = self.read_vectors()?;
        let vectors = vectors::parse(&contents).with_context(|| match &self.file {
            Some(path) => format!("failed to parse {path:?}"),
            None => "failed to parse stdin".to_string(),
        })?;
        log::debug!("checking {} vectors at width {}", vectors.len(), self.width.bits());

        let mut failed = 0;
        for vector in &vectors {
            let outcome = check_vector(vector, self.width);
            if outcome == Outcome::Pass {
                if self.quiet {
                    continue;
                }
                stdout.set_color(&color_pass)?;
                write!(stdout, "PASS")?;
            } else {
                failed += 1;
                stdout.set_color(&color_fail)?;
                write!(stdout, "FAIL")?;
            }
            stdout.reset()?;

            write!(
                stdout,
                " line {}: {:#x} {}",
                vector.line, vector.expected, vector.imm
            )?;
            match outcome {
                Outcome::Pass => writeln!(stdout)?,
                Outcome::Mismatch { actual } => writeln!(stdout, " decoded {actual:#x}")?,
                Outcome::Undefined(e) => writeln!(stdout, " {e}")?,
            }
        }

        let total = vectors.len();
        writeln!(stdout, "{} passed, {failed} failed", total - failed)?;
        stdout.flush()?;

        if failed > 0 {
            bail!("{failed} of {total} test vectors failed");
        }
        Ok(())
    }

    fn read_vectors(&self) -> Result<String> {
        if let Some(path) = &self.file {
            if path != Path::new("-") {
                return std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {path:?}"));
            }
        }

        let mut stdin = String::new();
        std::io::stdin()
            .read_to_string(&mut stdin)
            .context("failed to read stdin")?;
        Ok(stdin)
    }
}
