//! The `a64imm` command line tool.
//!
//! Decodes, encodes and checks ARM64 logical immediates.
//! See `a64imm --help` for usage.

use anyhow::Result;
use clap::Parser;

/// ARM64 logical immediate tools
#[derive(Parser)]
#[command(
    name = "a64imm",
    version = version(),
    after_help = "Usage examples:\n\
                  \n\
                  Decoding the fields of `and x0, x1, #0x1fffffff`:\n\
                  \n  \
                  a64imm decode 1 0b000000 0b011100\n\
                  \n\
                  Checking a file of expected immediates:\n\
                  \n  \
                  a64imm check all_possible_bitmask_imm.txt\n"
)]
struct A64imm {
    #[command(subcommand)]
    subcommand: Subcommand,
}

/// If A64IMM_VERSION_INFO is set, use it, otherwise use CARGO_PKG_VERSION.
fn version() -> &'static str {
    option_env!("A64IMM_VERSION_INFO").unwrap_or(env!("CARGO_PKG_VERSION"))
}

#[derive(Parser)]
enum Subcommand {
    /// Checks a test-vector file of expected immediates
    Check(a64imm::commands::CheckCommand),

    /// Decodes the fields of a logical immediate
    Decode(a64imm::commands::DecodeCommand),

    /// Encodes a value as a logical immediate
    Encode(a64imm::commands::EncodeCommand),

    /// Lists every valid logical immediate as a test-vector file
    Table(a64imm::commands::TableCommand),
}

impl A64imm {
    /// Executes the command.
    pub fn execute(self) -> Result<()> {
        match self.subcommand {
            Subcommand::Check(c) => c.execute(),
            Subcommand::Decode(c) => c.execute(),
            Subcommand::Encode(c) => c.execute(),
            Subcommand::Table(c) => c.execute(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    A64imm::parse().execute()
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    A64imm::command().debug_assert()
}
