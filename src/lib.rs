//! The a64imm command line interface (CLI) crate.
//!
//! This crate implements the `a64imm` tool: decoding, encoding and checking
//! ARM64 logical immediates against test-vector files.

#![deny(missing_docs)]

pub mod commands;
pub mod vectors;
