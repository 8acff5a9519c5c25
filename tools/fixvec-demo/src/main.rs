//! Demonstration driver for the `fixvec` crate.
//!
//! Appends one value to an empty sequence, inserts a block of values at an
//! offset, then walks the result and prints one element per line.

mod cli;

use std::fmt;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use fixvec::FixedVec;
use fixvec::log::{self, LogLevel};

/// Capacity of the demonstration sequence.
const CAPACITY: usize = 10;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if cli.verbose {
        log::set_log_fn(stderr_sink);
    }

    let seq = build(&cli)?;

    let mut out = io::stdout().lock();
    if cli.reverse {
        for value in seq.iter().rev() {
            writeln!(out, "{value}")?;
        }
    } else {
        for value in &seq {
            writeln!(out, "{value}")?;
        }
    }
    Ok(())
}

/// Builds the sequence described by the command line.
fn build(cli: &cli::Cli) -> Result<FixedVec<i32, CAPACITY>> {
    let mut seq = FixedVec::new();
    seq.try_push(cli.push)
        .with_context(|| format!("appending {}", cli.push))?;
    seq.try_insert_slice(cli.at, &cli.values)
        .with_context(|| format!("inserting {} values at index {}", cli.values.len(), cli.at))?;
    Ok(seq)
}

fn stderr_sink(level: LogLevel, args: fmt::Arguments<'_>) {
    eprintln!("[{}] {args}", level.name());
}
