//! Command-line interface definitions for fixvec-demo.

use clap::Parser;

/// Builds a fixed-capacity sequence, inserts a block into it and prints it.
#[derive(Parser)]
#[command(name = "fixvec-demo", version, about)]
pub struct Cli {
    /// Value appended to the empty sequence first.
    #[arg(long, default_value_t = 5)]
    pub push: i32,

    /// Index at which the block of values is inserted.
    #[arg(long, default_value_t = 1)]
    pub at: usize,

    /// Comma-separated block of values to insert.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "2,3,5,4,4,2,5"
    )]
    pub values: Vec<i32>,

    /// Print the sequence back-to-front.
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Report container diagnostics on stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
