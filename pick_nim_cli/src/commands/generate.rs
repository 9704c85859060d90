use crate::io::FileOrStdout;
use anyhow::{Context, Result};
use clap::{self, Parser};
use pick_nim::outcome_table::{OutcomeTable, csv};
use std::io::{BufWriter, Write};

/// Classify all positions up to given bounds and write them as CSV
#[derive(Parser, Debug)]
pub struct Args {
    /// Largest number of stones left
    #[arg(long)]
    max_stones: u32,

    /// Largest previous pick
    #[arg(long)]
    max_pick: u32,

    /// CSV output path
    #[arg(long, default_value = "-")]
    output: FileOrStdout,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    eprintln!("Generating data");
    let table = OutcomeTable::classify(args.max_stones, args.max_pick)?;

    let mut w = BufWriter::new(
        args.output
            .create()
            .context(format!("Could not create file '{}'", args.output))?,
    );
    csv::write_csv(&table, &mut w)
        .and_then(|()| w.flush())
        .context(format!("Could not write to file '{}'", args.output))?;
    eprintln!("Data wrote to: {}", args.output);

    Ok(())
}
