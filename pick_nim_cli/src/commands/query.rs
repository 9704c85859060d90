use crate::{commands::common, io::FileOrStdin};
use anyhow::{Result, bail};
use clap::{self, Parser};
use pick_nim::{
    game::{Outcome, Position},
    outcome_table::OutcomeTable,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Report {
    position: Position,
    outcome: Outcome,
    winning_picks: Vec<u32>,
}

/// Evaluate a single position
#[derive(Parser, Debug)]
pub struct Args {
    /// Number of stones left
    #[arg(long)]
    stones: u32,

    /// Number of stones taken by the previous move
    #[arg(long)]
    previous_pick: u32,

    /// Largest allowed pick. Defaults to the smallest bound known not to restrict any move
    /// reachable from the position. Ignored when reading a table.
    #[arg(long)]
    max_pick: Option<u32>,

    /// CSV table to read instead of classifying
    #[arg(long)]
    data_file: Option<FileOrStdin>,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    if args.previous_pick == 0 {
        bail!("previous_pick must be >= 1");
    }

    let position = Position::new(args.stones, args.previous_pick);
    let table = match &args.data_file {
        Some(input) => {
            eprintln!("Using data from file: {input}");
            common::read_table(input)?
        }
        None => {
            let max_pick = args.max_pick.unwrap_or_else(|| position.pick_bound());
            OutcomeTable::classify(args.stones, max_pick)?
        }
    };

    let Some(outcome) = table.outcome(position) else {
        bail!(
            "Position {} is outside of the table with max_stones = {}, max_pick = {}",
            position,
            table.max_stones(),
            table.max_pick()
        );
    };
    let report = Report {
        position,
        outcome,
        winning_picks: table.winning_picks(position),
    };
    println!("{}", serde_json::ser::to_string(&report)?);

    Ok(())
}
