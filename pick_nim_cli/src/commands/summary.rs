use crate::{commands::common, io::FileOrStdin};
use anyhow::Result;
use clap::{self, Parser};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Report {
    stones_left: u32,
    losing: usize,
    losing_picks: Vec<u32>,
}

/// Report losing positions of every pile size, one JSON line per pile size
#[derive(Parser, Debug)]
pub struct Args {
    /// Largest number of stones left
    #[arg(long)]
    max_stones: u32,

    /// Largest previous pick
    #[arg(long)]
    max_pick: u32,

    /// CSV table to read instead of classifying
    #[arg(long)]
    data_file: Option<FileOrStdin>,
}

#[allow(clippy::needless_pass_by_value)]
pub fn run(args: Args) -> Result<()> {
    let table = common::load_or_classify(args.data_file.as_ref(), args.max_stones, args.max_pick)?;

    for stones_left in 0..=args.max_stones {
        let losing_picks = table
            .losing_picks(stones_left)
            .into_iter()
            .filter(|x| *x <= args.max_pick)
            .collect::<Vec<_>>();
        let report = Report {
            stones_left,
            losing: losing_picks.len(),
            losing_picks,
        };
        println!("{}", serde_json::ser::to_string(&report)?);
    }

    Ok(())
}
