use crate::io::FileOrStdin;
use anyhow::{Context, Result, bail};
use pick_nim::outcome_table::{OutcomeTable, csv};
use std::io::Read;

/// Read and verify a persisted table
pub fn read_table(input: &FileOrStdin) -> Result<OutcomeTable> {
    let mut text = String::new();
    input
        .open()
        .context(format!("Could not open file '{}'", input))?
        .read_to_string(&mut text)
        .context(format!("Could not read file '{}'", input))?;
    let table =
        csv::parse_verified_csv(&text).context(format!("Could not parse file '{}'", input))?;
    Ok(table)
}

/// Use the persisted table if given, otherwise classify with given bounds
pub fn load_or_classify(
    data_file: Option<&FileOrStdin>,
    max_stones: u32,
    max_pick: u32,
) -> Result<OutcomeTable> {
    match data_file {
        Some(input) => {
            eprintln!("Using data from file: {input}");
            let table = read_table(input)?;
            if !table.covers(max_stones, max_pick) {
                bail!(
                    "Table in '{}' has max_stones = {}, max_pick = {}, but max_stones = {}, max_pick = {} are required",
                    input,
                    table.max_stones(),
                    table.max_pick(),
                    max_stones,
                    max_pick
                );
            }
            Ok(table)
        }
        None => Ok(OutcomeTable::classify(max_stones, max_pick)?),
    }
}
