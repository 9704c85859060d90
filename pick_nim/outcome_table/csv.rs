//! Plain text form of [`OutcomeTable`].
//!
//! One line per pile size, the largest pile first, with comma separated digits for previous
//! picks `1..=max_pick`. `1` is a winning position, `0` a losing one. There is no header.

use crate::{
    game::Outcome,
    grid::vec_grid::VecGrid,
    outcome_table::OutcomeTable,
};
use itertools::Itertools;
use std::io::{self, Write};
use thiserror::Error;

/// Error raised when text is not a valid persisted table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[allow(missing_docs)]
    #[error("Table is empty")]
    Empty,

    /// Line has a different number of values than the first line
    #[error("Line {line}: expected {expected} values, found {found}")]
    Ragged {
        #[allow(missing_docs)]
        line: usize,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },

    /// Value is not `0` or `1`
    #[error("Line {line}, column {column}: invalid value '{value}'")]
    InvalidValue {
        #[allow(missing_docs)]
        line: usize,
        #[allow(missing_docs)]
        column: usize,
        #[allow(missing_docs)]
        value: String,
    },

    /// Table parsed, but does not match the game rules
    #[error("Table is not a valid classification, first mismatch at {stones_left} stones left")]
    Inconsistent {
        #[allow(missing_docs)]
        stones_left: u32,
    },
}

/// Write table in the persisted form.
///
/// # Errors
///
/// Errors of the underlying writer.
pub fn write_csv<W>(table: &OutcomeTable, w: &mut W) -> io::Result<()>
where
    W: Write,
{
    for row in table.rows().rev() {
        writeln!(w, "{}", row.iter().map(|outcome| outcome.digit()).join(","))?;
    }
    Ok(())
}

/// Render table in the persisted form
pub fn to_csv_string(table: &OutcomeTable) -> String {
    let mut buf = Vec::new();
    // Writing to Vec cannot fail
    let _ = write_csv(table, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Parse table from the persisted form. Both `\n` and `\r\n` line endings are accepted.
///
/// # Errors
///
/// See [`ParseError`]. [`ParseError::Inconsistent`] is never returned, use
/// [`parse_verified_csv`] for that.
pub fn parse_csv(input: &str) -> Result<OutcomeTable, ParseError> {
    let input = input.trim_end_matches(['\n', '\r']);
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut rows = Vec::new();
    let mut expected = None;
    for (line_idx, line) in input.lines().enumerate() {
        let line_no = line_idx + 1;
        let row = line
            .split(',')
            .enumerate()
            .map(|(column_idx, value)| {
                let value = value.trim();
                value
                    .parse::<u8>()
                    .ok()
                    .and_then(Outcome::from_digit)
                    .ok_or_else(|| ParseError::InvalidValue {
                        line: line_no,
                        column: column_idx + 1,
                        value: value.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected = *expected.get_or_insert(row.len());
        if row.len() != expected {
            return Err(ParseError::Ragged {
                line: line_no,
                expected,
                found: row.len(),
            });
        }
        rows.push(row);
    }

    // Largest pile comes first in the file
    rows.reverse();
    VecGrid::from_rows(rows)
        .and_then(OutcomeTable::from_cells)
        .ok_or(ParseError::Empty)
}

/// Parse table and check that it agrees with the game rules.
///
/// # Errors
///
/// See [`ParseError`]
pub fn parse_verified_csv(input: &str) -> Result<OutcomeTable, ParseError> {
    let table = parse_csv(input)?;
    match table.first_inconsistent_row() {
        None => Ok(table),
        Some(stones_left) => Err(ParseError::Inconsistent { stones_left }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, QuickCheck};

    #[test]
    fn persisted_form() {
        let table = OutcomeTable::classify(3, 3).unwrap();
        assert_eq!(to_csv_string(&table), "0,1,1\n1,1,1\n1,1,0\n0,0,0\n");
    }

    #[test]
    fn single_row() {
        let table = OutcomeTable::classify(0, 5).unwrap();
        assert_eq!(to_csv_string(&table), "0,0,0,0,0\n");
    }

    #[test]
    fn round_trip() {
        let mut qc = QuickCheck::new();
        let test = |max_stones: u8, max_pick: u8| {
            let table = OutcomeTable::classify(max_stones as u32, max_pick as u32 % 40 + 1).unwrap();
            let csv = to_csv_string(&table);
            assert_eq!(parse_verified_csv(&csv), Ok(table.clone()));
            assert_eq!(parse_csv(&csv.replace('\n', "\r\n")), Ok(table));
        };
        qc.quickcheck(test as fn(u8, u8));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_csv(""), Err(ParseError::Empty));
        assert_eq!(parse_csv("\n\n"), Err(ParseError::Empty));
        assert_eq!(
            parse_csv("0,1\n0,0,0\n"),
            Err(ParseError::Ragged {
                line: 2,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            parse_csv("0,1\n0,2\n"),
            Err(ParseError::InvalidValue {
                line: 2,
                column: 2,
                value: "2".to_string()
            })
        );
        assert_eq!(
            parse_csv("0,x"),
            Err(ParseError::InvalidValue {
                line: 1,
                column: 2,
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn inconsistent_table() {
        // Row for y = 1 claims (1, 1) is losing
        assert_eq!(
            parse_verified_csv("0,1\n0,0\n"),
            Err(ParseError::Inconsistent { stones_left: 1 })
        );
        // Unverified parsing accepts it
        assert!(parse_csv("0,1\n0,0\n").is_ok());
    }

    #[test]
    fn flipped_cell_is_detected() {
        #[derive(Debug, Clone, Copy)]
        struct Flip(u32, u32);

        impl Arbitrary for Flip {
            fn arbitrary(g: &mut Gen) -> Flip {
                Flip(u32::arbitrary(g) % 50, u32::arbitrary(g) % 10)
            }
        }

        let mut qc = QuickCheck::new();
        let test = |flip: Flip| {
            let csv = to_csv_string(&OutcomeTable::classify(49, 10).unwrap());
            let mut lines = csv.lines().map(str::to_string).collect::<Vec<_>>();
            // First line holds y = 49
            let line = &mut lines[49 - flip.0 as usize];
            let column = flip.1 as usize * 2;
            let flipped = if &line[column..=column] == "0" { "1" } else { "0" };
            line.replace_range(column..=column, flipped);
            assert_eq!(
                parse_verified_csv(&lines.join("\n")),
                Err(ParseError::Inconsistent {
                    stones_left: flip.0
                })
            );
        };
        qc.quickcheck(test as fn(Flip));
    }
}
