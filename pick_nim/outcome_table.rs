//! Win/loss classification of every position in a bounded range.
//!
//! A position `(y, x)` has `y` stones left and was reached by taking `x` stones. It is
//! [`Winning`](Outcome::Winning) iff one of the picks `x - 1`, `x`, `x + 1` that is at least
//! one, at most `max_pick` and at most `y` leads to a [`Losing`](Outcome::Losing) position.
//!
//! Every move strictly decreases the pile, so rows are filled from `y = 0` upwards and each
//! row depends only on the rows below it. Cells within a row are independent of each other,
//! with the `rayon` feature they are computed in parallel.

use crate::{
    display,
    game::{Outcome, Position},
    grid::{FiniteGrid, Grid, vec_grid::VecGrid},
};
use std::fmt::Display;
use thiserror::Error;

#[cfg(feature = "rayon")]
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

pub mod csv;

/// Error raised when table bounds cannot describe any table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Bound is out of the allowed range
    #[error("Invalid dimension: {parameter} = {value}, {reason}")]
    InvalidDimension {
        /// Name of the offending bound
        parameter: &'static str,
        /// Value of the offending bound
        value: u64,
        /// What is wrong with the value
        reason: &'static str,
    },
}

/// Outcomes of all positions with at most `max_stones` stones left and previous pick in
/// `1..=max_pick`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeTable {
    max_pick: u32,

    /// Row `y` holds positions with `y` stones left, column `x - 1` previous pick of `x`
    cells: VecGrid<Outcome>,
}

impl Display for OutcomeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OutcomeTable")?;
        display::parens(f, |f| {
            write!(
                f,
                "max_stones={}, max_pick={}",
                self.max_stones(),
                self.max_pick()
            )
        })?;
        write!(f, " = ")?;
        display::brackets(f, |f| self.cells.display(f, '|'))
    }
}

impl OutcomeTable {
    /// Classify every position `(y, x)` with `0 <= y <= max_stones` and `1 <= x <= max_pick`.
    ///
    /// # Errors
    ///
    /// [`ClassifyError::InvalidDimension`] if `max_pick` is zero or the table would not fit in
    /// memory addressing.
    pub fn classify(max_stones: u32, max_pick: u32) -> Result<OutcomeTable, ClassifyError> {
        if max_pick == 0 {
            return Err(ClassifyError::InvalidDimension {
                parameter: "max_pick",
                value: 0,
                reason: "must be at least 1",
            });
        }

        let mut table = OutcomeTable {
            max_pick,
            cells: VecGrid::filled(max_pick as usize, 0, Outcome::Losing),
        };
        table.grow_rows(row_count(max_stones)?)?;
        Ok(table)
    }

    /// Extend the table to `max_stones` by classifying only the missing rows. Existing rows
    /// are never touched since no move goes to a larger pile.
    ///
    /// # Errors
    ///
    /// See [`OutcomeTable::classify`]
    pub fn extend_stones(&mut self, max_stones: u32) -> Result<(), ClassifyError> {
        let rows = row_count(max_stones)?.saturating_sub(self.cells.height());
        self.grow_rows(rows)
    }

    fn grow_rows(&mut self, rows: usize) -> Result<(), ClassifyError> {
        let width = self.cells.width();
        let first_new = self.cells.height();
        let height = first_new
            .checked_add(rows)
            .filter(|height| {
                height.checked_mul(width).is_some()
                    && height.checked_sub(1).is_some_and(|top| u32::try_from(top).is_ok())
            })
            .ok_or(ClassifyError::InvalidDimension {
                parameter: "max_stones",
                value: (first_new as u64).saturating_add(rows as u64).saturating_sub(1),
                reason: "table is too large",
            })?;

        self.cells.push_rows(rows, Outcome::Losing);
        for y in first_new..height {
            let (below, row) = self.cells.split_at_row_mut(y);
            classify_row(below, row, y as u32, self.max_pick);
        }
        Ok(())
    }

    /// Largest pile size in the table
    pub fn max_stones(&self) -> u32 {
        // Tables always have at least one row
        (self.cells.height() - 1) as u32
    }

    /// Largest previous pick in the table
    pub const fn max_pick(&self) -> u32 {
        self.max_pick
    }

    /// Outcome of the position, `None` if it lies outside of the table
    pub fn outcome(&self, position: Position) -> Option<Outcome> {
        self.contains(position).then(|| {
            self.cells.get(
                position.previous_pick as usize - 1,
                position.stones_left as usize,
            )
        })
    }

    /// Check if the position lies inside of the table
    pub fn contains(&self, position: Position) -> bool {
        position.stones_left <= self.max_stones()
            && position.previous_pick >= 1
            && position.previous_pick <= self.max_pick
    }

    /// Check if the table holds every position with at most `max_stones` stones and previous
    /// pick at most `max_pick`
    pub fn covers(&self, max_stones: u32, max_pick: u32) -> bool {
        max_stones <= self.max_stones() && max_pick <= self.max_pick
    }

    /// Picks from `position` that leave the opponent in a losing position. Empty if the
    /// position is losing or lies outside of the table.
    pub fn winning_picks(&self, position: Position) -> Vec<u32> {
        if !self.contains(position) {
            return Vec::new();
        }
        position
            .moves(self.max_pick)
            .filter(|next| self.outcome(*next) == Some(Outcome::Losing))
            .map(|next| next.previous_pick)
            .collect()
    }

    /// Previous picks `x` for which `(stones_left, x)` is losing
    pub fn losing_picks(&self, stones_left: u32) -> Vec<u32> {
        if stones_left > self.max_stones() {
            return Vec::new();
        }
        self.cells
            .row(stones_left as usize)
            .iter()
            .zip(1..)
            .filter(|(outcome, _)| **outcome == Outcome::Losing)
            .map(|(_, x)| x)
            .collect()
    }

    /// Rows of the table from `y = 0` upwards, each indexed by `x - 1`
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Outcome]> + ExactSizeIterator {
        self.cells.rows()
    }

    /// Check that every cell agrees with the outcome recomputed from the rows below it
    pub fn is_consistent(&self) -> bool {
        self.first_inconsistent_row().is_none()
    }

    /// Smallest pile size whose row disagrees with the rows below it
    pub fn first_inconsistent_row(&self) -> Option<u32> {
        (0..self.cells.height()).find_map(|y| {
            let below = self.cells.rows_below(y);
            let consistent = self.cells.row(y).iter().zip(1..).all(|(outcome, x)| {
                *outcome == classify_cell(below, Position::new(y as u32, x), self.max_pick)
            });
            (!consistent).then_some(y as u32)
        })
    }

    /// Build a table from already classified rows, `y = 0` first
    pub(crate) fn from_cells(cells: VecGrid<Outcome>) -> Option<OutcomeTable> {
        if cells.width() == 0 || cells.height() == 0 {
            return None;
        }
        Some(OutcomeTable {
            max_pick: u32::try_from(cells.width()).ok()?,
            cells,
        })
    }
}

/// Number of rows needed for piles `0..=max_stones`
fn row_count(max_stones: u32) -> Result<usize, ClassifyError> {
    usize::try_from(max_stones)
        .ok()
        .and_then(|max_stones| max_stones.checked_add(1))
        .ok_or(ClassifyError::InvalidDimension {
            parameter: "max_stones",
            value: u64::from(max_stones),
            reason: "table is too large",
        })
}

fn classify_row(below: &[Outcome], row: &mut [Outcome], stones_left: u32, max_pick: u32) {
    #[cfg(feature = "rayon")]
    let cells = row.par_iter_mut().enumerate();
    #[cfg(not(feature = "rayon"))]
    let cells = row.iter_mut().enumerate();

    cells.for_each(|(idx, cell)| {
        *cell = classify_cell(below, Position::new(stones_left, idx as u32 + 1), max_pick);
    });
}

/// Outcome of `position` given all outcomes with fewer stones left, laid out row by row
fn classify_cell(below: &[Outcome], position: Position, max_pick: u32) -> Outcome {
    let width = max_pick as usize;
    Outcome::from_bool(position.moves(max_pick).any(|next| {
        let idx = next.stones_left as usize * width + (next.previous_pick as usize - 1);
        below[idx] == Outcome::Losing
    }))
}
