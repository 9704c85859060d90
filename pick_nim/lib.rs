//! Win/loss analysis of the adjacent-pick take-away game.
//!
//! Two players alternately remove stones from a single pile. If the previous move removed
//! `x` stones, the next move must remove `x - 1`, `x` or `x + 1` stones. The player who
//! cannot move loses.
//!
//! [`OutcomeTable`](crate::outcome_table::OutcomeTable) classifies every position up to
//! given bounds, [`csv`](crate::outcome_table::csv) persists the table and
//! [`Plot`](crate::plot::Plot) renders it with optional overlay [`curves`](crate::curves).

#![warn(missing_docs)]

pub mod curves;
pub mod drawing;
pub mod game;
pub mod grid;
pub mod numeric;
pub mod outcome_table;
pub mod plot;

mod display;
