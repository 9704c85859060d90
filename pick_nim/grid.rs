//! Finite grids

use std::fmt::Write;

pub mod vec_grid;

/// A rectangular grid
pub trait Grid {
    /// Type of items stored in the grid.
    type Item;

    /// Get item at given position.
    fn get(&self, x: usize, y: usize) -> Self::Item;

    /// Set item at given position.
    fn set(&mut self, x: usize, y: usize, value: Self::Item);
}

/// Trait for finite grids.
pub trait FiniteGrid: Grid + Sized {
    /// Width of the grid.
    fn width(&self) -> usize;

    /// Height of the grid.
    fn height(&self) -> usize;

    /// Create new grid filled with the same tile
    fn filled(width: usize, height: usize, value: Self::Item) -> Self;

    /// Default, one-line display function for grids using `sep` as row separator
    fn display(&self, w: &mut impl Write, sep: char) -> std::fmt::Result
    where
        Self::Item: CharTile,
    {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(w, "{}", self.get(x, y).tile_to_char())?;
            }
            if y + 1 != self.height() {
                write!(w, "{sep}")?;
            }
        }
        Ok(())
    }
}

/// Grid tiles that are representable as a single character, other than `'|'`
pub trait CharTile {
    /// Convert tile to `char`
    fn tile_to_char(self) -> char;
}
