//! Grid with arbitrary finite size

use crate::grid::{FiniteGrid, Grid};

/// Grid with arbitrary finite size, stored row by row
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VecGrid<T> {
    width: usize,
    height: usize,
    grid: Vec<T>,
}

impl<T> VecGrid<T> {
    /// Build a grid from rows. Returns `None` if rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut grid = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return None;
            }
            grid.extend(row);
        }
        Some(Self {
            width,
            height,
            grid,
        })
    }

    /// Get row `y` as a slice
    pub fn row(&self, y: usize) -> &[T] {
        &self.grid[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over rows from `y = 0` upwards
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[T]> + ExactSizeIterator {
        // chunks_exact panics on zero chunk size
        self.grid.chunks_exact(self.width.max(1))
    }

    /// All rows below `y` as one flat slice
    pub fn rows_below(&self, y: usize) -> &[T] {
        &self.grid[..y * self.width]
    }

    /// Split the grid into rows below `y` (read-only) and row `y` itself (mutable)
    pub fn split_at_row_mut(&mut self, y: usize) -> (&[T], &mut [T]) {
        let (below, rest) = self.grid.split_at_mut(y * self.width);
        (below, &mut rest[..self.width])
    }

    /// Append `count` rows filled with `value` at the top of the grid
    pub fn push_rows(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.grid
            .resize(self.grid.len() + count * self.width, value);
        self.height += count;
    }
}

impl<T> Grid for VecGrid<T>
where
    T: Clone,
{
    type Item = T;

    fn get(&self, x: usize, y: usize) -> Self::Item {
        self.grid[self.width * y + x].clone()
    }

    fn set(&mut self, x: usize, y: usize, value: Self::Item) {
        self.grid[self.width * y + x] = value;
    }
}

impl<T> FiniteGrid for VecGrid<T>
where
    T: Clone,
{
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            grid: vec![value; width * height],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged() {
        assert!(VecGrid::from_rows(vec![vec![1, 2], vec![3]]).is_none());

        let grid = VecGrid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(1, 2), 6);
        assert_eq!(grid.row(1), &[3, 4]);
    }

    #[test]
    fn split_at_row() {
        let mut grid = VecGrid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let (below, row) = grid.split_at_row_mut(1);
        assert_eq!(below, &[1, 2]);
        row[0] = 30;
        assert_eq!(grid.get(0, 1), 30);
    }

    #[test]
    fn push_rows_on_top() {
        let mut grid = VecGrid::filled(3, 1, 0u8);
        grid.push_rows(2, 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.row(0), &[0, 0, 0]);
        assert_eq!(grid.row(2), &[7, 7, 7]);
        assert_eq!(grid.rows().count(), 3);
    }
}
