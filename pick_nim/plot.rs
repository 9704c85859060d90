//! Image of a rectangular part of an [`OutcomeTable`].
//!
//! Previous pick grows to the right, pile size grows upwards. Losing positions are black,
//! winning positions are white. Cells are stretched over the whole canvas.

use crate::{
    curves::{self, Family, Segment},
    drawing::{BoundingBox, Canvas, Color, Draw},
    game::{Outcome, Position},
    grid::{FiniteGrid, Grid, vec_grid::VecGrid},
    numeric::v2f::V2f,
    outcome_table::OutcomeTable,
};
use thiserror::Error;

/// Width of the frame around the image, in points
const FRAME_WEIGHT: f32 = 3.0;

/// Error raised when the requested rectangle is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegionError {
    #[allow(missing_docs)]
    #[error("x_min must be >= 1, got {0}")]
    XMinBelowOne(i64),

    #[allow(missing_docs)]
    #[error("y_min must be >= 0, got {0}")]
    YMinNegative(i64),

    #[allow(missing_docs)]
    #[error("x_min must be less than x_max, got x_min = {x_min}, x_max = {x_max}")]
    EmptyXRange { x_min: i64, x_max: i64 },

    #[allow(missing_docs)]
    #[error("y_min must be less than y_max, got y_min = {y_min}, y_max = {y_max}")]
    EmptyYRange { y_min: i64, y_max: i64 },

    #[allow(missing_docs)]
    #[error("{parameter} is too large, got {value}")]
    TooLarge { parameter: &'static str, value: i64 },
}

/// Error raised when a table cannot be plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlotError {
    /// Table lacks some positions of the region
    #[error(
        "Table with max_stones = {max_stones}, max_pick = {max_pick} does not cover y_max = {y_max}, x_max = {x_max}"
    )]
    TableTooSmall {
        #[allow(missing_docs)]
        max_stones: u32,
        #[allow(missing_docs)]
        max_pick: u32,
        #[allow(missing_docs)]
        y_max: u32,
        #[allow(missing_docs)]
        x_max: u32,
    },
}

/// Inclusive rectangle of previous picks `x_min..=x_max` and pile sizes `y_min..=y_max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotRegion {
    x_min: u32,
    x_max: u32,
    y_min: u32,
    y_max: u32,
}

impl PlotRegion {
    /// Validate the rectangle.
    ///
    /// # Errors
    ///
    /// When `x_min < 1`, `y_min < 0`, `x_min >= x_max`, `y_min >= y_max` or a bound does not fit
    /// in `u32`, checked in that order.
    pub fn new(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Result<PlotRegion, RegionError> {
        if x_min < 1 {
            return Err(RegionError::XMinBelowOne(x_min));
        }
        if y_min < 0 {
            return Err(RegionError::YMinNegative(y_min));
        }
        if x_min >= x_max {
            return Err(RegionError::EmptyXRange { x_min, x_max });
        }
        if y_min >= y_max {
            return Err(RegionError::EmptyYRange { y_min, y_max });
        }

        let bound = |parameter, value: i64| {
            u32::try_from(value).map_err(|_| RegionError::TooLarge { parameter, value })
        };
        Ok(PlotRegion {
            x_min: bound("x_min", x_min)?,
            x_max: bound("x_max", x_max)?,
            y_min: bound("y_min", y_min)?,
            y_max: bound("y_max", y_max)?,
        })
    }

    #[allow(missing_docs)]
    pub const fn x_min(&self) -> u32 {
        self.x_min
    }

    #[allow(missing_docs)]
    pub const fn x_max(&self) -> u32 {
        self.x_max
    }

    #[allow(missing_docs)]
    pub const fn y_min(&self) -> u32 {
        self.y_min
    }

    #[allow(missing_docs)]
    pub const fn y_max(&self) -> u32 {
        self.y_max
    }

    /// Number of previous picks in the region
    pub const fn columns(&self) -> usize {
        (self.x_max - self.x_min) as usize + 1
    }

    /// Number of pile sizes in the region
    pub const fn rows(&self) -> usize {
        (self.y_max - self.y_min) as usize + 1
    }
}

/// Outcome table image with optional curves on top
#[derive(Debug, Clone)]
pub struct Plot<'table> {
    table: &'table OutcomeTable,
    region: PlotRegion,
    size: V2f,
    dpi: f32,
    i_curves: bool,
    upper_lower_curves: bool,
}

impl<'table> Plot<'table> {
    /// Plot `region` of the table on a canvas of `size` pixels.
    ///
    /// # Errors
    ///
    /// [`PlotError::TableTooSmall`] if the table does not contain the whole region.
    pub fn new(
        table: &'table OutcomeTable,
        region: PlotRegion,
        size: V2f,
    ) -> Result<Plot<'table>, PlotError> {
        if !table.covers(region.y_max(), region.x_max()) {
            return Err(PlotError::TableTooSmall {
                max_stones: table.max_stones(),
                max_pick: table.max_pick(),
                y_max: region.y_max(),
                x_max: region.x_max(),
            });
        }
        Ok(Plot {
            table,
            region,
            size,
            dpi: 72.0,
            i_curves: false,
            upper_lower_curves: false,
        })
    }

    /// Resolution used to convert line widths from points to pixels
    #[must_use]
    pub const fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Draw the `2i`, `3i` and `4i` curves
    #[must_use]
    pub const fn with_i_curves(mut self, enabled: bool) -> Self {
        self.i_curves = enabled;
        self
    }

    /// Draw the lower and upper curve families
    #[must_use]
    pub const fn with_upper_lower_curves(mut self, enabled: bool) -> Self {
        self.upper_lower_curves = enabled;
        self
    }

    /// Cell colors with the row of `y_max` first
    pub fn cells(&self) -> VecGrid<Color> {
        let columns = self.region.columns();
        let rows = self.region.rows();
        let mut cells = VecGrid::filled(columns, rows, Color::BLACK);
        for row in 0..rows {
            let y = self.region.y_max() - row as u32;
            for column in 0..columns {
                let x = self.region.x_min() + column as u32;
                if self.table.outcome(Position::new(y, x)) == Some(Outcome::Winning) {
                    cells.set(column, row, Color::WHITE);
                }
            }
        }
        cells
    }

    /// Curve segments enabled for this plot
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        if self.i_curves {
            segments.extend(curves::i_curves(&self.region));
        }
        if self.upper_lower_curves {
            segments.extend(curves::family_segments(Family::Upper, &self.region));
            segments.extend(curves::family_segments(Family::Lower, &self.region));
        }
        segments
    }

    /// Pixel position of a point given in table coordinates, cell centers at integer points
    pub fn to_canvas(&self, x: f64, y: f64) -> V2f {
        let cell_width = self.size.x / self.region.columns() as f32;
        let cell_height = self.size.y / self.region.rows() as f32;
        let column = (x - f64::from(self.region.x_min())) as f32 + 0.5;
        let row = (y - f64::from(self.region.y_min())) as f32 + 0.5;
        V2f {
            x: column * cell_width,
            y: row.mul_add(-cell_height, self.size.y),
        }
    }

    const fn points_to_pixels(&self, points: f32) -> f32 {
        points * self.dpi / 72.0
    }
}

impl Draw for Plot<'_> {
    fn draw<C>(&self, canvas: &mut C)
    where
        C: Canvas,
    {
        canvas.raster(V2f::ZERO, self.size, &self.cells());

        for segment in self.segments() {
            let points = segment
                .samples()
                .map(|(x, y)| self.to_canvas(x, y))
                .collect::<Vec<_>>();
            canvas.polyline(
                &points,
                self.points_to_pixels(segment.curve.weight()),
                segment.curve.color(),
            );
        }

        canvas.frame(
            V2f::ZERO,
            self.size,
            self.points_to_pixels(FRAME_WEIGHT),
            Color::GRAY,
        );
    }

    fn required_canvas(&self) -> BoundingBox {
        BoundingBox {
            top_left: V2f::ZERO,
            bottom_right: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{drawing::svg, grid::FiniteGrid};

    #[test]
    fn region_validation() {
        assert_eq!(
            PlotRegion::new(0, 10, 0, 10),
            Err(RegionError::XMinBelowOne(0))
        );
        assert_eq!(
            PlotRegion::new(1, 10, -1, 10),
            Err(RegionError::YMinNegative(-1))
        );
        assert_eq!(
            PlotRegion::new(5, 5, 0, 10),
            Err(RegionError::EmptyXRange { x_min: 5, x_max: 5 })
        );
        assert_eq!(
            PlotRegion::new(1, 10, 7, 3),
            Err(RegionError::EmptyYRange { y_min: 7, y_max: 3 })
        );
        assert_eq!(
            PlotRegion::new(1, 10, 0, 1 << 40),
            Err(RegionError::TooLarge {
                parameter: "y_max",
                value: 1 << 40
            })
        );

        let region = PlotRegion::new(2, 5, 10, 20).unwrap();
        assert_eq!(region.columns(), 4);
        assert_eq!(region.rows(), 11);
        assert_eq!(
            RegionError::XMinBelowOne(0).to_string(),
            "x_min must be >= 1, got 0"
        );
    }

    #[test]
    fn table_must_cover_region() {
        let table = OutcomeTable::classify(10, 5).unwrap();
        let region = PlotRegion::new(1, 6, 0, 10).unwrap();
        assert_eq!(
            Plot::new(&table, region, V2f { x: 10.0, y: 10.0 }).err(),
            Some(PlotError::TableTooSmall {
                max_stones: 10,
                max_pick: 5,
                y_max: 10,
                x_max: 6
            })
        );
    }

    #[test]
    fn cells_have_largest_pile_on_top() {
        let table = OutcomeTable::classify(3, 3).unwrap();
        let region = PlotRegion::new(1, 3, 0, 3).unwrap();
        let plot = Plot::new(&table, region, V2f { x: 30.0, y: 40.0 }).unwrap();
        let cells = plot.cells();
        assert_eq!(cells.width(), 3);
        assert_eq!(cells.height(), 4);
        // Rows of y = 3, 2, 1, 0
        assert_eq!(cells.row(0), &[Color::BLACK, Color::WHITE, Color::WHITE]);
        assert_eq!(cells.row(1), &[Color::WHITE; 3]);
        assert_eq!(cells.row(2), &[Color::WHITE, Color::WHITE, Color::BLACK]);
        assert_eq!(cells.row(3), &[Color::BLACK; 3]);
    }

    #[test]
    fn sub_region_cells() {
        let table = OutcomeTable::classify(3, 3).unwrap();
        let region = PlotRegion::new(2, 3, 1, 2).unwrap();
        let plot = Plot::new(&table, region, V2f { x: 20.0, y: 20.0 }).unwrap();
        let cells = plot.cells();
        assert_eq!(cells.row(0), &[Color::WHITE, Color::WHITE]);
        assert_eq!(cells.row(1), &[Color::WHITE, Color::BLACK]);
    }

    #[test]
    fn canvas_coordinates() {
        let table = OutcomeTable::classify(20, 10).unwrap();
        let region = PlotRegion::new(1, 10, 0, 19).unwrap();
        let plot = Plot::new(&table, region, V2f { x: 100.0, y: 200.0 }).unwrap();
        assert_eq!(plot.to_canvas(1.0, 0.0), V2f { x: 5.0, y: 195.0 });
        assert_eq!(plot.to_canvas(10.0, 19.0), V2f { x: 95.0, y: 5.0 });
    }

    #[test]
    fn draws_enabled_curves() {
        let table = OutcomeTable::classify(200, 30).unwrap();
        let region = PlotRegion::new(1, 30, 0, 200).unwrap();
        let size = V2f { x: 300.0, y: 300.0 };
        let count_lines = |plot: &Plot| {
            let mut canvas = svg::Canvas::new(plot.required_canvas().size());
            plot.draw(&mut canvas);
            canvas.to_svg().matches("<polyline").count()
        };

        let plain = Plot::new(&table, region, size).unwrap();
        // Only the frame
        assert_eq!(count_lines(&plain), 1);

        let with_i = plain.clone().with_i_curves(true);
        assert_eq!(count_lines(&with_i), 4);

        let with_all = with_i.with_upper_lower_curves(true).with_dpi(144.0);
        assert_eq!(count_lines(&with_all), 4 + with_all.segments().len() - 3);
        assert!(with_all.segments().len() > 3);
    }
}
