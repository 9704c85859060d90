#![allow(missing_docs)]

//! Drawing module

use crate::{
    grid::{FiniteGrid, vec_grid::VecGrid},
    numeric::v2f::V2f,
};

pub mod svg;

#[cfg(feature = "tiny_skia")]
pub mod tiny_skia;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[allow(clippy::unreadable_literal)]
    pub const BLACK: Color = Color::from_hex(0x000000ff);

    #[allow(clippy::unreadable_literal)]
    pub const WHITE: Color = Color::from_hex(0xffffffff);

    #[allow(clippy::unreadable_literal)]
    pub const GRAY: Color = Color::from_hex(0x808080ff);

    #[allow(clippy::unreadable_literal)]
    pub const GREEN: Color = Color::from_hex(0x008000ff);

    #[allow(clippy::unreadable_literal)]
    pub const RED: Color = Color::from_hex(0xff0000ff);

    #[allow(clippy::unreadable_literal)]
    pub const BLUE: Color = Color::from_hex(0x0000ffff);

    #[allow(clippy::unreadable_literal)]
    pub const PINK: Color = Color::from_hex(0xf505d5ff);

    #[allow(clippy::unreadable_literal)]
    pub const LIGHT_BLUE: Color = Color::from_hex(0x05bdf5ff);

    #[must_use]
    pub const fn from_hex(hex: u32) -> Color {
        Color {
            r: ((hex >> 24) & 0xff) as u8,
            g: ((hex >> 16) & 0xff) as u8,
            b: ((hex >> 8) & 0xff) as u8,
            a: (hex & 0xff) as u8,
        }
    }

    /// `#rrggbb` notation, alpha is dropped
    #[must_use]
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "tiny_skia")]
impl From<Color> for ::tiny_skia::Color {
    fn from(color: Color) -> ::tiny_skia::Color {
        ::tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Anything that can be used for drawing. Coordinates are in pixels with `y` growing downwards.
pub trait Canvas {
    fn rect(&mut self, position: V2f, size: V2f, color: Color);

    fn polyline(&mut self, points: &[V2f], weight: f32, color: Color);

    /// Stretch `cells` over the rectangle, row 0 of the grid at the top
    fn raster(&mut self, position: V2f, size: V2f, cells: &VecGrid<Color>) {
        let columns = cells.width();
        let rows = cells.height();
        if columns == 0 || rows == 0 {
            return;
        }
        let cell_size = V2f {
            x: size.x / columns as f32,
            y: size.y / rows as f32,
        };

        // Merge horizontal runs of equal color to keep vector output small
        for (row_idx, row) in cells.rows().enumerate() {
            let mut run_start = 0;
            for column_idx in 1..=columns {
                if column_idx == columns || row[column_idx] != row[run_start] {
                    let run_position = position
                        + V2f {
                            x: cell_size.x * run_start as f32,
                            y: cell_size.y * row_idx as f32,
                        };
                    let run_size = V2f {
                        x: cell_size.x * (column_idx - run_start) as f32,
                        y: cell_size.y,
                    };
                    self.rect(run_position, run_size, row[run_start]);
                    run_start = column_idx;
                }
            }
        }
    }

    fn frame(&mut self, position: V2f, size: V2f, weight: f32, color: Color) {
        let top_right = position + V2f { x: size.x, y: 0.0 };
        let bottom_left = position + V2f { x: 0.0, y: size.y };
        self.polyline(
            &[position, top_right, position + size, bottom_left, position],
            weight,
            color,
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BoundingBox {
    pub top_left: V2f,
    pub bottom_right: V2f,
}

impl BoundingBox {
    pub fn size(self) -> V2f {
        self.bottom_right - self.top_left
    }
}

pub trait Draw {
    /// Paint object on existing canvas
    fn draw<C>(&self, canvas: &mut C)
    where
        C: Canvas;

    /// Canvas size required to paint the whole object
    fn required_canvas(&self) -> BoundingBox;
}
