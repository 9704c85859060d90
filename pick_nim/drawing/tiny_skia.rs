//! Canvas that can draw to PNG

use crate::{
    drawing::Color,
    grid::{FiniteGrid, Grid, vec_grid::VecGrid},
    numeric::v2f::V2f,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PngError {
    #[error("Could not allocate {width}x{height} pixel canvas")]
    Canvas { width: u32, height: u32 },

    #[error("Could not encode PNG: {0}")]
    Encode(String),
}

pub struct Canvas {
    pixmap: tiny_skia::Pixmap,
}

impl Canvas {
    /// Create white canvas of given size in pixels
    ///
    /// # Errors
    ///
    /// [`PngError::Canvas`] if either side rounds to zero
    pub fn new(size: V2f) -> Result<Canvas, PngError> {
        let width = size.x.round() as u32;
        let height = size.y.round() as u32;
        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(PngError::Canvas { width, height })?;
        pixmap.fill(Color::WHITE.into());
        Ok(Canvas { pixmap })
    }

    /// Encode the canvas as PNG
    ///
    /// # Errors
    ///
    /// [`PngError::Encode`] if the encoder fails
    pub fn to_png(&self) -> Result<Vec<u8>, PngError> {
        self.pixmap
            .encode_png()
            .map_err(|err| PngError::Encode(err.to_string()))
    }

    /// Color of a single pixel, `None` outside of the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color {
            r: pixel.red(),
            g: pixel.green(),
            b: pixel.blue(),
            a: pixel.alpha(),
        })
    }
}

impl super::Canvas for Canvas {
    fn rect(&mut self, position: V2f, size: V2f, color: Color) {
        let Some(rect) = tiny_skia::Rect::from_xywh(position.x, position.y, size.x, size.y) else {
            return;
        };
        self.pixmap.fill_rect(
            rect,
            &paint_solid_color(color, false),
            tiny_skia::Transform::identity(),
            None,
        );
    }

    fn polyline(&mut self, points: &[V2f], weight: f32, color: Color) {
        let [first, rest @ ..] = points else {
            return;
        };
        let mut path = tiny_skia::PathBuilder::with_capacity(points.len(), points.len());
        path.move_to(first.x, first.y);
        for point in rest {
            path.line_to(point.x, point.y);
        }
        let Some(path) = path.finish() else {
            return;
        };
        self.pixmap.stroke_path(
            &path,
            &paint_solid_color(color, true),
            &tiny_skia::Stroke {
                width: weight,
                ..tiny_skia::Stroke::default()
            },
            tiny_skia::Transform::identity(),
            None,
        );
    }

    /// Nearest neighbour scaling straight into the pixel buffer, cells may be smaller than a
    /// pixel
    fn raster(&mut self, position: V2f, size: V2f, cells: &VecGrid<Color>) {
        let columns = cells.width();
        let rows = cells.height();
        if columns == 0 || rows == 0 || size.x <= 0.0 || size.y <= 0.0 {
            return;
        }

        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let bottom_right = position + size;
        let x_range = (position.x.max(0.0) as u32)..(bottom_right.x.ceil().max(0.0) as u32).min(width);
        let y_range = (position.y.max(0.0) as u32)..(bottom_right.y.ceil().max(0.0) as u32).min(height);

        let pixels = self.pixmap.pixels_mut();
        for py in y_range {
            let center_y = py as f32 + 0.5 - position.y;
            if center_y < 0.0 || center_y >= size.y {
                continue;
            }
            let row = ((center_y / size.y * rows as f32) as usize).min(rows - 1);
            for px in x_range.clone() {
                let center_x = px as f32 + 0.5 - position.x;
                if center_x < 0.0 || center_x >= size.x {
                    continue;
                }
                let column = ((center_x / size.x * columns as f32) as usize).min(columns - 1);
                let color = cells.get(column, row);
                pixels[(py * width + px) as usize] =
                    tiny_skia::ColorU8::from_rgba(color.r, color.g, color.b, color.a).premultiply();
            }
        }
    }
}

fn paint_solid_color(color: Color, anti_alias: bool) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color(tiny_skia::Color::from(color));
    paint.anti_alias = anti_alias;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Canvas as _;

    #[test]
    fn raster_scales_up() {
        let cells = VecGrid::from_rows(vec![
            vec![Color::BLACK, Color::WHITE],
            vec![Color::WHITE, Color::BLACK],
        ])
        .unwrap();
        let mut canvas = Canvas::new(V2f { x: 4.0, y: 4.0 }).unwrap();
        canvas.raster(V2f::ZERO, V2f { x: 4.0, y: 4.0 }, &cells);
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(canvas.pixel(2, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(0, 3), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 3), Some(Color::BLACK));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn raster_scales_down() {
        let mut rows = vec![vec![Color::WHITE; 10]; 10];
        rows[5][5] = Color::BLACK;
        let cells = VecGrid::from_rows(rows).unwrap();
        let mut canvas = Canvas::new(V2f { x: 2.0, y: 2.0 }).unwrap();
        canvas.raster(V2f::ZERO, V2f { x: 2.0, y: 2.0 }, &cells);
        // Pixel (1, 1) samples cell (7, 7)
        assert_eq!(canvas.pixel(1, 1), Some(Color::WHITE));
        assert!(!canvas.to_png().unwrap().is_empty());
    }

    #[test]
    fn empty_canvas() {
        assert_eq!(
            Canvas::new(V2f { x: 0.0, y: 10.0 }).err(),
            Some(PngError::Canvas {
                width: 0,
                height: 10
            })
        );
    }
}
