//! Canvas that can draw to SVG

use crate::{drawing::Color, numeric::v2f::V2f};
use itertools::Itertools;
use std::fmt::Write;

/// SVG canvas, elements are appended in drawing order
#[derive(Debug, Clone)]
pub struct Canvas {
    size: V2f,
    buf: String,
}

impl Canvas {
    pub const fn new(size: V2f) -> Canvas {
        Canvas {
            size,
            buf: String::new(),
        }
    }

    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{}</svg>",
            self.buf,
            w = self.size.x,
            h = self.size.y,
        )
    }
}

impl super::Canvas for Canvas {
    fn rect(&mut self, position: V2f, size: V2f, color: Color) {
        // Writing to String cannot fail
        let _ = write!(
            self.buf,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" shape-rendering=\"crispEdges\"/>",
            position.x,
            position.y,
            size.x,
            size.y,
            color.to_hex_rgb(),
        );
    }

    fn polyline(&mut self, points: &[V2f], weight: f32, color: Color) {
        let _ = write!(
            self.buf,
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            points.iter().map(|p| format!("{},{}", p.x, p.y)).join(" "),
            color.to_hex_rgb(),
            weight,
        );
    }
}
