#![allow(missing_docs)]

use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct V2f {
    pub x: f32,
    pub y: f32,
}

impl From<[f32; 2]> for V2f {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl V2f {
    pub const ZERO: V2f = V2f { x: 0.0, y: 0.0 };
}

impl Add for V2f {
    type Output = V2f;

    fn add(self, rhs: Self) -> Self::Output {
        V2f {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for V2f {
    type Output = V2f;

    fn sub(self, rhs: Self) -> Self::Output {
        V2f {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for V2f {
    type Output = V2f;

    fn mul(self, rhs: f32) -> Self::Output {
        V2f {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
