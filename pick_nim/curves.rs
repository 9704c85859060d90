//! Closed-form curves drawn over the outcome table.
//!
//! All curves are quadratics in the previous pick `x` giving a pile size `y`. The `2i`, `3i`
//! and `4i` curves are single curves, the lower and upper curves are families indexed by
//! `i = 0, 1, 2, ...`.

use crate::{drawing::Color, plot::PlotRegion};

/// Number of points each curve segment is sampled at
pub const SAMPLES: usize = 50;

/// Smallest family index considered is the first one below this limit that reaches the region
const MAX_FIRST_INDEX: u32 = 100;

/// A single overlay curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// `x² - 3x/2 - 1`
    TwoI,

    /// `2x²/3 + 2x/3 - 2`
    ThreeI,

    /// `x²/2 + 3x/4 - 3/4`
    FourI,

    /// `-2x²/3 + (2i - 1)x/3 + i/3`
    Lower(u32),

    /// `-2x²/3 + 2ix/3 - (4 + i)/3`
    Upper(u32),
}

impl Curve {
    #[allow(missing_docs)]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Curve::TwoI => x.mul_add(x - 1.5, -1.0),
            Curve::ThreeI => (2.0 / 3.0 * x).mul_add(x + 1.0, -2.0),
            Curve::FourI => x.mul_add(0.5_f64.mul_add(x, 0.75), -0.75),
            Curve::Lower(i) => {
                let i = f64::from(i);
                let linear = 2.0_f64.mul_add(i, -1.0) / 3.0;
                x.mul_add((-2.0_f64 / 3.0).mul_add(x, linear), i / 3.0)
            }
            Curve::Upper(i) => {
                let i = f64::from(i);
                x.mul_add((-2.0_f64 / 3.0).mul_add(x, 2.0 * i / 3.0), -(4.0 + i) / 3.0)
            }
        }
    }

    #[allow(missing_docs)]
    pub const fn color(self) -> Color {
        match self {
            Curve::TwoI => Color::GREEN,
            Curve::ThreeI => Color::RED,
            Curve::FourI => Color::BLUE,
            Curve::Lower(_) => Color::LIGHT_BLUE,
            Curve::Upper(_) => Color::PINK,
        }
    }

    /// Line width in points
    pub const fn weight(self) -> f32 {
        match self {
            Curve::TwoI | Curve::ThreeI | Curve::FourI => 6.0,
            Curve::Lower(_) | Curve::Upper(_) => 4.0,
        }
    }
}

/// Indexed family of curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    #[allow(missing_docs)]
    Lower,

    #[allow(missing_docs)]
    Upper,
}

impl Family {
    /// `i`-th member of the family
    pub const fn curve(self, i: u32) -> Curve {
        match self {
            Family::Lower => Curve::Lower(i),
            Family::Upper => Curve::Upper(i),
        }
    }
}

/// Part of a curve restricted to `x_start <= x <= x_end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    #[allow(missing_docs)]
    pub curve: Curve,

    #[allow(missing_docs)]
    pub x_start: f64,

    #[allow(missing_docs)]
    pub x_end: f64,
}

impl Segment {
    /// `SAMPLES` evenly spaced `(x, y)` points including both ends
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        linspace(self.x_start, self.x_end).map(|x| (x, self.curve.eval(x)))
    }
}

fn linspace(start: f64, end: f64) -> impl Iterator<Item = f64> {
    let step = (end - start) / (SAMPLES - 1) as f64;
    (0..SAMPLES).map(move |idx| {
        if idx == SAMPLES - 1 {
            end
        } else {
            step.mul_add(idx as f64, start)
        }
    })
}

/// `2i`, `3i` and `4i` curves over the whole region
pub fn i_curves(region: &PlotRegion) -> Vec<Segment> {
    [Curve::TwoI, Curve::ThreeI, Curve::FourI]
        .into_iter()
        .map(|curve| Segment {
            curve,
            x_start: f64::from(region.x_min()),
            x_end: f64::from(region.x_max()),
        })
        .collect()
}

/// Members of the family visible in the region, each cut to start where it first drops below
/// the `2i` curve.
///
/// Starts at the first member that reaches `y_min` and stops at the first member that either
/// never drops below the `2i` curve or lies entirely above `y_max`.
pub fn family_segments(family: Family, region: &PlotRegion) -> Vec<Segment> {
    let x_min = f64::from(region.x_min());
    let x_max = f64::from(region.x_max());
    let y_min = f64::from(region.y_min());
    let y_max = f64::from(region.y_max());

    let reaches_region = |i: u32| {
        linspace(x_min, x_max)
            .map(|x| family.curve(i).eval(x))
            .any(|y| y >= y_min)
    };
    let mut i = 0;
    while i < MAX_FIRST_INDEX && !reaches_region(i) {
        i += 1;
    }

    let mut segments = Vec::new();
    loop {
        let curve = family.curve(i);
        let Some(x_start) = (region.x_min()..region.x_max())
            .map(f64::from)
            .find(|&x| curve.eval(x) < Curve::TwoI.eval(x))
        else {
            break;
        };

        let segment = Segment {
            curve,
            x_start,
            x_end: x_max,
        };
        if segment.samples().all(|(_, y)| y > y_max) {
            break;
        }
        segments.push(segment);
        i += 1;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(lhs: f64, rhs: f64) {
        assert!((lhs - rhs).abs() < 1e-9, "{lhs} != {rhs}");
    }

    #[test]
    fn curve_values() {
        assert_close(Curve::TwoI.eval(4.0), 9.0);
        assert_close(Curve::ThreeI.eval(3.0), 6.0);
        assert_close(Curve::FourI.eval(3.0), 6.0);
        assert_close(Curve::Lower(0).eval(3.0), -7.0);
        assert_close(Curve::Lower(3).eval(3.0), -6.0 + 5.0 + 1.0);
        assert_close(Curve::Upper(0).eval(3.0), -6.0 - 4.0 / 3.0);
        assert_close(Curve::Upper(6).eval(3.0), -6.0 + 12.0 - 10.0 / 3.0);
    }

    #[test]
    fn samples_cover_both_ends() {
        let segment = Segment {
            curve: Curve::TwoI,
            x_start: 1.0,
            x_end: 100.0,
        };
        let samples = segment.samples().collect::<Vec<_>>();
        assert_eq!(samples.len(), SAMPLES);
        assert_close(samples[0].0, 1.0);
        assert_close(samples[SAMPLES - 1].0, 100.0);
        assert!(samples.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn i_curves_span_region() {
        let region = PlotRegion::new(5, 50, 0, 100).unwrap();
        let segments = i_curves(&region);
        assert_eq!(segments.len(), 3);
        for segment in segments {
            assert_close(segment.x_start, 5.0);
            assert_close(segment.x_end, 50.0);
        }
    }

    #[test]
    fn family_segments_are_visible() {
        let region = PlotRegion::new(1, 100, 0, 2000).unwrap();
        for family in [Family::Lower, Family::Upper] {
            let segments = family_segments(family, &region);
            assert!(!segments.is_empty());
            for segment in &segments {
                assert!(
                    segment
                        .curve
                        .eval(segment.x_start)
                        < Curve::TwoI.eval(segment.x_start)
                );
                assert!(segment.samples().any(|(_, y)| y <= 2000.0));
            }
            for pair in segments.windows(2) {
                assert_ne!(pair[0].curve, pair[1].curve);
            }
        }
    }

    #[test]
    fn family_starts_at_region() {
        // Lower curves with small index stay below y = 500
        let region = PlotRegion::new(1, 100, 500, 600).unwrap();
        let segments = family_segments(Family::Lower, &region);
        let Some(Curve::Lower(first)) = segments.first().map(|s| s.curve) else {
            panic!("expected a lower curve");
        };
        assert!(first > 0);
        assert!(linspace(1.0, 100.0).all(|x| Curve::Lower(first - 1).eval(x) < 500.0));
        assert!(linspace(1.0, 100.0).any(|x| Curve::Lower(first).eval(x) >= 500.0));
    }
}
