//! Piecewise-linear keyframe interpolation
//!
//! A sorted list of `(x, y)` control points. Sampling finds the bracketing
//! segment with a binary search and interpolates linearly inside it; inputs
//! outside the covered range hold the value of the nearest end point.

/// Sorted control points of a piecewise-linear function
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    points: Vec<(f64, f64)>,
}

impl Keyframes {
    /// Build from control points in any order
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut points: Vec<(f64, f64)> = points.into_iter().collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Evaluate at `x`
    pub fn sample(&self, x: f64) -> f64 {
        let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };

        if x.is_nan() || x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }

        // first.0 < x < last.0, so 1 <= idx < len
        let idx = self.points.partition_point(|p| p.0 <= x);
        let (x0, y0) = self.points[idx - 1];
        let (x1, y1) = self.points[idx];
        let t = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}
