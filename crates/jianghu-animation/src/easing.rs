//! Cubic-bezier easing curves

use serde::{Deserialize, Serialize};

/// Easing curve applied to each segment between two keyframes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Custom curve `(x1, y1, x2, y2)`, as in CSS `cubic-bezier()`
    CubicBezier([f64; 4]),
}

impl Easing {
    /// Control points of the equivalent cubic-bezier curve
    pub fn control_points(&self) -> [f64; 4] {
        match self {
            Easing::Linear => [0.0, 0.0, 1.0, 1.0],
            Easing::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Easing::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Easing::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            Easing::CubicBezier(points) => *points,
        }
    }

    /// Map linear progress `t` in [0, 1] to eased progress.
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if let Easing::Linear = self {
            return t;
        }
        let [x1, y1, x2, y2] = self.control_points();
        let u = solve_curve_x(x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0), t);
        bezier(y1, y2, u)
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1
fn bezier(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn bezier_slope(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`.
///
/// Newton iterations first, bisection when the slope flattens out.
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, u) - x;
        if err.abs() < EPSILON {
            return u;
        }
        let slope = bezier_slope(x1, x2, u);
        if slope.abs() < 1e-6 {
            break;
        }
        u = (u - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..64 {
        let value = bezier(x1, x2, u);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) * 0.5;
    }
    u
}
