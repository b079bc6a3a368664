use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    DeserializeFromStr,
    SerializeDisplay,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Easing {
    /// Material "fast out, slow in": cubic-bezier(0.4, 0, 0.2, 1).
    #[default]
    FastOutSlowIn,
    /// cubic-bezier(0.42, 0, 0.58, 1).
    EaseInOut,
    Linear,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(t),
            Self::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(t),
            Self::Linear => t,
        }
    }
}

/// CSS-style timing curve through (0, 0), (x1, y1), (x2, y2), (1, 1).
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    const EPSILON: f64 = 1e-7;

    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(s: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn x_derivative(&self, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * self.x1 + 6.0 * inv * s * (self.x2 - self.x1) + 3.0 * s * s * (1.0 - self.x2)
    }

    /// Curve parameter whose x equals `x`: Newton first, bisection if it stalls.
    fn parameter_for(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let error = Self::component(s, self.x1, self.x2) - x;
            if error.abs() < Self::EPSILON {
                return s;
            }
            let slope = self.x_derivative(s);
            if slope.abs() < Self::EPSILON {
                break;
            }
            s -= error / slope;
        }

        let (mut low, mut high) = (0.0, 1.0);
        s = x;
        while high - low > Self::EPSILON {
            let value = Self::component(s, self.x1, self.x2);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                low = s;
            } else {
                high = s;
            }
            s = (low + high) / 2.0;
        }
        s
    }

    fn solve(&self, x: f64) -> f64 {
        Self::component(self.parameter_for(x), self.y1, self.y2)
    }
}
