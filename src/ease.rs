//! Easing functions: named presets and `cubic-bezier(...)` splines sampled into a lookup table.

use std::sync::LazyLock;

use kurbo::{CubicBez, ParamCurve, Point};
use regex::Regex;

/// Number of `(x, y)` samples in a spline lookup table (`u = 0.00, 0.01, ..., 1.00`).
pub const SPLINE_SAMPLES: usize = 101;

static CUBIC_BEZIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"cubic-bezier\(([^,]*),([^,]*),([^,]*),([^)]*)\)")
        .expect("cubic-bezier pattern is a valid regex")
});

/// Easing applied to intra-iteration progress.
#[derive(Clone, Debug, PartialEq)]
pub enum Easing {
    /// Identity.
    Linear,
    /// Cubic Bézier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`, evaluated via lookup table.
    Spline(SplineTable),
}

impl Easing {
    /// Named presets. `None` when `name` is not one of them.
    pub fn preset(name: &str) -> Option<Self> {
        let [x1, y1, x2, y2] = match name {
            "linear" => return Some(Self::Linear),
            "ease" => [0.25, 0.1, 0.25, 1.0],
            "ease-in" => [0.42, 0.0, 1.0, 1.0],
            "ease-out" => [0.0, 0.0, 0.58, 1.0],
            "ease-in-out" => [0.42, 0.0, 0.58, 1.0],
            _ => return None,
        };
        Some(Self::Spline(SplineTable::new(x1, y1, x2, y2)))
    }

    /// Parse an easing descriptor. Unrecognized descriptors fall back to [`Easing::Linear`].
    pub fn parse(descriptor: &str) -> Self {
        if let Some(preset) = Self::preset(descriptor) {
            return preset;
        }
        match parse_cubic_bezier(descriptor) {
            Some([x1, y1, x2, y2]) => Self::Spline(SplineTable::new(x1, y1, x2, y2)),
            None => {
                tracing::debug!(descriptor, "unrecognized easing, using linear");
                Self::Linear
            }
        }
    }

    pub fn apply(&self, fraction: f64) -> f64 {
        match self {
            Self::Linear => fraction,
            Self::Spline(table) => table.sample(fraction),
        }
    }
}

fn parse_cubic_bezier(descriptor: &str) -> Option<[f64; 4]> {
    let caps = CUBIC_BEZIER.captures(descriptor)?;
    let mut out = [0.0; 4];
    for (slot, i) in out.iter_mut().zip(1..=4) {
        let raw = caps.get(i)?.as_str().trim();
        // An empty argument counts as zero.
        let v: f64 = if raw.is_empty() { 0.0 } else { raw.parse().ok()? };
        if !v.is_finite() {
            return None;
        }
        *slot = v;
    }
    Some(out)
}

/// Precomputed `(x(u), y(u))` samples of a unit cubic Bézier.
#[derive(Clone, Debug, PartialEq)]
pub struct SplineTable {
    points: [Point; SPLINE_SAMPLES],
}

impl SplineTable {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let curve = CubicBez::new((0.0, 0.0), (x1, y1), (x2, y2), (1.0, 1.0));
        let last = (SPLINE_SAMPLES - 1) as f64;
        let points = std::array::from_fn(|i| curve.eval(i as f64 / last));
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Treat `fraction` as an `x` and return the matching `y`.
    ///
    /// Picks the first sample with `x >= fraction` and interpolates linearly from its
    /// predecessor. Inputs past the last sample extrapolate along the final segment.
    pub fn sample(&self, fraction: f64) -> f64 {
        let last = SPLINE_SAMPLES - 1;
        let mut hi = 0;
        while hi != last && fraction > self.points[hi].x {
            hi += 1;
        }
        let upper = self.points[hi];
        if fraction == upper.x || hi == 0 {
            return upper.y;
        }
        let lower = self.points[hi - 1];
        let dx = upper.x - lower.x;
        if dx == 0.0 {
            return upper.y;
        }
        let p = (fraction - lower.x) / dx;
        lower.y + p * (upper.y - lower.y)
    }
}
