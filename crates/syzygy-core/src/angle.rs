// crates/syzygy-core/src/angle.rs
//
// Circular-orbit angle model.
//
//   omega        = 360 / period            (deg/day)
//   position(d)  = (omega * d) mod 360     in [0, 360)
//   diff(a, b)   = min(r, 360 - r), r = |a - b| mod 360   in [0, 180]
//
// Every body starts at 0 deg on day 0. Positions are recomputed from
// omega * d each day rather than accumulated, so results are reproducible
// bit-for-bit for identical f64 semantics.

use crate::defaults::BODY_LABELS;

pub const FULL_TURN_DEG: f64 = 360.0;
pub const HALF_TURN_DEG: f64 = 180.0;

/// Degrees advanced per day by a body with the given period.
#[inline]
pub fn angular_velocity(period_days: f64) -> f64 {
    FULL_TURN_DEG / period_days
}

/// Position in [0, 360) after `day` days at `omega_deg_per_day`.
#[inline]
pub fn position(omega_deg_per_day: f64, day: u64) -> f64 {
    normalize_deg(omega_deg_per_day * day as f64)
}

/// Wrap any finite angle into [0, 360).
#[inline]
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid rounds up to exactly 360.0 for tiny negative inputs.
    if r >= FULL_TURN_DEG {
        0.0
    } else {
        r
    }
}

/// Minimal separation between two angles, in [0, 180].
///
/// Inputs do not need to be normalized: the absolute difference is reduced
/// modulo 360 before folding, so e.g. `angular_difference(0.0, 730.0) == 10.0`.
#[inline]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let raw = (a - b).abs() % FULL_TURN_DEG;
    raw.min(FULL_TURN_DEG - raw)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub label: &'static str,
    pub period_days: f64,
}

impl Body {
    pub fn new(label: &'static str, period_days: f64) -> Self {
        Body { label, period_days }
    }

    /// Label the three periods positionally: first, second, third.
    pub fn triad(periods: [f64; 3]) -> [Body; 3] {
        [
            Body::new(BODY_LABELS[0], periods[0]),
            Body::new(BODY_LABELS[1], periods[1]),
            Body::new(BODY_LABELS[2], periods[2]),
        ]
    }

    #[inline]
    pub fn angular_velocity(&self) -> f64 {
        angular_velocity(self.period_days)
    }

    #[inline]
    pub fn position_on(&self, day: u64) -> f64 {
        position(self.angular_velocity(), day)
    }
}
