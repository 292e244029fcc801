// crates/syzygy-core/src/align.rs
//
// Alignment predicates over three angular positions (degrees).
//
// same_side:     every pairwise separation <= tolerance.
// opposite_side: one pair strictly closer than TIGHT_PAIR_DEG, and the other
//                two separations each within tolerance of 180.

use crate::angle::{angular_difference, HALF_TURN_DEG};

/// Tight-pair threshold for opposite-side alignment. Fixed; not scaled by tolerance.
pub const TIGHT_PAIR_DEG: f64 = 1.0;

/// Pairwise separations of three positions: (1,2), (2,3), (3,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Separations {
    pub d12: f64,
    pub d23: f64,
    pub d31: f64,
}

impl Separations {
    pub fn of(a1: f64, a2: f64, a3: f64) -> Self {
        Separations {
            d12: angular_difference(a1, a2),
            d23: angular_difference(a2, a3),
            d31: angular_difference(a3, a1),
        }
    }

    pub fn same_side(&self, tolerance: f64) -> bool {
        self.d12 <= tolerance && self.d23 <= tolerance && self.d31 <= tolerance
    }

    pub fn opposite_side(&self, tolerance: f64) -> bool {
        let near_half = |d: f64| (d - HALF_TURN_DEG).abs() <= tolerance;

        (self.d12 < TIGHT_PAIR_DEG && near_half(self.d23) && near_half(self.d31))
            || (self.d23 < TIGHT_PAIR_DEG && near_half(self.d12) && near_half(self.d31))
            || (self.d31 < TIGHT_PAIR_DEG && near_half(self.d12) && near_half(self.d23))
    }
}

/// Both predicate outcomes for one day. Not mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alignment {
    pub same_side: bool,
    pub opposite_side: bool,
}

impl Alignment {
    pub fn classify(seps: &Separations, tolerance: f64) -> Self {
        Alignment {
            same_side: seps.same_side(tolerance),
            opposite_side: seps.opposite_side(tolerance),
        }
    }
}

pub fn same_side(a1: f64, a2: f64, a3: f64, tolerance: f64) -> bool {
    Separations::of(a1, a2, a3).same_side(tolerance)
}

pub fn opposite_side(a1: f64, a2: f64, a3: f64, tolerance: f64) -> bool {
    Separations::of(a1, a2, a3).opposite_side(tolerance)
}
