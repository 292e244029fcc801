// crates/syzygy-core/src/search.rs
//
// Brute-force alignment search.
//
// For day = 1, 2, ..., max_days:
//   angle_i = (omega_i * day) mod 360
//   evaluate the alignment predicate(s) on (angle_1, angle_2, angle_3)
//
// The first qualifying day is returned; the scan never looks past max_days.
// Not-found is `None`, never day 0.

use crate::align::{Alignment, Separations};
use crate::angle::{position, Body};
use crate::defaults;
use crate::error::Result;
use crate::validate::validate_params;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchParams {
    pub periods_days: [f64; 3],
    pub tolerance_deg: f64,
    pub max_days: u64,
}

impl SearchParams {
    pub fn new(periods_days: [f64; 3], tolerance_deg: f64, max_days: u64) -> Self {
        SearchParams {
            periods_days,
            tolerance_deg,
            max_days,
        }
    }

    /// Default periods and tolerance with the simple-mode horizon.
    pub fn simple_default() -> Self {
        Self::new(
            defaults::PERIODS_DAYS,
            defaults::TOLERANCE_DEG,
            defaults::SIMPLE_MAX_DAYS,
        )
    }

    /// Default periods and tolerance with the dual-mode horizon.
    pub fn dual_default() -> Self {
        Self::new(
            defaults::PERIODS_DAYS,
            defaults::TOLERANCE_DEG,
            defaults::DUAL_MAX_DAYS,
        )
    }

    pub fn bodies(&self) -> [Body; 3] {
        Body::triad(self.periods_days)
    }

    fn omegas(&self) -> [f64; 3] {
        let [a, b, c] = self.bodies();
        [a.angular_velocity(), b.angular_velocity(), c.angular_velocity()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DualResult {
    pub same_side: Option<u64>,
    pub opposite_side: Option<u64>,
    /// Days examined before the loop stopped (both found, or horizon reached).
    pub days_scanned: u64,
}

impl DualResult {
    pub fn both_found(&self) -> bool {
        self.same_side.is_some() && self.opposite_side.is_some()
    }
}

/// Everything the predicates see on one day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DaySnapshot {
    pub day: u64,
    pub positions: [f64; 3],
    pub separations: Separations,
    pub alignment: Alignment,
}

#[inline]
fn positions_on(omegas: &[f64; 3], day: u64) -> [f64; 3] {
    [
        position(omegas[0], day),
        position(omegas[1], day),
        position(omegas[2], day),
    ]
}

/// First day in [1, max_days] on which all three bodies sit within tolerance
/// of each other.
pub fn find_same_side_day(params: &SearchParams) -> Result<Option<u64>> {
    validate_params(params)?;
    log::debug!(
        "same-side search: periods={:?} tolerance={} max_days={}",
        params.periods_days,
        params.tolerance_deg,
        params.max_days
    );

    let omegas = params.omegas();

    for day in 1..=params.max_days {
        let [a1, a2, a3] = positions_on(&omegas, day);
        if Separations::of(a1, a2, a3).same_side(params.tolerance_deg) {
            log::debug!("same-side alignment on day {day}");
            return Ok(Some(day));
        }
    }

    log::debug!("no same-side alignment within {} days", params.max_days);
    Ok(None)
}

/// First same-side day and first opposite-side day, tracked independently.
///
/// Stops as soon as both have been seen, or after `max_days`. A day on which
/// both predicates hold is recorded for both.
pub fn find_dual_days(params: &SearchParams) -> Result<DualResult> {
    validate_params(params)?;
    log::debug!(
        "dual search: periods={:?} tolerance={} max_days={}",
        params.periods_days,
        params.tolerance_deg,
        params.max_days
    );

    let omegas = params.omegas();

    let mut r = DualResult {
        same_side: None,
        opposite_side: None,
        days_scanned: 0,
    };

    for day in 1..=params.max_days {
        r.days_scanned = day;

        let [a1, a2, a3] = positions_on(&omegas, day);
        let seps = Separations::of(a1, a2, a3);
        let aligned = Alignment::classify(&seps, params.tolerance_deg);

        if r.same_side.is_none() && aligned.same_side {
            log::trace!("first same-side day {day}: {seps:?}");
            r.same_side = Some(day);
        }
        if r.opposite_side.is_none() && aligned.opposite_side {
            log::trace!("first opposite-side day {day}: {seps:?}");
            r.opposite_side = Some(day);
        }

        if r.both_found() {
            break;
        }
    }

    log::debug!("dual search done: {r:?}");
    Ok(r)
}

/// Positions, separations and predicate outcomes for a single day.
///
/// `params.max_days` is ignored; any day, including 0, may be inspected.
pub fn snapshot(params: &SearchParams, day: u64) -> Result<DaySnapshot> {
    validate_params(params)?;

    let positions = params.bodies().map(|b| b.position_on(day));
    let separations = Separations::of(positions[0], positions[1], positions[2]);
    let alignment = Alignment::classify(&separations, params.tolerance_deg);

    Ok(DaySnapshot {
        day,
        positions,
        separations,
        alignment,
    })
}
