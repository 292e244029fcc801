// crates/syzygy-core/src/defaults.rs

/// Inner-planet proxies: Mercury, Venus, Earth (days per revolution).
pub const PERIODS_DAYS: [f64; 3] = [88.0, 225.0, 365.25];

pub const BODY_LABELS: [&str; 3] = ["first", "second", "third"];

pub const TOLERANCE_DEG: f64 = 1.0;

/// Roughly 273.8 years.
pub const SIMPLE_MAX_DAYS: u64 = 100_000;

/// Opposite-side configurations are rarer; the dual scan looks much further.
pub const DUAL_MAX_DAYS: u64 = 10_000_000;

pub const DAYS_PER_YEAR: f64 = 365.25;

#[inline]
pub fn days_to_years(days: u64) -> f64 {
    days as f64 / DAYS_PER_YEAR
}
