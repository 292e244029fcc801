// crates/syzygy-cli/src/cmd/mod.rs

use clap::Args;
use syzygy_core::defaults;
use syzygy_core::SearchParams;

pub mod at;
pub mod dual;
pub mod simple;

/// Periods and tolerance shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct OrbitArgs {
    /// Orbital period of the first body (days)
    #[arg(long, default_value_t = defaults::PERIODS_DAYS[0], allow_hyphen_values = true)]
    pub p1: f64,

    /// Orbital period of the second body (days)
    #[arg(long, default_value_t = defaults::PERIODS_DAYS[1], allow_hyphen_values = true)]
    pub p2: f64,

    /// Orbital period of the third body (days)
    #[arg(long, default_value_t = defaults::PERIODS_DAYS[2], allow_hyphen_values = true)]
    pub p3: f64,

    /// Angular tolerance (degrees)
    #[arg(long, default_value_t = defaults::TOLERANCE_DEG, allow_hyphen_values = true)]
    pub tolerance: f64,
}

impl OrbitArgs {
    pub fn params(&self, max_days: u64) -> SearchParams {
        if self.tolerance >= 180.0 {
            log::warn!(
                "tolerance {} >= 180 deg: same-side alignment is trivially satisfied",
                self.tolerance
            );
        }
        SearchParams::new([self.p1, self.p2, self.p3], self.tolerance, max_days)
    }
}

/// Where and how results are written.
#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Output format: "text" or "jsonl"
    #[arg(long, default_value = "text")]
    pub fmt: String,

    /// Output file path; if omitted, prints to stdout.
    #[arg(long)]
    pub output: Option<String>,
}
