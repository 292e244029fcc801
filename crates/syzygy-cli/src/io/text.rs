// crates/syzygy-cli/src/io/text.rs

use syzygy_core::defaults::days_to_years;
use syzygy_core::search::{DaySnapshot, DualResult, SearchParams};

pub fn simple_report(day: Option<u64>, max_days: u64) -> Vec<String> {
    match day {
        Some(d) => vec![
            format!("Bodies realign after: {d} days"),
            format!("Approximately {:.2} years", days_to_years(d)),
        ],
        None => vec![not_found("same-side", max_days)],
    }
}

pub fn dual_report(r: &DualResult, max_days: u64) -> Vec<String> {
    let line = |kind: &str, day: Option<u64>| match day {
        Some(d) => format!("First {kind} alignment on day: {d}"),
        None => not_found(kind, max_days),
    };
    vec![
        line("same-side", r.same_side),
        line("opposite-side", r.opposite_side),
    ]
}

pub fn snapshot_report(params: &SearchParams, s: &DaySnapshot) -> Vec<String> {
    let mut out = vec![format!("day           = {}", s.day)];
    for (b, pos) in params.bodies().iter().zip(s.positions.iter()) {
        out.push(format!(
            "{:<14}= {:.6} deg (period {} d)",
            b.label, pos, b.period_days
        ));
    }
    out.push(format!("d12           = {:.6}", s.separations.d12));
    out.push(format!("d23           = {:.6}", s.separations.d23));
    out.push(format!("d31           = {:.6}", s.separations.d31));
    out.push(format!("tolerance     = {}", params.tolerance_deg));
    out.push(format!("same_side     = {}", s.alignment.same_side));
    out.push(format!("opposite_side = {}", s.alignment.opposite_side));
    out
}

fn not_found(kind: &str, max_days: u64) -> String {
    format!("No {kind} alignment found within {max_days} days.")
}
