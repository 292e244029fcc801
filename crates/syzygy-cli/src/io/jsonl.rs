// crates/syzygy-cli/src/io/jsonl.rs
//
// One JSON object per line. Missing results are `null`, never 0.

use syzygy_core::defaults::days_to_years;
use syzygy_core::search::{DaySnapshot, DualResult, SearchParams};

fn opt_day(d: Option<u64>) -> String {
    match d {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

fn periods(p: &SearchParams) -> String {
    let [a, b, c] = p.periods_days;
    format!("[{a},{b},{c}]")
}

/// Format: {"mode":"simple","periods":[..],"tolerance":T,"max_days":N,"same_side":D|null,"years":Y|null}
pub fn simple_record(p: &SearchParams, day: Option<u64>) -> String {
    let years = match day {
        Some(d) => format!("{:.2}", days_to_years(d)),
        None => "null".to_string(),
    };
    format!(
        "{{\"mode\":\"simple\",\"periods\":{},\"tolerance\":{},\"max_days\":{},\"same_side\":{},\"years\":{}}}",
        periods(p),
        p.tolerance_deg,
        p.max_days,
        opt_day(day),
        years
    )
}

/// Format: {"mode":"dual",...,"same_side":D|null,"opposite_side":D|null,"days_scanned":N}
pub fn dual_record(p: &SearchParams, r: &DualResult) -> String {
    format!(
        "{{\"mode\":\"dual\",\"periods\":{},\"tolerance\":{},\"max_days\":{},\"same_side\":{},\"opposite_side\":{},\"days_scanned\":{}}}",
        periods(p),
        p.tolerance_deg,
        p.max_days,
        opt_day(r.same_side),
        opt_day(r.opposite_side),
        r.days_scanned
    )
}

/// Format: {"day":N,"positions":[a,b,c],"d12":x,"d23":y,"d31":z,"same_side":bool,"opposite_side":bool}
pub fn snapshot_record(s: &DaySnapshot) -> String {
    let [a, b, c] = s.positions;
    format!(
        "{{\"day\":{},\"positions\":[{a},{b},{c}],\"d12\":{},\"d23\":{},\"d31\":{},\"same_side\":{},\"opposite_side\":{}}}",
        s.day,
        s.separations.d12,
        s.separations.d23,
        s.separations.d31,
        s.alignment.same_side,
        s.alignment.opposite_side
    )
}
