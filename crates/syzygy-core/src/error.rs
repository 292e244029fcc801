use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyzygyError>;

#[derive(Debug, Error)]
pub enum SyzygyError {
    #[error("invalid period for {label} body: {period} (must be positive and finite)")]
    InvalidPeriod { label: &'static str, period: f64 },

    #[error("invalid tolerance: {0} (must be non-negative and finite)")]
    InvalidTolerance(f64),
}
