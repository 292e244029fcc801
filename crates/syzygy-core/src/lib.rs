pub mod error;
pub mod validate;

pub mod align;
pub mod angle;
pub mod defaults;
pub mod search;

pub use crate::align::{opposite_side, same_side, Alignment, Separations};
pub use crate::angle::{angular_difference, Body};
pub use crate::error::{Result, SyzygyError};
pub use crate::search::{
    find_dual_days, find_same_side_day, snapshot, DaySnapshot, DualResult, SearchParams,
};
