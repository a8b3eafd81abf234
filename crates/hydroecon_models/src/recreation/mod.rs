//! Recreation benefits by the unit day value method.

mod error;
mod udv;

pub use error::UdvError;
pub use udv::{compute_benefit, PointValueRow, RecreationColumn, UnitDayValueTable};
