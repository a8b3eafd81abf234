//! Day-of-year values on a fixed 365-day calendar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar day in the range [1, 365].
///
/// Construction always clamps, so a `DayOfYear` can never hold an
/// out-of-range value regardless of how far a season is shifted.
///
/// # Examples
///
/// ```
/// use hydroecon_core::types::DayOfYear;
///
/// assert_eq!(DayOfYear::clamped(0).get(), 1);
/// assert_eq!(DayOfYear::clamped(120).get(), 120);
/// assert_eq!(DayOfYear::clamped(120).shifted(-500).get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct DayOfYear(u16);

impl DayOfYear {
    /// First day of the calendar.
    pub const FIRST: DayOfYear = DayOfYear(1);

    /// Last day of the calendar.
    pub const LAST: DayOfYear = DayOfYear(365);

    /// Clamps an arbitrary day number into [1, 365].
    #[inline]
    pub fn clamped(day: i64) -> Self {
        Self(day.clamp(Self::FIRST.0 as i64, Self::LAST.0 as i64) as u16)
    }

    /// Returns the day number.
    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Adds a signed offset, clamping the result.
    #[inline]
    pub fn shifted(self, days: i32) -> Self {
        Self::clamped(self.0 as i64 + days as i64)
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}

impl From<i64> for DayOfYear {
    fn from(day: i64) -> Self {
        Self::clamped(day)
    }
}

impl From<DayOfYear> for i64 {
    fn from(day: DayOfYear) -> Self {
        day.0 as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamped_bounds() {
        assert_eq!(DayOfYear::clamped(-10).get(), 1);
        assert_eq!(DayOfYear::clamped(1).get(), 1);
        assert_eq!(DayOfYear::clamped(365).get(), 365);
        assert_eq!(DayOfYear::clamped(366).get(), 365);
    }

    #[test]
    fn test_shifted_positive_and_negative() {
        let day = DayOfYear::clamped(100);
        assert_eq!(day.shifted(18).get(), 118);
        assert_eq!(day.shifted(-18).get(), 82);
    }

    #[test]
    fn test_shift_extremes_do_not_overflow() {
        assert_eq!(DayOfYear::LAST.shifted(i32::MAX), DayOfYear::LAST);
        assert_eq!(DayOfYear::FIRST.shifted(i32::MIN), DayOfYear::FIRST);
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(DayOfYear::clamped(10) < DayOfYear::clamped(11));
        assert_eq!(DayOfYear::clamped(42).to_string(), "day 42");
        assert_eq!(i64::from(DayOfYear::clamped(42)), 42);
    }

    proptest! {
        #[test]
        fn test_shifted_stays_in_calendar(start in -1000i64..1000, shift in any::<i32>()) {
            let day = DayOfYear::clamped(start).shifted(shift).get();
            prop_assert!((1..=365).contains(&day));
        }
    }
}
