//! Interest during construction (IDC).
//!
//! Construction expenditures are financed from the month they are paid
//! until the project enters service. Each payment accrues simple monthly
//! interest (`rate / 12`) for the months remaining in the construction
//! period after its payment instant.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When within its month a construction payment is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaymentTiming {
    /// Start of the month.
    Beginning,
    /// Middle of the month.
    #[default]
    Midpoint,
    /// End of the month.
    End,
    /// A label that is none of the above; accrues from the end of the month.
    Unrecognized,
}

impl PaymentTiming {
    /// Parse a timing label. Blank text means [`PaymentTiming::Midpoint`].
    ///
    /// ```
    /// use hydroecon_models::finance::PaymentTiming;
    ///
    /// assert_eq!(PaymentTiming::parse(" Beginning "), PaymentTiming::Beginning);
    /// assert_eq!(PaymentTiming::parse("middle"), PaymentTiming::Midpoint);
    /// assert_eq!(PaymentTiming::parse(""), PaymentTiming::Midpoint);
    /// assert_eq!(PaymentTiming::parse("quarterly"), PaymentTiming::Unrecognized);
    /// ```
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() {
            return PaymentTiming::Midpoint;
        }
        match label.to_lowercase().as_str() {
            "beginning" => PaymentTiming::Beginning,
            "middle" | "midpoint" => PaymentTiming::Midpoint,
            "end" => PaymentTiming::End,
            _ => PaymentTiming::Unrecognized,
        }
    }

    /// Fraction of the month elapsed at the payment instant.
    #[inline]
    pub fn month_offset(self) -> f64 {
        match self {
            PaymentTiming::Beginning => 0.0,
            PaymentTiming::Midpoint => 0.5,
            PaymentTiming::End | PaymentTiming::Unrecognized => 1.0,
        }
    }

    fn first_payment_offset(self) -> f64 {
        match self {
            PaymentTiming::End => 1.0,
            _ => 0.0,
        }
    }

    fn last_payment_offset(self) -> f64 {
        match self {
            PaymentTiming::Beginning => 0.0,
            PaymentTiming::End => 1.0,
            _ => 0.5,
        }
    }
}

impl From<&str> for PaymentTiming {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl fmt::Display for PaymentTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentTiming::Beginning => "beginning",
            PaymentTiming::Midpoint => "midpoint",
            PaymentTiming::End => "end",
            PaymentTiming::Unrecognized => "unrecognized",
        };
        f.write_str(label)
    }
}

/// Explicit construction expenditure schedule.
///
/// Timings and month indices may be shorter than the cost list; they are
/// normalised when the schedule is evaluated:
/// - a missing timing takes the evaluation's default timing
/// - with no month indices, entry `i` is paid in month `i`
/// - otherwise a missing index repeats the last supplied one
///
/// # Example
///
/// ```
/// use hydroecon_models::finance::{ExpenditureSchedule, PaymentTiming};
///
/// let schedule = ExpenditureSchedule::new(vec![600.0, 400.0])
///     .with_timings(vec![PaymentTiming::Beginning])
///     .with_month_indices(vec![0, 6]);
/// assert_eq!(schedule.costs(), &[600.0, 400.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExpenditureSchedule {
    costs: Vec<f64>,
    timings: Vec<PaymentTiming>,
    month_indices: Vec<i32>,
}

/// A schedule entry after normalisation and month clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScheduledPayment {
    cost: f64,
    month: i32,
    timing: PaymentTiming,
}

impl ScheduledPayment {
    #[inline]
    fn event_month(&self) -> f64 {
        self.month as f64 + self.timing.month_offset()
    }
}

impl ExpenditureSchedule {
    /// Creates a schedule from per-payment costs.
    pub fn new(costs: Vec<f64>) -> Self {
        Self {
            costs,
            timings: Vec::new(),
            month_indices: Vec::new(),
        }
    }

    /// Sets per-payment timings.
    pub fn with_timings(mut self, timings: Vec<PaymentTiming>) -> Self {
        self.timings = timings;
        self
    }

    /// Sets per-payment month indices (0-based).
    pub fn with_month_indices(mut self, month_indices: Vec<i32>) -> Self {
        self.month_indices = month_indices;
        self
    }

    /// Returns the payment costs.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Returns true if the schedule has no payments.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    fn payments(&self, months: i32, default_timing: PaymentTiming) -> Vec<ScheduledPayment> {
        self.costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| {
                let timing = self.timings.get(i).copied().unwrap_or(default_timing);
                let month = match self.month_indices.last() {
                    None => i as i32,
                    Some(&last) => self.month_indices.get(i).copied().unwrap_or(last),
                };
                ScheduledPayment {
                    cost,
                    month: clamp_month(month, months),
                    timing,
                }
            })
            .collect()
    }
}

fn clamp_month(month: i32, months: i32) -> i32 {
    if month < 0 || months <= 0 {
        0
    } else if month >= months {
        months - 1
    } else {
        month
    }
}

fn even_spread(total_initial_cost: f64, months: i32, timing_for: impl Fn(i32) -> PaymentTiming) -> Vec<ScheduledPayment> {
    let monthly = total_initial_cost / months as f64;
    (0..months)
        .map(|month| ScheduledPayment {
            cost: monthly,
            month,
            timing: timing_for(month),
        })
        .collect()
}

fn resolve_payments(
    total_initial_cost: f64,
    months: i32,
    schedule: Option<&ExpenditureSchedule>,
    default_timing: PaymentTiming,
    spread_timing: impl Fn(i32) -> PaymentTiming,
) -> Vec<ScheduledPayment> {
    match schedule {
        Some(schedule) if !schedule.is_empty() => schedule.payments(months, default_timing),
        _ => even_spread(total_initial_cost, months, spread_timing),
    }
}

/// Interest during construction with month-by-month accrual.
///
/// Without a schedule (or with an empty one) `total_initial_cost` is spread
/// evenly over `months` payments: the first at the beginning of month 0 and
/// the rest at each month's midpoint. Each payment accrues
/// `cost · rate/12 · max(0, months − (month + offset))`.
///
/// Returns 0 when `months <= 0`.
///
/// # Examples
///
/// ```
/// use hydroecon_models::finance::interest_during_construction::compute;
///
/// assert_eq!(compute(1_000_000.0, 0.05, 0, None), 0.0);
///
/// // Two months: 500 at t=0 accrues 2 months, 500 at t=1.5 accrues 0.5
/// let idc = compute(1000.0, 0.12, 2, None);
/// assert!((idc - (500.0 * 0.01 * 2.0 + 500.0 * 0.01 * 0.5)).abs() < 1e-9);
/// ```
pub fn compute(
    total_initial_cost: f64,
    rate: f64,
    months: i32,
    schedule: Option<&ExpenditureSchedule>,
) -> f64 {
    if months <= 0 {
        return 0.0;
    }

    let monthly_rate = rate / 12.0;
    let payments = resolve_payments(
        total_initial_cost,
        months,
        schedule,
        PaymentTiming::Midpoint,
        |month| {
            if month == 0 {
                PaymentTiming::Beginning
            } else {
                PaymentTiming::Midpoint
            }
        },
    );

    let total = months as f64;
    payments
        .iter()
        .map(|p| p.cost * monthly_rate * (total - p.event_month()).max(0.0))
        .sum()
}

/// Interest during construction accrued to a payment-period boundary.
///
/// Payments default to the beginning of their month. The earliest payment
/// is re-timed by `first_payment` (end of month or beginning), and interest
/// on every payment runs until the later of the last payment and the final
/// construction month plus the `last_payment` offset (beginning 0, end 1,
/// otherwise 0.5).
///
/// Returns 0 when `months <= 0`.
pub fn compute_period_based(
    total_initial_cost: f64,
    rate: f64,
    months: i32,
    schedule: Option<&ExpenditureSchedule>,
    first_payment: PaymentTiming,
    last_payment: PaymentTiming,
) -> f64 {
    if months <= 0 {
        return 0.0;
    }

    let payments = resolve_payments(
        total_initial_cost,
        months,
        schedule,
        PaymentTiming::Beginning,
        |_| PaymentTiming::Beginning,
    );
    if payments.is_empty() {
        return 0.0;
    }

    let mut events: Vec<f64> = payments.iter().map(ScheduledPayment::event_month).collect();

    let mut first = 0;
    let mut last = 0;
    for (i, &event) in events.iter().enumerate().skip(1) {
        if event < events[first] {
            first = i;
        }
        if event > events[last] {
            last = i;
        }
    }

    events[first] = payments[first].month as f64 + first_payment.first_payment_offset();

    let final_month = payments[last].month.max(months - 1);
    let boundary = events[last].max(final_month as f64 + last_payment.last_payment_offset());

    let monthly_rate = rate / 12.0;
    payments
        .iter()
        .zip(events.iter())
        .map(|(p, &event)| p.cost * monthly_rate * (boundary - event).max(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_zero_or_negative_months_is_zero() {
        assert_eq!(compute(5_000.0, 0.07, 0, None), 0.0);
        assert_eq!(compute(5_000.0, 0.07, -4, None), 0.0);
        assert_eq!(
            compute_period_based(5_000.0, 0.07, 0, None, PaymentTiming::End, PaymentTiming::End),
            0.0
        );
    }

    #[test]
    fn test_default_spread_twelve_months() {
        // 1000/month; month 0 at beginning accrues 12, month m accrues 11.5 - m
        let idc = compute(12_000.0, 0.12, 12, None);
        let expected_months: f64 = 12.0 + (1..12).map(|m| 11.5 - m as f64).sum::<f64>();
        assert_relative_eq!(idc, 1000.0 * 0.01 * expected_months, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_zero() {
        assert_eq!(compute(12_000.0, 0.0, 12, None), 0.0);
    }

    #[test]
    fn test_empty_schedule_falls_back_to_spread() {
        let empty = ExpenditureSchedule::default();
        assert_eq!(
            compute(12_000.0, 0.06, 12, Some(&empty)),
            compute(12_000.0, 0.06, 12, None)
        );
    }

    #[test]
    fn test_explicit_schedule_defaults() {
        // No timings (midpoint) and no month indices (sequential)
        let schedule = ExpenditureSchedule::new(vec![100.0, 100.0]);
        let idc = compute(0.0, 0.12, 4, Some(&schedule));
        let expected = 100.0 * 0.01 * 3.5 + 100.0 * 0.01 * 2.5;
        assert_relative_eq!(idc, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_month_indices_repeat_last() {
        let schedule = ExpenditureSchedule::new(vec![100.0, 100.0, 100.0])
            .with_timings(vec![PaymentTiming::Beginning; 3])
            .with_month_indices(vec![2]);
        let payments = schedule.payments(6, PaymentTiming::Midpoint);
        assert!(payments.iter().all(|p| p.month == 2));
        let idc = compute(0.0, 0.12, 6, Some(&schedule));
        assert_relative_eq!(idc, 3.0 * 100.0 * 0.01 * 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_month_indices_are_clamped() {
        let schedule = ExpenditureSchedule::new(vec![100.0, 100.0])
            .with_timings(vec![PaymentTiming::End, PaymentTiming::End])
            .with_month_indices(vec![-3, 40]);
        let payments = schedule.payments(6, PaymentTiming::Midpoint);
        assert_eq!(payments[0].month, 0);
        assert_eq!(payments[1].month, 5);
        // End of month 5 leaves nothing remaining
        let idc = compute(0.0, 0.12, 6, Some(&schedule));
        assert_relative_eq!(idc, 100.0 * 0.01 * 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unrecognized_timing_accrues_from_month_end() {
        let unknown = ExpenditureSchedule::new(vec![100.0]).with_timings(vec![PaymentTiming::parse("weekly")]);
        let end = ExpenditureSchedule::new(vec![100.0]).with_timings(vec![PaymentTiming::End]);
        assert_eq!(compute(0.0, 0.1, 3, Some(&unknown)), compute(0.0, 0.1, 3, Some(&end)));
    }

    #[test]
    fn test_timing_display_and_from() {
        assert_eq!(PaymentTiming::from("END"), PaymentTiming::End);
        assert_eq!(PaymentTiming::Midpoint.to_string(), "midpoint");
        assert_eq!(PaymentTiming::default(), PaymentTiming::Midpoint);
    }

    #[test]
    fn test_period_based_single_payment() {
        // One payment at month 0, re-timed to the beginning; boundary is
        // month 11 midpoint = 11.5
        let schedule = ExpenditureSchedule::new(vec![1200.0]);
        let idc = compute_period_based(
            0.0,
            0.12,
            12,
            Some(&schedule),
            PaymentTiming::Beginning,
            PaymentTiming::Midpoint,
        );
        assert_relative_eq!(idc, 1200.0 * 0.01 * 11.5, epsilon = 1e-9);
    }

    #[test]
    fn test_period_based_first_payment_at_end() {
        let spread_beginning =
            compute_period_based(1200.0, 0.12, 12, None, PaymentTiming::Beginning, PaymentTiming::End);
        let spread_end = compute_period_based(1200.0, 0.12, 12, None, PaymentTiming::End, PaymentTiming::End);
        // Moving the first payment one month later removes one month of interest on it
        assert_relative_eq!(spread_beginning - spread_end, 100.0 * 0.01, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn test_idc_non_negative(cost in 0.0f64..1e8, rate in 0.0f64..0.2, months in 1i32..120) {
            prop_assert!(compute(cost, rate, months, None) >= 0.0);
        }
    }
}
