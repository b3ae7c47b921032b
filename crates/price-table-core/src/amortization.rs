//! French (Price table) amortization: constant periodic payment, declining
//! balance, each payment split into interest and principal.
//!
//! All arithmetic is `f64`. The engine never rounds to currency subunits;
//! rounding is a presentation concern.

use crate::types::{InstallmentRow, ScheduleResult};

/// Compute a fixed-installment amortization schedule.
///
/// Total function: invalid inputs (non-finite or non-positive principal,
/// zero periods, non-finite rate) yield [`ScheduleResult::empty`] rather
/// than an error, so callers can re-invoke it on every input change
/// without guarding. `periodic_rate_percent` is a percentage per period
/// (1 means 1%); it may be 0, in which case the installment degenerates
/// to straight-line principal division.
///
/// The final row's balance is forced to exactly `0.0`: accumulating
/// `period_count` floating-point subtractions of a repeating-decimal
/// payment essentially never lands on zero by itself, and the schedule
/// defines "fully amortized" as an exact-zero closing balance.
pub fn compute(principal: f64, period_count: u32, periodic_rate_percent: f64) -> ScheduleResult {
    if !principal.is_finite() || principal <= 0.0 || period_count == 0 {
        return ScheduleResult::empty();
    }
    if !periodic_rate_percent.is_finite() {
        return ScheduleResult::empty();
    }

    let i = periodic_rate_percent / 100.0;

    let pmt = if i == 0.0 {
        // Straight-line division; the annuity denominator would be zero.
        principal / period_count as f64
    } else {
        let growth = (1.0 + i).powi(period_count as i32);
        principal * (i * growth) / (growth - 1.0)
    };

    let mut schedule = Vec::with_capacity(period_count as usize);
    let mut balance = principal;
    let mut total_interest = 0.0;

    for number in 1..=period_count {
        let interest = balance * i;
        let amortization = pmt - interest;
        // Floor at zero: floating-point error in the final period can
        // otherwise leave a tiny negative residual.
        let new_balance = (balance - amortization).max(0.0);

        schedule.push(InstallmentRow {
            number,
            payment: pmt,
            interest,
            amortization,
            balance: new_balance,
        });

        total_interest += interest;
        balance = new_balance;
    }

    // Close the schedule at exactly zero regardless of accumulated drift.
    if let Some(last) = schedule.last_mut() {
        last.balance = 0.0;
    }

    ScheduleResult {
        schedule,
        total_interest,
        total_payment: pmt * period_count as f64,
        monthly_payment: pmt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn single_period_is_one_bullet_payment() {
        // pmt = principal * (1 + i) when there is a single period
        let result = compute(5000.0, 1, 2.0);
        assert_eq!(result.schedule.len(), 1);

        let row = &result.schedule[0];
        assert!((row.payment - 5100.0).abs() < TOL);
        assert!((row.interest - 100.0).abs() < TOL);
        assert!((row.amortization - 5000.0).abs() < TOL);
        assert_eq!(row.balance, 0.0);
    }

    #[test]
    fn zero_rate_divides_principal_evenly() {
        let result = compute(1200.0, 12, 0.0);
        assert_eq!(result.schedule.len(), 12);
        for row in &result.schedule {
            assert_eq!(row.payment, 100.0);
            assert_eq!(row.interest, 0.0);
            assert_eq!(row.amortization, 100.0);
        }
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_payment, 1200.0);
        assert_eq!(result.monthly_payment, 100.0);
    }

    #[test]
    fn zero_principal_yields_empty_result() {
        let result = compute(0.0, 12, 1.0);
        assert!(result.is_empty());
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_payment, 0.0);
        assert_eq!(result.monthly_payment, 0.0);
    }

    #[test]
    fn zero_periods_yields_empty_result() {
        assert!(compute(10000.0, 0, 1.0).is_empty());
    }

    #[test]
    fn non_finite_inputs_yield_empty_result() {
        assert!(compute(f64::NAN, 12, 1.0).is_empty());
        assert!(compute(f64::INFINITY, 12, 1.0).is_empty());
        assert!(compute(-10000.0, 12, 1.0).is_empty());
        assert!(compute(10000.0, 12, f64::NAN).is_empty());
        assert!(compute(10000.0, 12, f64::NEG_INFINITY).is_empty());
    }

    #[test]
    fn last_balance_is_exactly_zero_despite_drift() {
        // 1% monthly over 12 periods never sums to zero in raw f64
        let result = compute(10000.0, 12, 1.0);
        assert_eq!(result.schedule.last().unwrap().balance, 0.0);
    }

    #[test]
    fn interest_plus_amortization_reconstructs_payment() {
        let result = compute(25000.0, 48, 1.5);
        for row in &result.schedule {
            assert!((row.interest + row.amortization - row.payment).abs() < TOL);
        }
    }
}
