use serde::{Deserialize, Serialize};

use crate::error::PriceTableError;
use crate::PriceTableResult;

/// Contract terms as collected from the caller.
///
/// `client_name` labels reports only; the engine never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    #[serde(default)]
    pub client_name: String,
    /// Amount financed. Must be finite and > 0 for a non-empty schedule.
    pub principal: f64,
    /// Number of payment periods.
    pub period_count: u32,
    /// Interest rate per period, as a percentage (1 means 1% per period).
    pub periodic_rate: f64,
}

impl LoanInputs {
    /// Strict check for callers that want to reject bad inputs loudly
    /// (e.g. explicit CLI flags). The engine itself never errors; it
    /// degrades to an empty schedule instead.
    pub fn validate(&self) -> PriceTableResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(PriceTableError::InvalidInput {
                field: "principal".into(),
                reason: "must be a finite amount greater than zero".into(),
            });
        }
        if self.period_count == 0 {
            return Err(PriceTableError::InvalidInput {
                field: "period_count".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !self.periodic_rate.is_finite() {
            return Err(PriceTableError::InvalidInput {
                field: "periodic_rate".into(),
                reason: "must be a finite percentage".into(),
            });
        }
        Ok(())
    }
}

/// One period of the schedule, 1-indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentRow {
    pub number: u32,
    /// Constant installment (PMT); identical in every row.
    pub payment: f64,
    /// Interest portion: balance before this period times the periodic rate.
    pub interest: f64,
    /// Principal portion: payment minus interest.
    pub amortization: f64,
    /// Outstanding principal after this period's payment.
    pub balance: f64,
}

/// Full amortization schedule with aggregate figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub schedule: Vec<InstallmentRow>,
    pub total_interest: f64,
    pub total_payment: f64,
    pub monthly_payment: f64,
}

impl ScheduleResult {
    /// The empty result returned for invalid inputs.
    pub fn empty() -> Self {
        ScheduleResult {
            schedule: Vec::new(),
            total_interest: 0.0,
            total_payment: 0.0,
            monthly_payment: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}
