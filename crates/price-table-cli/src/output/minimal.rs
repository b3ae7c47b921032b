use price_table_core::types::ScheduleResult;

/// Print just the key answer: the constant installment amount
/// (`0` for an empty schedule).
pub fn print_minimal(result: &ScheduleResult) {
    println!("{}", result.monthly_payment);
}
