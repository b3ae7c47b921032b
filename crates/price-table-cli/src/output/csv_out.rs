use std::io;

use price_table_core::types::ScheduleResult;

/// Write the schedule rows as CSV to stdout, raw engine precision.
pub fn print_csv(result: &ScheduleResult) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["number", "payment", "interest", "amortization", "balance"]);
    for row in &result.schedule {
        let _ = wtr.write_record([
            row.number.to_string(),
            row.payment.to_string(),
            row.interest.to_string(),
            row.amortization.to_string(),
            row.balance.to_string(),
        ]);
    }

    let _ = wtr.flush();
}
