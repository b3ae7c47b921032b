use serde::Serialize;

use price_table_core::types::{LoanInputs, ScheduleResult};

#[derive(Serialize)]
struct Envelope<'a> {
    inputs: &'a LoanInputs,
    result: &'a ScheduleResult,
}

/// Pretty-print the inputs and the raw (unrounded) schedule as JSON.
pub fn print_json(inputs: &LoanInputs, result: &ScheduleResult) {
    let envelope = Envelope { inputs, result };
    match serde_json::to_string_pretty(&envelope) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
