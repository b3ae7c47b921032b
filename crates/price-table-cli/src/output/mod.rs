pub mod csv_out;
pub mod currency;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use price_table_core::types::{LoanInputs, ScheduleResult};

/// Dispatch output to the appropriate formatter.
pub fn render(format: &OutputFormat, inputs: &LoanInputs, result: &ScheduleResult) {
    match format {
        OutputFormat::Json => json::print_json(inputs, result),
        OutputFormat::Table => table::print_table(inputs, result),
        OutputFormat::Csv => csv_out::print_csv(result),
        OutputFormat::Minimal => minimal::print_minimal(result),
    }
}
