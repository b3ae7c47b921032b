use chrono::Local;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use price_table_core::amortization;

use super::schedule::{self, ScheduleArgs, DEFAULT_PERIODIC_RATE};
use crate::report;

/// Arguments for report generation
#[derive(Args)]
pub struct ReportArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount financed
    #[arg(long)]
    pub principal: Option<f64>,

    /// Number of payment periods
    #[arg(long)]
    pub periods: Option<u32>,

    /// Interest rate per period, as a percentage (1 = 1% per period)
    #[arg(long, default_value_t = DEFAULT_PERIODIC_RATE)]
    pub rate: f64,

    /// Client name, used for the report header and file name
    #[arg(long, default_value = "")]
    pub client: String,

    /// Directory to write the report into
    #[arg(long, default_value = ".")]
    pub dir: String,
}

pub fn run_report(args: ReportArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let inputs = schedule::resolve_inputs(ScheduleArgs {
        input: args.input,
        principal: args.principal,
        periods: args.periods,
        rate: args.rate,
        client: args.client,
    })?;

    let result = amortization::compute(inputs.principal, inputs.period_count, inputs.periodic_rate);
    let document = report::render(&inputs, &result, Local::now().date_naive());

    let path = Path::new(&args.dir).join(report::file_name(&inputs.client_name));
    fs::write(&path, document)
        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    Ok(path)
}
