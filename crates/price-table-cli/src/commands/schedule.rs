use clap::Args;

use price_table_core::amortization;
use price_table_core::types::{LoanInputs, ScheduleResult};

use crate::input;

/// Reference policy rate: 1% per period, as presented by the original
/// calculator. Overridable; the engine takes any rate.
pub const DEFAULT_PERIODIC_RATE: f64 = 1.0;

/// Arguments for schedule computation
#[derive(Args)]
pub struct ScheduleArgs {
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

    /// Client name, used only to label reports
    #[arg(long, default_value = "")]
    pub client: String,
}

pub fn run_schedule(
    args: ScheduleArgs,
) -> Result<(LoanInputs, ScheduleResult), Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(args)?;
    let result = amortization::compute(inputs.principal, inputs.period_count, inputs.periodic_rate);
    Ok((inputs, result))
}

/// Build `LoanInputs` from a JSON file, piped stdin, or explicit flags,
/// in that order. Flag-built inputs are validated loudly: a bad flag is a
/// typo, not a transient editing state. File and stdin inputs flow through
/// unvalidated and degrade to an empty schedule, like the engine's own
/// live-preview callers.
pub(crate) fn resolve_inputs(args: ScheduleArgs) -> Result<LoanInputs, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(inputs) = input::stdin::read_stdin()? {
        return Ok(inputs);
    }

    let principal = args
        .principal
        .ok_or("--principal is required (or provide --input)")?;
    let period_count = args
        .periods
        .ok_or("--periods is required (or provide --input)")?;

    let inputs = LoanInputs {
        client_name: args.client,
        principal,
        period_count,
        periodic_rate: args.rate,
    };
    inputs.validate()?;
    Ok(inputs)
}
