mod commands;
mod input;
mod output;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::report::ReportArgs;
use commands::schedule::ScheduleArgs;

/// Price table (French amortization) loan calculator
#[derive(Parser)]
#[command(
    name = "price",
    version,
    about = "Price table (French amortization) loan calculator",
    long_about = "Computes fixed-installment loan schedules under the French \
                  amortization method: constant periodic payment, declining \
                  balance, each payment split into interest and principal. \
                  Renders the schedule on screen or as a printable report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute an amortization schedule and print it
    Schedule(ScheduleArgs),
    /// Generate a printable schedule report and write it to disk
    Report(ReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule(args) => match commands::schedule::run_schedule(args) {
            Ok((inputs, result)) => {
                output::render(&cli.output, &inputs, &result);
                process::exit(0);
            }
            Err(e) => fail(e),
        },
        Commands::Report(args) => match commands::report::run_report(args) {
            Ok(path) => {
                println!("{}", path.display());
                process::exit(0);
            }
            Err(e) => fail(e),
        },
        Commands::Version => {
            println!("price {}", env!("CARGO_PKG_VERSION"));
        }
    }
}

fn fail(e: Box<dyn std::error::Error>) -> ! {
    eprintln!("{}: {}", "error".red().bold(), e);
    process::exit(1);
}
