mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use ringgit_loan_core::{CurrencyFormat, LoanCalcError};

use commands::amount::FormatAmountArgs;
use commands::car_loan::CarLoanArgs;
use commands::home_loan::HomeLoanArgs;

/// Malaysian car and home loan repayment estimates
#[derive(Parser)]
#[command(
    name = "rmloan",
    version,
    about = "Malaysian car and home loan repayment estimates",
    long_about = "Estimate monthly repayments for Malaysian hire-purchase car loans \
                  (flat rate) and home loans (fixed-rate EMI). Inputs are taken as \
                  typed text and validated the same way the loan forms do."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// JSON file overriding currency symbol and separators
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Flat-rate car loan (hire purchase) quote
    Car(CarLoanArgs),
    /// Fixed-rate EMI home loan quote
    Home(HomeLoanArgs),
    /// Show how the home loan amount field groups typed text
    FormatAmount(FormatAmountArgs),
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

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_format(path: Option<&str>) -> Result<CurrencyFormat, Box<dyn std::error::Error>> {
    match path {
        Some(p) => input::file::read_json(p),
        None => Ok(CurrencyFormat::default()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> =
        load_format(cli.config.as_deref()).and_then(|fmt| match cli.command {
            Commands::Car(args) => commands::car_loan::run_car_loan(args, &fmt),
            Commands::Home(args) => commands::home_loan::run_home_loan(args, &fmt),
            Commands::FormatAmount(args) => commands::amount::run_format_amount(args, &fmt),
            Commands::Version => {
                println!("rmloan {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
        });

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            match e.downcast_ref::<LoanCalcError>() {
                Some(LoanCalcError::Validation(errors)) => {
                    for (field, message) in errors.iter() {
                        eprintln!("{} {}: {}", "invalid".red().bold(), field, message);
                    }
                }
                _ => eprintln!("{}: {}", "error".red().bold(), e),
            }
            process::exit(1);
        }
    }
}
