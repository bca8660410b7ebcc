use clap::{Parser, Subcommand};
use ip_address_compare::config::Config;
use ip_address_compare::output::OutputFormat;
use ip_address_compare::{compare_named, run_batch, verdict_exit_code, Family};
use std::error::Error;
use std::process::ExitCode;

/// Compare IPv4/IPv6 address specifications.
#[derive(Debug, Parser)]
#[command(name = "ip-address-compare")]
#[command(about = "Evaluate relational tests between address[/mask] specifications")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two specifications and print the verdict.
    Eval {
        /// Address family (`ipv4_address` or `ipv6_address`).
        family: Family,
        /// First `address[/mask]` specification.
        spec1: String,
        /// Operation name, e.g. "subset of".
        operation: String,
        /// Second `address[/mask]` specification.
        spec2: String,
    },
    /// Evaluate every case in a JSON case file.
    Batch {
        /// Path of the case file.
        #[arg(long)]
        cases: String,
        /// Output format (defaults to IPCMP_OUTPUT, then csv).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!("Logging disabled, can't load {}: {e}", config.log_config);
    }
    log::info!("#Start main()");

    let cli = Cli::parse();
    let default_format = config.output_format_or_default();
    match cli.command {
        Command::Eval {
            family,
            spec1,
            operation,
            spec2,
        } => {
            let verdict = compare_named(family, &spec1, &spec2, &operation);
            println!("{verdict}");
            Ok(ExitCode::from(verdict_exit_code(verdict)))
        }
        Command::Batch { cases, format } => {
            let summary = run_batch(&cases, format.unwrap_or(default_format))?;
            if summary.mismatched > 0 {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
