//! Balance simulator CLI.
//!
//! Plays seeded runs with the autopilot and reports how they went.
//!
//! Usage:
//!   cargo run --bin idols-simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin idols-simulate                        # 1000 runs of vices
//!   cargo run --bin idols-simulate -- -n 100 -V idols     # 100 runs of idols
//!   cargo run --bin idols-simulate -- --seed 42 --json    # Reproducible, with JSON

use idols::error::GameError;
use idols::logging::init_stderr_logging;
use idols::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use std::str::FromStr;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let (config, write_json) = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Run 'idols-simulate --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    init_stderr_logging(config.verbosity.saturating_sub(1));

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              IDOLS BALANCE SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Variant:        {}", config.variant);
    println!("  Policy:         {}", config.policy);
    println!("  Choice Budget:  {}", config.choice_budget);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Simulation failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(err) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", err);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<(SimConfig, bool)>, GameError> {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut args = args.iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(arg, args.next())?;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(arg, args.next())?);
            }
            "-V" | "--variant" => {
                config.variant = parse_value(arg, args.next())?;
            }
            "-p" | "--policy" => {
                config.policy = parse_value(arg, args.next())?;
            }
            "-b" | "--budget" => {
                config.choice_budget = parse_value(arg, args.next())?;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {
                write_json = true;
            }
            "--quick" => {
                config = SimConfig::quick(config.variant);
            }
            "-h" | "--help" => return Ok(None),
            other => {
                return Err(GameError::Config(format!("unknown argument '{}'", other)));
            }
        }
    }

    Ok(Some((config, write_json)))
}

fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, GameError> {
    let value = value.ok_or_else(|| GameError::Config(format!("{} needs a value", flag)))?;
    value
        .parse()
        .map_err(|_| GameError::Config(format!("invalid value '{}' for {}", value, flag)))
}

fn print_help() {
    println!("Idols Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin idols-simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of runs (default: 1000)");
    println!("    -s, --seed <S>       Base seed; run i uses S + i");
    println!("    -V, --variant <V>    duel, idols or vices (default: vices)");
    println!("    -p, --policy <P>     fight or balanced (default: balanced)");
    println!("    -b, --budget <B>     Menu choices per run before forfeiting");
    println!("    -v, --verbose        One line per run, debug logging");
    println!("    -q, --quiet          Warnings only");
    println!("    --json               Save JSON report");
    println!("    --quick              100 runs with seed 42");
    println!("    -h, --help           Show this help");
}
