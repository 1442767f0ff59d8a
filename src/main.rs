use std::io;
use std::process::ExitCode;

use idols::build_info;
use idols::config::{self, Command, GameConfig};
use idols::error::GameError;
use idols::logging;
use idols::session::{GameSession, RunOutcome};
use idols::ui::TerminalPresenter;

fn print_help() {
    println!("Idols - turn-based boss battles\n");
    println!("Usage: idols [options]\n");
    println!("Options:");
    println!("  --variant <name>  duel, idols or vices (default: vices)");
    println!("  --seed <n>        Seed the RNG for a reproducible run");
    println!("  --version         Show version information");
    println!("  --help            Show this help message");
    println!();
    println!("Environment: IDOLS_VARIANT, IDOLS_SEED, IDOLS_LOG_DIR, RUST_LOG");
}

fn play(config: &GameConfig) -> Result<RunOutcome, GameError> {
    let presenter = TerminalPresenter::new()?;
    let mut session = GameSession::new(config, presenter);
    session.run()
}

fn main() -> ExitCode {
    let args = std::env::args().skip(1);
    let command = match config::parse_args(args, GameConfig::from_env()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Run 'idols --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    let config = match command {
        Command::Version => {
            println!("{}", build_info::version_line());
            return ExitCode::SUCCESS;
        }
        Command::Help => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Command::Play(config) => config,
    };

    let log_dir = config.log_directory();
    if let Err(err) = logging::init_file_logging(&log_dir) {
        eprintln!("Logging disabled ({}): {}", log_dir.display(), err);
    }
    tracing::info!(variant = %config.variant, seed = ?config.seed, "starting");

    match play(&config) {
        Ok(outcome) => {
            tracing::info!(?outcome, "finished");
            ExitCode::SUCCESS
        }
        Err(GameError::Io(err)) if err.kind() == io::ErrorKind::Interrupted => {
            tracing::info!("interrupted");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "session aborted");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
