//! Runtime configuration: defaults, then environment, then command line.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::core::Variant;
use crate::error::GameError;

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(GameConfig),
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub variant: Variant,
    /// Seed for the shared RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Where the log file goes. `None` uses the platform data directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seed: None,
            log_dir: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by environment variables.
    ///
    /// Environment variables:
    /// - `IDOLS_VARIANT` - `duel`, `idols` or `vices`
    /// - `IDOLS_SEED` - RNG seed
    /// - `IDOLS_LOG_DIR` - log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(variant) = read_env::<Variant>("IDOLS_VARIANT") {
            config.variant = variant;
        }
        if let Some(seed) = read_env::<u64>("IDOLS_SEED") {
            config.seed = Some(seed);
        }
        if let Some(dir) = read_env::<PathBuf>("IDOLS_LOG_DIR") {
            config.log_dir = Some(dir);
        }

        config
    }

    /// Resolved log directory.
    pub fn log_directory(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        ProjectDirs::from("", "", "idols")
            .map(|dirs| dirs.data_dir().join("logs"))
            .unwrap_or_else(|| env::temp_dir().join("idols").join("logs"))
    }
}

/// Parses the command line on top of `base`.
pub fn parse_args<I>(args: I, base: GameConfig) -> Result<Command, GameError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = base;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--variant" => {
                let value = args
                    .next()
                    .ok_or_else(|| GameError::Config("--variant needs a value".into()))?;
                config.variant = value.parse().map_err(GameError::Config)?;
            }
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| GameError::Config("--seed needs a value".into()))?;
                let seed = value
                    .parse()
                    .map_err(|_| GameError::Config(format!("invalid seed '{}'", value)))?;
                config.seed = Some(seed);
            }
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            other => {
                return Err(GameError::Config(format!("unknown argument '{}'", other)));
            }
        }
    }

    Ok(Command::Play(config))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
