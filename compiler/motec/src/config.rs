//! Run settings from the environment and command-line flags.
//!
//! Environment variables supply defaults; flags override them.
//!
//! | Variable              | Flag              | Setting                    |
//! |-----------------------|-------------------|----------------------------|
//! | `MOTE_SCOPING`        | `--scoping=<m>`   | `lexical` or `caller`      |
//! | `MOTE_SEED`           | `--seed=<n>`      | seed for `random`          |
//! | `MOTE_ARENA_CAPACITY` | -                 | string bytes to reserve    |

use std::fmt;

use mote_eval::{EvalConfig, Scoping, UnknownScoping};
use mote_ir::ArenaConfig;

/// Everything needed to set up one program run.
#[derive(Copy, Clone, Debug, Default)]
pub struct RunConfig {
    pub eval: EvalConfig,
    pub arena: ArenaConfig,
}

/// A setting that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    Scoping(UnknownScoping),
    InvalidNumber { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Scoping(err) => write!(f, "{err}"),
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key}: expected a non-negative integer, got `{value}`")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<UnknownScoping> for ConfigError {
    fn from(err: UnknownScoping) -> Self {
        ConfigError::Scoping(err)
    }
}

impl RunConfig {
    /// Defaults overridden by `MOTE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = RunConfig::default();
        if let Some(value) = var("MOTE_SCOPING") {
            config.eval.scoping = value.parse()?;
        }
        if let Some(value) = var("MOTE_SEED") {
            config.eval.seed = Some(parse_number("MOTE_SEED", &value)?);
        }
        if let Some(value) = var("MOTE_ARENA_CAPACITY") {
            config.arena.string_capacity = parse_number("MOTE_ARENA_CAPACITY", &value)?;
        }
        Ok(config)
    }

    /// Apply a `--scoping=` or `--seed=` flag. Returns `false` for any
    /// other argument.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, ConfigError> {
        if let Some(value) = arg.strip_prefix("--scoping=") {
            self.eval.scoping = value.parse::<Scoping>()?;
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            self.eval.seed = Some(parse_number("--seed", value)?);
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_owned(),
        })
}
