//! Evaluator configuration.

use std::fmt;
use std::str::FromStr;

/// How a closure call builds the scope its body runs in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Scoping {
    /// Captured environment plus parameter bindings, nothing else.
    #[default]
    Lexical,
    /// Duplicates of the captured nodes chained onto the caller's
    /// environment, so atoms the closure cannot resolve fall back to
    /// whatever is bound at the call site.
    CallerFallback,
}

impl Scoping {
    pub const fn as_str(self) -> &'static str {
        match self {
            Scoping::Lexical => "lexical",
            Scoping::CallerFallback => "caller",
        }
    }
}

impl fmt::Display for Scoping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error from parsing a [`Scoping`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownScoping(pub String);

impl fmt::Display for UnknownScoping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scoping mode `{}` (expected `lexical` or `caller`)",
            self.0
        )
    }
}

impl std::error::Error for UnknownScoping {}

impl FromStr for Scoping {
    type Err = UnknownScoping;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexical" => Ok(Scoping::Lexical),
            "caller" | "caller-fallback" => Ok(Scoping::CallerFallback),
            other => Err(UnknownScoping(other.to_owned())),
        }
    }
}

/// Evaluator settings fixed for the lifetime of an interpreter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    pub scoping: Scoping,
    /// Seed for `random`; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl EvalConfig {
    #[must_use]
    pub fn with_scoping(mut self, scoping: Scoping) -> Self {
        self.scoping = scoping;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests;
