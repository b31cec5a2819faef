//! Whole-program execution.

use std::fmt;

use mote_diagnostic::{Diagnostic, ErrorCode};
use mote_eval::{EvalError, Interpreter, SharedPrintHandler};
use mote_ir::Arena;
use mote_parse::{parse_next, ParseError};

use crate::RunConfig;

/// Why a program stopped early.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    Parse(ParseError),
    Eval(EvalError),
    /// Source offsets are 32-bit.
    SourceTooLarge { len: usize },
}

impl RunError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RunError::Parse(err) => err.to_diagnostic(),
            RunError::Eval(err) => err.to_diagnostic(),
            RunError::SourceTooLarge { len } => Diagnostic::error(ErrorCode::E9001)
                .with_message(format!("source is {len} bytes, the limit is {}", u32::MAX)),
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Parse(err) => write!(f, "{err}"),
            RunError::Eval(err) => write!(f, "{err}"),
            RunError::SourceTooLarge { len } => {
                write!(f, "source is {len} bytes, the limit is {}", u32::MAX)
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<ParseError> for RunError {
    fn from(err: ParseError) -> Self {
        RunError::Parse(err)
    }
}

impl From<EvalError> for RunError {
    fn from(err: EvalError) -> Self {
        RunError::Eval(err)
    }
}

/// Parse and evaluate `source` one top-level form at a time.
///
/// Each form is echoed as `> form` followed by its printed result. Output
/// of forms before a failing one has already been written when this
/// returns an error.
pub fn run_source(
    source: &str,
    config: &RunConfig,
    output: &SharedPrintHandler,
) -> Result<(), RunError> {
    if u32::try_from(source.len()).is_err() {
        return Err(RunError::SourceTooLarge { len: source.len() });
    }

    let arena = Arena::with_config(config.arena);
    let mut interp = Interpreter::new(arena, config.eval, output.clone())?;
    let mut pos = 0;
    while let Some((form, rest)) = parse_next(interp.arena_mut(), source, pos)? {
        output.println(&format!("> {}", interp.display(form)));
        let value = interp.eval_top_level(form)?;
        output.println(&interp.display(value).to_string());
        pos = rest;
    }
    tracing::debug!(stats = ?interp.arena().stats(), "run finished");
    Ok(())
}
