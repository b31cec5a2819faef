//! Evaluator tests, driven through source text.

mod compare_tests;
mod eval_tests;
mod scoping_tests;

use mote_ir::Arena;
use mote_parse::parse_next;

use crate::{buffer_handler, EvalConfig, EvalErrorKind, EvalResult, Interpreter, SharedPrintHandler};

/// An interpreter with captured output.
pub(crate) struct Session {
    interp: Interpreter,
    output: SharedPrintHandler,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::with_config(EvalConfig::default().with_seed(42))
    }

    pub(crate) fn with_config(config: EvalConfig) -> Self {
        Self::with_arena(Arena::new(), config)
    }

    pub(crate) fn with_arena(arena: Arena, config: EvalConfig) -> Self {
        let output = buffer_handler();
        let interp = Interpreter::new(arena, config, output.clone()).unwrap();
        Session { interp, output }
    }

    /// Evaluate every form, returning each printed result.
    pub(crate) fn eval_all(&mut self, source: &str) -> EvalResult<Vec<String>> {
        let mut results = Vec::new();
        let mut pos = 0;
        while let Some((form, rest)) = parse_next(self.interp.arena_mut(), source, pos).unwrap() {
            let value = self.interp.eval_top_level(form)?;
            results.push(self.interp.display(value).to_string());
            pos = rest;
        }
        Ok(results)
    }

    /// Printed result of the last form.
    pub(crate) fn eval(&mut self, source: &str) -> EvalResult<String> {
        Ok(self.eval_all(source)?.pop().unwrap_or_default())
    }

    pub(crate) fn output(&self) -> String {
        self.output.get_output()
    }

    pub(crate) fn interp(&self) -> &Interpreter {
        &self.interp
    }
}

/// Printed result of the last form of `source`.
pub(crate) fn eval(source: &str) -> String {
    Session::new().eval(source).unwrap()
}

/// The error `source` fails with.
pub(crate) fn eval_err(source: &str) -> EvalErrorKind {
    Session::new().eval(source).unwrap_err().kind
}
