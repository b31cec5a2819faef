//! Tree-walking evaluator.
//!
//! `evaluate(env, term)` returns the value and the environment the *next*
//! form should see. Only `define` changes it; everything else hands back
//! the environment it was given.
//!
//! - `special_forms.rs`: `let`, `lambda`, `define`
//! - `apply.rs`: primitive dispatch and closure calls

mod apply;
mod special_forms;

use std::time::Instant;

use mote_ir::{Arena, Name, Span, Term, TermDisplay, TermId};
use mote_stack::ensure_sufficient_stack;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::{unbound_atom, EvalResult};
use crate::primitives::{PrimitiveTable, PRIMITIVES};
use crate::{Env, EvalConfig, SharedPrintHandler};

/// Evaluator state for one program run.
///
/// Owns the arena every term and environment node of the run lives in;
/// dropping the interpreter frees all of it at once.
pub struct Interpreter {
    arena: Arena,
    config: EvalConfig,
    print: SharedPrintHandler,
    rng: StdRng,
    started: Instant,
    /// Environment top-level forms are evaluated in.
    globals: Env,
}

impl Interpreter {
    /// Take ownership of `arena` and bind every primitive by name.
    pub fn new(mut arena: Arena, config: EvalConfig, print: SharedPrintHandler) -> EvalResult<Self> {
        let mut globals = Env::EMPTY;
        for (id, def) in PrimitiveTable::ids().zip(PRIMITIVES) {
            let name = arena.intern(def.name);
            let value = arena.alloc(Term::Primitive(id), Span::DUMMY)?;
            globals = globals.extend(&mut arena, name, value)?;
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Interpreter {
            arena,
            config,
            print,
            rng,
            started: Instant::now(),
            globals,
        })
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    #[inline]
    pub fn config(&self) -> EvalConfig {
        self.config
    }

    #[inline]
    pub fn globals(&self) -> Env {
        self.globals
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// When the interpreter was created.
    pub(crate) fn started(&self) -> Instant {
        self.started
    }

    /// Evaluate `term` in `env`.
    pub fn evaluate(&mut self, env: Env, term: TermId) -> EvalResult<(TermId, Env)> {
        ensure_sufficient_stack(|| self.eval_term(env, term))
    }

    /// Evaluate for the value alone, discarding any bindings it made.
    pub fn eval_operand(&mut self, env: Env, term: TermId) -> EvalResult<TermId> {
        self.evaluate(env, term).map(|(value, _)| value)
    }

    /// Evaluate one top-level form in the global environment, keeping
    /// whatever it defines for the forms after it.
    pub fn eval_top_level(&mut self, form: TermId) -> EvalResult<TermId> {
        let (value, globals) = self.evaluate(self.globals, form)?;
        self.globals = globals;
        Ok(value)
    }

    /// Printer for a term, resolving primitive names through the table.
    pub fn display(&self, term: TermId) -> TermDisplay<'_> {
        TermDisplay::new(&self.arena, &PrimitiveTable, term)
    }

    fn eval_term(&mut self, env: Env, term: TermId) -> EvalResult<(TermId, Env)> {
        match self.arena.get(term) {
            // Fresh copies: `-` negates its operand in place.
            Term::Str(_)
            | Term::Integer(_)
            | Term::Number(_)
            | Term::Primitive(_)
            | Term::Closure(_) => Ok((self.arena.copy_term(term)?, env)),
            Term::Nil => {
                let span = self.arena.span(term);
                Ok((self.arena.alloc_nil(span)?, env))
            }
            Term::Atom(name) => Ok((self.eval_atom(env, name, term)?, env)),
            Term::Cons { head, tail } => match self.arena.get(head) {
                Term::Atom(Name::LET) => self.eval_let(env, term, tail),
                Term::Atom(Name::LAMBDA) => self.eval_lambda(env, term, tail),
                Term::Atom(Name::DEFINE) => self.eval_define(env, term, tail),
                _ => self.apply(env, term, head, tail),
            },
        }
    }

    fn eval_atom(&mut self, env: Env, name: Name, term: TermId) -> EvalResult<TermId> {
        let span = self.arena.span(term);
        let Some(value) = env.lookup(&self.arena, name) else {
            return Err(unbound_atom(self.arena.name(name), span));
        };
        let copy = self.arena.copy_term(value)?;
        self.arena.set_span(copy, span);
        Ok(copy)
    }
}
