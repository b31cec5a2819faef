//! Application of primitives and closures.

use mote_ir::{Closure, EnvNode, Span, Term, TermId};
use smallvec::SmallVec;
use tracing::trace;

use super::Interpreter;
use crate::errors::{arity_mismatch, malformed, not_callable, EvalResult};
use crate::primitives::PRIMITIVES;
use crate::{Env, Scoping};

impl Interpreter {
    /// `(operator operands ...)`. Operands are passed unevaluated.
    pub(super) fn apply(
        &mut self,
        env: Env,
        form: TermId,
        operator: TermId,
        operands: TermId,
    ) -> EvalResult<(TermId, Env)> {
        let span = self.arena.span(form);
        let callee = self.eval_operand(env, operator)?;
        let callee_term = self.arena.get(callee);
        let value = match callee_term {
            Term::Primitive(id) => {
                let Some(def) = PRIMITIVES.get(id.index()) else {
                    return Err(not_callable("primitive", self.arena.span(operator)));
                };
                trace!(primitive = def.name, "dispatch");
                (def.func)(self, env, operands, span)?
            }
            Term::Closure(closure) => self.call_closure(env, closure, operands, span)?,
            _ => {
                return Err(not_callable(
                    callee_term.kind_name(),
                    self.arena.span(operator),
                ))
            }
        };
        Ok((value, env))
    }

    /// Bind parameters to the operands (evaluated in the caller's
    /// environment), then run the body statements in order, threading the
    /// environment from one to the next.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(name = self.arena.name(closure.name))
    )]
    fn call_closure(
        &mut self,
        caller: Env,
        closure: Closure,
        operands: TermId,
        span: Span,
    ) -> EvalResult<TermId> {
        let expected = self.arena.list_len(closure.params);
        let got = self.arena.list_len(operands);
        if expected != got {
            return Err(arity_mismatch(
                self.arena.name(closure.name),
                expected,
                got,
                span,
            ));
        }

        let captured = Env::from_head(closure.captured);
        let mut scope = match self.config.scoping {
            Scoping::Lexical => captured,
            Scoping::CallerFallback => self.chain_onto(captured, caller)?,
        };

        let mut params = closure.params;
        let mut args = operands;
        while let (Some((param, next_param)), Some((arg, next_arg))) =
            (self.arena.uncons(params), self.arena.uncons(args))
        {
            let Term::Atom(name) = self.arena.get(param) else {
                return Err(malformed(
                    "lambda",
                    "parameters must be atoms",
                    self.arena.span(param),
                ));
            };
            let value = self.eval_operand(caller, arg)?;
            scope = scope.extend(&mut self.arena, name, value)?;
            params = next_param;
            args = next_arg;
        }

        let mut result = self.arena.nil();
        let mut body = closure.body;
        while let Some((statement, next)) = self.arena.uncons(body) {
            let (value, env) = self.evaluate(scope, statement)?;
            result = value;
            scope = env;
            body = next;
        }
        Ok(result)
    }

    /// Duplicate every node of `captured`, keeping their order, in front of
    /// `base`.
    fn chain_onto(&mut self, captured: Env, base: Env) -> EvalResult<Env> {
        let nodes: SmallVec<[EnvNode; 16]> = captured.bindings(&self.arena).collect();
        let mut env = base;
        for node in nodes.into_iter().rev() {
            env = env.extend(&mut self.arena, node.name, node.value)?;
        }
        Ok(env)
    }
}
