//! The three special forms. Their operands are syntax, not values, so they
//! are matched before application.

use mote_ir::{Closure, Name, Term, TermId};
use tracing::debug;

use super::Interpreter;
use crate::errors::{malformed, EvalResult};
use crate::Env;

impl Interpreter {
    /// `(let ((name expr) ...) body)`
    ///
    /// Every `expr` is evaluated in the outer environment, so bindings
    /// never see each other. The bindings are gone once `body` returns.
    pub(super) fn eval_let(
        &mut self,
        env: Env,
        form: TermId,
        rest: TermId,
    ) -> EvalResult<(TermId, Env)> {
        let span = self.arena.span(form);
        let Some((bindings, after)) = self.arena.uncons(rest) else {
            return Err(malformed("let", "missing binding list", span));
        };
        let Some((body, extra)) = self.arena.uncons(after) else {
            return Err(malformed("let", "missing body", span));
        };
        if !self.arena.is_nil(extra) {
            return Err(malformed(
                "let",
                "expected exactly one body term",
                self.arena.span(extra),
            ));
        }
        if !self.arena.get(bindings).is_list() {
            return Err(malformed(
                "let",
                "bindings must be a list",
                self.arena.span(bindings),
            ));
        }

        let mut scope = env;
        let mut cursor = bindings;
        while let Some((binding, next)) = self.arena.uncons(cursor) {
            let (name, expr) = self.let_binding(binding)?;
            let value = self.eval_operand(env, expr)?;
            scope = scope.extend(&mut self.arena, name, value)?;
            cursor = next;
        }

        let value = self.eval_operand(scope, body)?;
        Ok((value, env))
    }

    /// `(name expr)`
    fn let_binding(&self, binding: TermId) -> EvalResult<(Name, TermId)> {
        let span = self.arena.span(binding);
        let mut items = self.arena.list_iter(binding);
        let (Some(name), Some(expr), None) = (items.next(), items.next(), items.next()) else {
            return Err(malformed("let", "each binding must be `(name expr)`", span));
        };
        match self.arena.get(name) {
            Term::Atom(name) => Ok((name, expr)),
            _ => Err(malformed(
                "let",
                "binding name must be an atom",
                self.arena.span(name),
            )),
        }
    }

    /// `(lambda (params ...) body ...)`
    pub(super) fn eval_lambda(
        &mut self,
        env: Env,
        form: TermId,
        rest: TermId,
    ) -> EvalResult<(TermId, Env)> {
        let span = self.arena.span(form);
        let Some((params, body)) = self.arena.uncons(rest) else {
            return Err(malformed("lambda", "missing parameter list", span));
        };
        self.check_params("lambda", params)?;
        let closure = Closure {
            name: Name::LAMBDA,
            captured: env.head(),
            params,
            body,
        };
        Ok((self.arena.alloc(Term::Closure(closure), span)?, env))
    }

    /// `(define name expr)` or `(define (name params ...) body ...)`
    pub(super) fn eval_define(
        &mut self,
        env: Env,
        form: TermId,
        rest: TermId,
    ) -> EvalResult<(TermId, Env)> {
        let span = self.arena.span(form);
        let Some((target, rest)) = self.arena.uncons(rest) else {
            return Err(malformed("define", "missing name", span));
        };
        match self.arena.get(target) {
            Term::Atom(name) => {
                let Some((expr, extra)) = self.arena.uncons(rest) else {
                    return Err(malformed("define", "missing value", span));
                };
                if !self.arena.is_nil(extra) {
                    return Err(malformed(
                        "define",
                        "expected exactly one value",
                        self.arena.span(extra),
                    ));
                }
                let value = self.eval_operand(env, expr)?;
                self.bind_definition(env, name, value)
            }
            Term::Cons { head, tail } => {
                let Term::Atom(name) = self.arena.get(head) else {
                    return Err(malformed(
                        "define",
                        "procedure name must be an atom",
                        self.arena.span(head),
                    ));
                };
                self.check_params("define", tail)?;
                let closure = Closure {
                    name,
                    captured: env.head(),
                    params: tail,
                    body: rest,
                };
                let value = self.arena.alloc(Term::Closure(closure), span)?;
                self.bind_definition(env, name, value)
            }
            _ => Err(malformed(
                "define",
                "expected an atom or `(name params ...)`",
                self.arena.span(target),
            )),
        }
    }

    /// Prepend the binding. A closure value also gets the binding in front
    /// of its own captured chain so its body can call itself.
    fn bind_definition(
        &mut self,
        env: Env,
        name: Name,
        value: TermId,
    ) -> EvalResult<(TermId, Env)> {
        let extended = env.extend(&mut self.arena, name, value)?;
        if let Term::Closure(closure) = self.arena.get(value) {
            // A closure made elsewhere (say inside a `let`) keeps that scope.
            let captured = if closure.captured == env.head() {
                extended
            } else {
                Env::from_head(closure.captured).extend(&mut self.arena, name, value)?
            };
            if let Term::Closure(closure) = self.arena.get_mut(value) {
                closure.captured = captured.head();
            }
        }
        debug!(name = self.arena.name(name), "define");
        Ok((value, extended))
    }

    fn check_params(&self, form: &'static str, params: TermId) -> EvalResult<()> {
        if !self.arena.get(params).is_list() {
            return Err(malformed(
                form,
                "parameter list must be a list",
                self.arena.span(params),
            ));
        }
        match self
            .arena
            .list_iter(params)
            .find(|&param| !matches!(self.arena.get(param), Term::Atom(_)))
        {
            Some(bad) => Err(malformed(
                form,
                "parameters must be atoms",
                self.arena.span(bad),
            )),
            None => Ok(()),
        }
    }
}
