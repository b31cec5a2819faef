//! `sin cos log`

use mote_ir::{Span, TermId};

use super::{alloc_num, eval_number, exact, Num};
use crate::errors::EvalResult;
use crate::{Env, Interpreter};

fn unary(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
    name: &'static str,
    f: fn(f64) -> f64,
) -> EvalResult<TermId> {
    let [operand] = exact::<1>(interp, name, list, span)?;
    let x = eval_number(interp, env, name, operand)?.as_f64();
    alloc_num(interp, Num::Float(f(x)), span)
}

pub(super) fn sin(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    unary(interp, env, list, span, "sin", f64::sin)
}

pub(super) fn cos(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    unary(interp, env, list, span, "cos", f64::cos)
}

/// Natural logarithm.
pub(super) fn log(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    unary(interp, env, list, span, "log", f64::ln)
}
