//! `random runtime display`

use mote_ir::{Span, Term, TermId};
use rand::Rng;

use super::{alloc_num, eval_number, exact, operands, Num};
use crate::errors::{type_mismatch, EvalError, EvalResult};
use crate::{Env, Interpreter};

/// Uniform value in `[0, n)`, integer or float following `n`.
pub(super) fn random(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    let [bound] = exact::<1>(interp, "random", list, span)?;
    let value = match eval_number(interp, env, "random", bound)? {
        Num::Int(n) if n > 0 => Num::Int(interp.rng().gen_range(0..n)),
        Num::Float(n) if n.is_finite() && n > 0.0 => {
            Num::Float(interp.rng().gen_range(0.0..n))
        }
        Num::Int(_) => return Err(non_positive(interp, bound, "a non-positive integer")),
        Num::Float(_) => return Err(non_positive(interp, bound, "a non-positive number")),
    };
    alloc_num(interp, value, span)
}

fn non_positive(interp: &Interpreter, bound: TermId, got: &'static str) -> EvalError {
    type_mismatch("random", "a positive number", got, interp.arena().span(bound))
}

/// Microseconds since the interpreter started.
pub(super) fn runtime(
    interp: &mut Interpreter,
    _env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    let [] = exact::<0>(interp, "runtime", list, span)?;
    let micros = i64::try_from(interp.started().elapsed().as_micros()).unwrap_or(i64::MAX);
    Ok(interp.arena_mut().alloc(Term::Integer(micros), span)?)
}

/// Print every operand, strings without quotes. Returns the last value.
pub(super) fn display(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    _span: Span,
) -> EvalResult<TermId> {
    let mut last = interp.arena().nil();
    for operand in operands(interp, list) {
        last = interp.eval_operand(env, operand)?;
        let text = interp.display(last).raw().to_string();
        interp.print_handler().print(&text);
    }
    Ok(last)
}
