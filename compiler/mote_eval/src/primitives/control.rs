//! `cond if and or not`
//!
//! These evaluate only the operands they need.

use mote_ir::{Span, TermId};

use super::{exact, operands};
use crate::errors::{malformed, primitive_arity, EvalResult};
use crate::{Env, Interpreter};

/// `(cond (test expr) ...)`: value of the first clause whose test is
/// non-nil, or nil.
pub(super) fn cond(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    _span: Span,
) -> EvalResult<TermId> {
    for clause in operands(interp, list) {
        let mut parts = interp.arena().list_iter(clause);
        let (Some(test), Some(expr)) = (parts.next(), parts.next()) else {
            return Err(malformed(
                "cond",
                "each clause must be `(test expr)`",
                interp.arena().span(clause),
            ));
        };
        let value = interp.eval_operand(env, test)?;
        if !interp.arena().is_nil(value) {
            return interp.eval_operand(env, expr);
        }
    }
    Ok(interp.arena().nil())
}

/// `(if test then [else])`
pub(super) fn if_(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    let ops = operands(interp, list);
    let (test, then, otherwise) = match ops[..] {
        [test, then] => (test, then, None),
        [test, then, otherwise] => (test, then, Some(otherwise)),
        _ => return Err(primitive_arity("if", "2 or 3 operands", ops.len(), span)),
    };
    let value = interp.eval_operand(env, test)?;
    if !interp.arena().is_nil(value) {
        interp.eval_operand(env, then)
    } else if let Some(otherwise) = otherwise {
        interp.eval_operand(env, otherwise)
    } else {
        Ok(interp.arena().nil())
    }
}

/// Nil at the first nil operand, otherwise the last value. `(and)` is `t`.
pub(super) fn and(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    _span: Span,
) -> EvalResult<TermId> {
    let mut last = interp.arena().t();
    for operand in operands(interp, list) {
        last = interp.eval_operand(env, operand)?;
        if interp.arena().is_nil(last) {
            return Ok(last);
        }
    }
    Ok(last)
}

/// First non-nil value, or nil.
pub(super) fn or(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    _span: Span,
) -> EvalResult<TermId> {
    for operand in operands(interp, list) {
        let value = interp.eval_operand(env, operand)?;
        if !interp.arena().is_nil(value) {
            return Ok(value);
        }
    }
    Ok(interp.arena().nil())
}

pub(super) fn not(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    let [operand] = exact::<1>(interp, "not", list, span)?;
    let value = interp.eval_operand(env, operand)?;
    let arena = interp.arena();
    Ok(arena.truth(arena.is_nil(value)))
}
