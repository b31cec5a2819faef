//! `< = >`

use std::cmp::Ordering;

use mote_ir::{Name, Span, Term, TermId};

use super::{eval_number, exact, Num};
use crate::errors::{type_mismatch, EvalResult};
use crate::{Env, Interpreter};

/// Two integers compare exactly; anything mixed compares as `f64`.
fn compare(a: Num, b: Num) -> Option<Ordering> {
    match (a, b) {
        (Num::Int(a), Num::Int(b)) => Some(a.cmp(&b)),
        (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
    }
}

fn ordering(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
    primitive: &'static str,
    wanted: Ordering,
) -> EvalResult<TermId> {
    let [a, b] = exact::<2>(interp, primitive, list, span)?;
    let a = eval_number(interp, env, primitive, a)?;
    let b = eval_number(interp, env, primitive, b)?;
    Ok(interp.arena().truth(compare(a, b) == Some(wanted)))
}

pub(super) fn less_than(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    ordering(interp, env, list, span, "<", Ordering::Less)
}

pub(super) fn greater_than(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    ordering(interp, env, list, span, ">", Ordering::Greater)
}

/// Numbers compare numerically and atoms by name. A number never equals
/// an atom.
pub(super) fn equal(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    let [a, b] = exact::<2>(interp, "=", list, span)?;
    let a = eval_comparable(interp, env, a)?;
    let b = eval_comparable(interp, env, b)?;
    let same = match (a, b) {
        (Comparable::Num(a), Comparable::Num(b)) => compare(a, b) == Some(Ordering::Equal),
        (Comparable::Atom(a), Comparable::Atom(b)) => a == b,
        _ => false,
    };
    Ok(interp.arena().truth(same))
}

#[derive(Copy, Clone)]
enum Comparable {
    Num(Num),
    Atom(Name),
}

fn eval_comparable(interp: &mut Interpreter, env: Env, operand: TermId) -> EvalResult<Comparable> {
    let value = interp.eval_operand(env, operand)?;
    match interp.arena().get(value) {
        Term::Integer(i) => Ok(Comparable::Num(Num::Int(i))),
        Term::Number(n) => Ok(Comparable::Num(Num::Float(n))),
        Term::Atom(name) => Ok(Comparable::Atom(name)),
        other => Err(type_mismatch(
            "=",
            "a number or atom",
            other.kind_name(),
            interp.arena().span(operand),
        )),
    }
}
