//! `+ - * / remainder`
//!
//! Integer arithmetic is checked. As soon as one operand is a number the
//! running value becomes an `f64` and stays one.

use mote_ir::{Span, Term, TermId};

use super::{alloc_num, eval_number, exact, operands, Num};
use crate::errors::{
    division_by_zero, integer_overflow, primitive_arity, type_mismatch, EvalResult,
};
use crate::{Env, Interpreter};

#[derive(Copy, Clone, Debug)]
enum IntFault {
    Overflow,
    ZeroDivisor,
}

/// A binary arithmetic operator in both representations.
struct Arith {
    name: &'static str,
    /// Seed for the fold; `None` means the first operand seeds it.
    identity: Option<Num>,
    int: fn(i64, i64) -> Result<i64, IntFault>,
    float: fn(f64, f64) -> f64,
}

const ADD: Arith = Arith {
    name: "+",
    identity: Some(Num::Int(0)),
    int: checked_add,
    float: |a, b| a + b,
};

const SUB: Arith = Arith {
    name: "-",
    identity: None,
    int: checked_sub,
    float: |a, b| a - b,
};

const MUL: Arith = Arith {
    name: "*",
    identity: Some(Num::Int(1)),
    int: checked_mul,
    float: |a, b| a * b,
};

const DIV: Arith = Arith {
    name: "/",
    identity: None,
    int: checked_div,
    float: |a, b| a / b,
};

const REM: Arith = Arith {
    name: "remainder",
    identity: None,
    int: checked_rem,
    float: |a, b| a % b,
};

impl Arith {
    fn combine(&self, lhs: Num, rhs: Num, span: Span) -> EvalResult<Num> {
        match (lhs, rhs) {
            (Num::Int(a), Num::Int(b)) => {
                (self.int)(a, b)
                    .map(Num::Int)
                    .map_err(|fault| match fault {
                        IntFault::Overflow => integer_overflow(self.name, span),
                        IntFault::ZeroDivisor => division_by_zero(self.name, span),
                    })
            }
            (a, b) => Ok(Num::Float((self.float)(a.as_f64(), b.as_f64()))),
        }
    }

    /// Left fold over the evaluated operands. Without an identity at least
    /// one operand is required.
    fn fold(
        &self,
        interp: &mut Interpreter,
        env: Env,
        list: TermId,
        span: Span,
    ) -> EvalResult<Num> {
        let mut rest = operands(interp, list).into_iter();
        let mut acc = match self.identity {
            Some(identity) => identity,
            None => {
                let Some(first) = rest.next() else {
                    return Err(primitive_arity(self.name, "at least 1 operand", 0, span));
                };
                eval_number(interp, env, self.name, first)?
            }
        };
        for operand in rest {
            let value = eval_number(interp, env, self.name, operand)?;
            acc = self.combine(acc, value, span)?;
        }
        Ok(acc)
    }

    fn eval(
        &self,
        interp: &mut Interpreter,
        env: Env,
        list: TermId,
        span: Span,
    ) -> EvalResult<TermId> {
        let result = self.fold(interp, env, list, span)?;
        alloc_num(interp, result, span)
    }
}

fn checked_add(a: i64, b: i64) -> Result<i64, IntFault> {
    a.checked_add(b).ok_or(IntFault::Overflow)
}

fn checked_sub(a: i64, b: i64) -> Result<i64, IntFault> {
    a.checked_sub(b).ok_or(IntFault::Overflow)
}

fn checked_mul(a: i64, b: i64) -> Result<i64, IntFault> {
    a.checked_mul(b).ok_or(IntFault::Overflow)
}

fn checked_div(a: i64, b: i64) -> Result<i64, IntFault> {
    if b == 0 {
        return Err(IntFault::ZeroDivisor);
    }
    a.checked_div(b).ok_or(IntFault::Overflow)
}

fn checked_rem(a: i64, b: i64) -> Result<i64, IntFault> {
    if b == 0 {
        return Err(IntFault::ZeroDivisor);
    }
    a.checked_rem(b).ok_or(IntFault::Overflow)
}

pub(super) fn add(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    ADD.eval(interp, env, list, span)
}

pub(super) fn multiply(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    MUL.eval(interp, env, list, span)
}

/// One operand negates it in place; more subtract left to right.
pub(super) fn subtract(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    let ops = operands(interp, list);
    let [single] = ops[..] else {
        return SUB.eval(interp, env, list, span);
    };

    let value = interp.eval_operand(env, single)?;
    let arena = interp.arena_mut();
    match arena.get_mut(value) {
        Term::Integer(i) => match i.checked_neg() {
            Some(negated) => *i = negated,
            None => return Err(integer_overflow("-", span)),
        },
        Term::Number(n) => *n = -*n,
        other => {
            let got = other.kind_name();
            return Err(type_mismatch("-", "a number", got, arena.span(single)));
        }
    }
    Ok(value)
}

pub(super) fn divide(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    DIV.eval(interp, env, list, span)
}

/// Exactly two operands. Integers take the sign of the dividend; floats
/// use `fmod`.
pub(super) fn remainder(
    interp: &mut Interpreter,
    env: Env,
    list: TermId,
    span: Span,
) -> EvalResult<TermId> {
    let [a, b] = exact::<2>(interp, REM.name, list, span)?;
    let a = eval_number(interp, env, REM.name, a)?;
    let b = eval_number(interp, env, REM.name, b)?;
    let rem = REM.combine(a, b, span)?;
    alloc_num(interp, rem, span)
}
