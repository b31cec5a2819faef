//! The primitive dispatch table.
//!
//! A primitive receives its operand list unevaluated and decides itself
//! which operands to evaluate and in what order. That is what lets `if`,
//! `cond`, `and` and `or` skip branches. The index of an entry in
//! [`PRIMITIVES`] is its stable [`PrimitiveId`].

mod arithmetic;
mod compare;
mod control;
mod io;
mod math;

use mote_ir::{PrimitiveId, PrimitiveNames, Span, Term, TermId};
use smallvec::SmallVec;

use crate::errors::{primitive_arity, type_mismatch, EvalResult};
use crate::{Env, Interpreter};

/// Signature every primitive implements: interpreter, calling environment,
/// raw operand list, span of the whole call.
pub type PrimitiveFn = fn(&mut Interpreter, Env, TermId, Span) -> EvalResult<TermId>;

/// One dispatch table entry.
pub struct PrimitiveDef {
    pub name: &'static str,
    pub func: PrimitiveFn,
}

impl PrimitiveDef {
    const fn new(name: &'static str, func: PrimitiveFn) -> Self {
        PrimitiveDef { name, func }
    }
}

/// All primitives, bound in this order at interpreter start.
pub static PRIMITIVES: &[PrimitiveDef] = &[
    PrimitiveDef::new("+", arithmetic::add),
    PrimitiveDef::new("-", arithmetic::subtract),
    PrimitiveDef::new("*", arithmetic::multiply),
    PrimitiveDef::new("/", arithmetic::divide),
    PrimitiveDef::new("<", compare::less_than),
    PrimitiveDef::new("=", compare::equal),
    PrimitiveDef::new(">", compare::greater_than),
    PrimitiveDef::new("cond", control::cond),
    PrimitiveDef::new("if", control::if_),
    PrimitiveDef::new("and", control::and),
    PrimitiveDef::new("or", control::or),
    PrimitiveDef::new("not", control::not),
    PrimitiveDef::new("random", io::random),
    PrimitiveDef::new("runtime", io::runtime),
    PrimitiveDef::new("display", io::display),
    PrimitiveDef::new("remainder", arithmetic::remainder),
    PrimitiveDef::new("sin", math::sin),
    PrimitiveDef::new("cos", math::cos),
    PrimitiveDef::new("log", math::log),
];

/// Name lookup over [`PRIMITIVES`], used by the term printer.
#[derive(Copy, Clone, Debug, Default)]
pub struct PrimitiveTable;

impl PrimitiveTable {
    /// Ids of every entry, in table order.
    pub fn ids() -> impl Iterator<Item = PrimitiveId> {
        (0u32..).map(PrimitiveId::new).take(PRIMITIVES.len())
    }

    pub fn lookup(name: &str) -> Option<PrimitiveId> {
        PRIMITIVES
            .iter()
            .position(|def| def.name == name)
            .and_then(|index| u32::try_from(index).ok())
            .map(PrimitiveId::new)
    }
}

impl PrimitiveNames for PrimitiveTable {
    fn primitive_name(&self, id: PrimitiveId) -> &str {
        PRIMITIVES.get(id.index()).map_or("unknown", |def| def.name)
    }
}

/// Operand terms of a call, unevaluated.
pub(crate) type Operands = SmallVec<[TermId; 4]>;

pub(crate) fn operands(interp: &Interpreter, list: TermId) -> Operands {
    interp.arena().list_iter(list).collect()
}

/// Operand list with exactly `N` elements.
pub(crate) fn exact<const N: usize>(
    interp: &Interpreter,
    primitive: &'static str,
    list: TermId,
    span: Span,
) -> EvalResult<[TermId; N]> {
    let ops = operands(interp, list);
    <[TermId; N]>::try_from(ops.as_slice())
        .map_err(|_| primitive_arity(primitive, arity_text(N), ops.len(), span))
}

fn arity_text(n: usize) -> &'static str {
    match n {
        0 => "no operands",
        1 => "exactly 1 operand",
        2 => "exactly 2 operands",
        _ => "a fixed number of operands",
    }
}

/// An evaluated numeric operand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    #[expect(
        clippy::cast_precision_loss,
        reason = "promotion to floating point is the language's numeric rule"
    )]
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
        }
    }

    pub(crate) fn to_term(self) -> Term {
        match self {
            Num::Int(i) => Term::Integer(i),
            Num::Float(f) => Term::Number(f),
        }
    }
}

/// Evaluate `operand` and require a number.
pub(crate) fn eval_number(
    interp: &mut Interpreter,
    env: Env,
    primitive: &'static str,
    operand: TermId,
) -> EvalResult<Num> {
    let value = interp.eval_operand(env, operand)?;
    match interp.arena().get(value) {
        Term::Integer(i) => Ok(Num::Int(i)),
        Term::Number(n) => Ok(Num::Float(n)),
        other => Err(type_mismatch(
            primitive,
            "a number",
            other.kind_name(),
            interp.arena().span(operand),
        )),
    }
}

pub(crate) fn alloc_num(interp: &mut Interpreter, num: Num, span: Span) -> EvalResult<TermId> {
    Ok(interp.arena_mut().alloc(num.to_term(), span)?)
}
