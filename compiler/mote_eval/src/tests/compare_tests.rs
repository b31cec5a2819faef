use pretty_assertions::assert_eq;

use super::{eval, eval_err};
use crate::EvalErrorKind;

#[test]
fn ordering() {
    assert_eq!(eval("(< 1 2)"), "t");
    assert_eq!(eval("(< 2 1)"), "()");
    assert_eq!(eval("(> 2.5 2)"), "t");
    assert_eq!(eval("(> 2 2)"), "()");
    assert_eq!(eval("(< -1 0.5)"), "t");
}

#[test]
fn equality_is_numeric() {
    assert_eq!(eval("(= 1 1)"), "t");
    assert_eq!(eval("(= 1 1.0)"), "t");
    assert_eq!(eval("(= 1 2)"), "()");
}

#[test]
fn equality_of_atoms() {
    assert_eq!(eval("(= (< 1 2) (> 2 1))"), "t");
    assert_eq!(eval("(define a (< 1 2)) (= a 1)"), "()");
}

#[test]
fn equality_rejects_other_kinds() {
    assert_eq!(
        eval_err(r#"(= "a" "a")"#),
        EvalErrorKind::TypeMismatch {
            primitive: "=",
            expected: "a number or atom",
            got: "string"
        }
    );
}

#[test]
fn comparisons_take_two_operands() {
    assert!(matches!(
        eval_err("(< 1)"),
        EvalErrorKind::PrimitiveArity { primitive: "<", got: 1, .. }
    ));
    assert!(matches!(
        eval_err("(= 1 2 3)"),
        EvalErrorKind::PrimitiveArity { primitive: "=", got: 3, .. }
    ));
}

#[test]
fn ordering_rejects_non_numbers() {
    assert!(matches!(
        eval_err("(< () 1)"),
        EvalErrorKind::TypeMismatch { primitive: "<", got: "nil", .. }
    ));
}
