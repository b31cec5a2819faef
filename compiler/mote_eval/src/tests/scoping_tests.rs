//! Closure call scopes under both scoping modes.

use pretty_assertions::assert_eq;

use super::Session;
use crate::{EvalConfig, EvalErrorKind, Scoping};

fn lexical() -> Session {
    Session::with_config(EvalConfig::default().with_scoping(Scoping::Lexical))
}

fn caller() -> Session {
    Session::with_config(EvalConfig::default().with_scoping(Scoping::CallerFallback))
}

const LATE_GLOBAL: &str = "(define (get-x) x) (define x 5) (get-x)";
const CALL_SITE_LET: &str = "(define (f) y) (let ((y 3)) (f))";
const MUTUAL: &str = "
(define (even? n) (if (= n 0) (not ()) (odd? (- n 1))))
(define (odd? n) (if (= n 0) () (even? (- n 1))))
(even? 10)";

#[test]
fn lexical_sees_only_the_definition_scope() {
    assert_eq!(
        lexical().eval(LATE_GLOBAL).unwrap_err().kind,
        EvalErrorKind::UnboundAtom { name: "x" }
    );
    assert_eq!(
        lexical().eval(CALL_SITE_LET).unwrap_err().kind,
        EvalErrorKind::UnboundAtom { name: "y" }
    );
    assert_eq!(
        lexical().eval(MUTUAL).unwrap_err().kind,
        EvalErrorKind::UnboundAtom { name: "odd?" }
    );
}

#[test]
fn caller_fallback_resolves_at_the_call_site() {
    assert_eq!(caller().eval(LATE_GLOBAL).unwrap(), "5");
    assert_eq!(caller().eval(CALL_SITE_LET).unwrap(), "3");
    assert_eq!(caller().eval(MUTUAL).unwrap(), "t");
}

#[test]
fn captured_bindings_win_over_the_caller() {
    let source = "
(define (make k) (lambda () k))
(define get (make 1))
(let ((k 2)) (get))";
    assert_eq!(lexical().eval(source).unwrap(), "1");
    assert_eq!(caller().eval(source).unwrap(), "1");
}

#[test]
fn parameters_win_over_captured_bindings() {
    let source = "(define n 10) (define (f n) n) (f 3)";
    assert_eq!(lexical().eval(source).unwrap(), "3");
    assert_eq!(caller().eval(source).unwrap(), "3");
}

#[test]
fn operands_are_evaluated_in_the_caller() {
    let source = "(define (f x) (let ((x 100)) x)) (let ((x 7)) (f (+ x 1)))";
    assert_eq!(lexical().eval(source).unwrap(), "100");
    let source = "(define (id v) v) (let ((z 7)) (id z))";
    assert_eq!(lexical().eval(source).unwrap(), "7");
    assert_eq!(caller().eval(source).unwrap(), "7");
}

#[test]
fn calls_do_not_leak_into_the_caller() {
    for mut session in [lexical(), caller()] {
        assert_eq!(
            session
                .eval_all("(define (f a) (define b a) b) (f 1)")
                .unwrap(),
            vec!["<f a>", "1"]
        );
        assert!(session.eval("a").is_err());
        assert!(session.eval("b").is_err());
    }
}
