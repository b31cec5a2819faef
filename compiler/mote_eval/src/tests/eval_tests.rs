use mote_ir::{Arena, PrimitiveId, Span, Term};
use pretty_assertions::assert_eq;

use super::{eval, eval_err, Session};
use crate::{Env, EvalErrorKind, PrimitiveTable, PRIMITIVES};

#[test]
fn literals_evaluate_to_themselves() {
    assert_eq!(eval("42"), "42");
    assert_eq!(eval("-7"), "-7");
    assert_eq!(eval("2.5"), "2.5");
    assert_eq!(eval(r#""a\nb""#), r#""a\nb""#);
    assert_eq!(eval("()"), "()");
}

#[test]
fn literal_evaluation_copies() {
    let mut session = Session::new();
    session.eval("1").unwrap();
    let interp = &mut session.interp;
    let (literal, _) = mote_parse::parse(interp.arena_mut(), "5", 0).unwrap();
    let value = interp.eval_operand(Env::EMPTY, literal).unwrap();
    assert_ne!(value, literal);
    assert_eq!(interp.arena().get(value), Term::Integer(5));
}

#[test]
fn primitives_are_bound_by_name() {
    assert_eq!(eval("+"), "<primitive_+>");
    assert_eq!(eval("remainder"), "<primitive_remainder>");
    assert_eq!(PrimitiveTable::ids().count(), PRIMITIVES.len());
    assert_eq!(PrimitiveTable::lookup("display"), Some(PrimitiveId::new(14)));
    assert_eq!(PrimitiveTable::lookup("car"), None);
}

#[test]
fn unbound_atom_reports_its_span() {
    let err = Session::new().eval("(+ x 1)").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::UnboundAtom { name: "x" });
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn t_is_an_ordinary_atom() {
    assert_eq!(eval_err("t"), EvalErrorKind::UnboundAtom { name: "t" });
    assert_eq!(eval("(define t 1) t"), "1");
}

#[test]
fn let_shadows_and_restores() {
    assert_eq!(eval("(let ((x 1)) (let ((x 2)) x))"), "2");
    assert_eq!(eval("(let ((x 1)) (let ((y 2)) x))"), "1");
    let mut session = Session::new();
    assert_eq!(
        session.eval_all("(define x 1) (let ((x 2)) x) x").unwrap(),
        vec!["1", "2", "1"]
    );
}

#[test]
fn let_bindings_are_parallel() {
    assert_eq!(
        eval_err("(let ((x 1) (y x)) y)"),
        EvalErrorKind::UnboundAtom { name: "x" }
    );
    assert_eq!(eval("(define x 10) (let ((x 1) (y x)) y)"), "10");
}

#[test]
fn let_with_no_bindings() {
    assert_eq!(eval("(let () 3)"), "3");
}

#[test]
fn malformed_let() {
    for source in [
        "(let)",
        "(let ((x 1)))",
        "(let ((x 1)) x x)",
        "(let ((x)) x)",
        "(let ((1 2)) 1)",
        "(let x x)",
    ] {
        assert!(
            matches!(
                eval_err(source),
                EvalErrorKind::MalformedForm { form: "let", .. }
            ),
            "{source}"
        );
    }
}

#[test]
fn lambda_prints_as_closure() {
    assert_eq!(eval("(lambda (x y) x)"), "<lambda x y>");
    assert_eq!(eval("((lambda (x y) (+ x y)) 1 2)"), "3");
    assert_eq!(eval("((lambda () 7))"), "7");
}

#[test]
fn empty_body_returns_nil() {
    assert_eq!(eval("((lambda ()))"), "()");
}

#[test]
fn malformed_lambda() {
    assert!(matches!(
        eval_err("(lambda (x 1) x)"),
        EvalErrorKind::MalformedForm { form: "lambda", .. }
    ));
    assert!(matches!(
        eval_err("(lambda)"),
        EvalErrorKind::MalformedForm { form: "lambda", .. }
    ));
    assert!(matches!(
        eval_err("(lambda x x)"),
        EvalErrorKind::MalformedForm { form: "lambda", .. }
    ));
}

#[test]
fn define_threads_into_later_forms() {
    let mut session = Session::new();
    assert_eq!(session.eval_all("(define x 1) x").unwrap(), vec!["1", "1"]);
    assert_eq!(session.eval("(+ x 1)").unwrap(), "2");
    let globals = session.interp().globals();
    assert_eq!(globals.len(session.interp().arena()), PRIMITIVES.len() + 1);
}

#[test]
fn define_procedure() {
    assert_eq!(eval("(define (add a b) (+ a b))"), "<add a b>");
    assert_eq!(eval("(define (add a b) (+ a b)) (add 2 3)"), "5");
}

#[test]
fn define_redefines_by_shadowing() {
    assert_eq!(eval("(define x 1) (define x 2) x"), "2");
}

#[test]
fn malformed_define() {
    for source in ["(define)", "(define x)", "(define x 1 2)", "(define 1 2)", "(define (1) 2)"] {
        assert!(
            matches!(
                eval_err(source),
                EvalErrorKind::MalformedForm { form: "define", .. }
            ),
            "{source}"
        );
    }
}

#[test]
fn closure_captures_let_scope() {
    assert_eq!(
        eval("(define (make-adder n) (lambda (x) (+ x n))) ((make-adder 5) 10)"),
        "15"
    );
    assert_eq!(
        eval("(define f (let ((k 3)) (lambda (x) (* x k)))) (f 4)"),
        "12"
    );
}

#[test]
fn defined_closure_keeps_its_scope_and_sees_itself() {
    assert_eq!(
        eval("(define down (let ((step 1)) (lambda (n) (if (< n 1) 0 (down (- n step)))))) (down 3)"),
        "0"
    );
}

#[test]
fn recursion() {
    assert_eq!(
        eval("(define (fact n) (if (< n 1) 1 (* n (fact (- n 1))))) (fact 5)"),
        "120"
    );
    assert_eq!(
        eval("(define fib (lambda (n) (if (< n 2) n (+ (fib (- n 1)) (fib (- n 2)))))) (fib 15)"),
        "610"
    );
}

#[test]
fn body_defines_thread_but_do_not_leak() {
    let mut session = Session::new();
    assert_eq!(
        session
            .eval("(define (f) (define y 2) (+ y 1)) (f)")
            .unwrap(),
        "3"
    );
    assert_eq!(
        session.eval("y").unwrap_err().kind,
        EvalErrorKind::UnboundAtom { name: "y" }
    );
}

#[test]
fn body_runs_in_order() {
    let mut session = Session::new();
    assert_eq!(
        session
            .eval(r#"((lambda () (display "a") (display "b") 3))"#)
            .unwrap(),
        "3"
    );
    assert_eq!(session.output(), "ab");
}

#[test]
fn arity_is_checked_before_operands_run() {
    let mut session = Session::new();
    let err = session
        .eval(r#"(define (one x) x) (one (display "no") 2)"#)
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "one",
            expected: 1,
            got: 2
        }
    );
    assert_eq!(session.output(), "");
}

#[test]
fn only_primitives_and_closures_apply() {
    assert_eq!(eval_err("(1 2)"), EvalErrorKind::NotCallable { found: "integer" });
    assert_eq!(eval_err("(())"), EvalErrorKind::NotCallable { found: "nil" });
    assert_eq!(
        eval_err(r#"("f")"#),
        EvalErrorKind::NotCallable { found: "string" }
    );
}

#[test]
fn operator_position_is_evaluated() {
    assert_eq!(eval("((if (< 1 2) + *) 3 4)"), "7");
}

#[test]
fn errors_stop_at_the_failing_form() {
    let mut session = Session::new();
    assert!(session.eval_all("(define a 1) (+ a b) (define c 3)").is_err());
    assert_eq!(session.eval("a").unwrap(), "1");
    assert!(session.eval("c").is_err());
}

#[test]
fn deep_recursion_grows_the_stack() {
    assert_eq!(
        eval("(define (count n) (if (= n 0) 0 (+ 1 (count (- n 1))))) (count 10000)"),
        "10000"
    );
}

#[test]
fn arena_exhaustion_is_an_error() {
    use mote_ir::{ArenaConfig, ArenaError};

    let arena = Arena::with_config(ArenaConfig {
        term_capacity: 4096,
        ..ArenaConfig::default()
    });
    let mut session = Session::with_arena(arena, crate::EvalConfig::default());
    let err = session
        .eval("(define (spin n) (spin (+ n 1))) (spin 0)")
        .unwrap_err();
    assert!(matches!(
        err.kind,
        EvalErrorKind::Arena(ArenaError::Exhausted { pool: "terms", .. })
    ));
}
