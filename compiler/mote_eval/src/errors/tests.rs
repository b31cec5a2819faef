use super::*;
use pretty_assertions::assert_eq;

#[test]
fn codes_follow_variant_order() {
    let span = Span::new(1, 2);
    let errors = [
        unbound_atom("x", span),
        not_callable("integer", span),
        arity_mismatch("f", 1, 2, span),
        malformed("let", "missing body", span),
        type_mismatch("+", "a number", "string", span),
        primitive_arity("if", "2 or 3 operands", 1, span),
        division_by_zero("/", span),
        integer_overflow("*", span),
    ];
    let codes: Vec<_> = errors.iter().map(|e| e.kind.error_code()).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::E6001,
            ErrorCode::E6002,
            ErrorCode::E6003,
            ErrorCode::E6004,
            ErrorCode::E6005,
            ErrorCode::E6006,
            ErrorCode::E6007,
            ErrorCode::E6008,
        ]
    );
}

#[test]
fn messages() {
    let span = Span::DUMMY;
    assert_eq!(unbound_atom("x", span).to_string(), "unbound atom `x`");
    assert_eq!(
        arity_mismatch("add1", 1, 3, span).to_string(),
        "`add1` takes 1 operand, got 3"
    );
    assert_eq!(
        arity_mismatch("add", 2, 0, span).to_string(),
        "`add` takes 2 operands, got 0"
    );
    assert_eq!(
        type_mismatch("+", "a number", "string", span).to_string(),
        "`+` expects a number, found string"
    );
    assert_eq!(
        malformed("lambda", "parameters must be atoms", span).to_string(),
        "malformed `lambda`: parameters must be atoms"
    );
}

#[test]
fn diagnostic_has_label_and_help() {
    let diag = unbound_atom("y", Span::new(10, 11)).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.primary_span(), Some(Span::new(10, 11)));
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn arena_errors_are_resource_errors() {
    let err = EvalError::from(ArenaError::Exhausted {
        pool: "terms",
        reserved: 4,
    });
    assert_eq!(err.kind.error_code(), ErrorCode::E9001);
    assert_eq!(err.span, Span::DUMMY);
    assert!(err.to_diagnostic().labels.is_empty());
}
