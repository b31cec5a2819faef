use super::*;
use pretty_assertions::assert_eq;

#[test]
fn codes_by_kind() {
    assert_eq!(LexErrorKind::UnterminatedString.error_code(), ErrorCode::E0001);
    assert_eq!(
        LexErrorKind::InvalidEscape { escape: 't' }.error_code(),
        ErrorCode::E0002
    );
    assert_eq!(LexErrorKind::IntegerOverflow.error_code(), ErrorCode::E0003);
    assert_eq!(
        LexErrorKind::Arena(ArenaError::Exhausted {
            pool: "string bytes",
            reserved: 0
        })
        .error_code(),
        ErrorCode::E9001
    );
}

#[test]
fn messages() {
    assert_eq!(
        LexErrorKind::InvalidEscape { escape: 't' }.to_string(),
        "invalid escape sequence `\\t`"
    );
    let err = LexError::new(Span::new(2, 5), LexErrorKind::UnterminatedString);
    assert_eq!(err.to_string(), "unterminated string literal at 2..5");
}

#[test]
fn unterminated_string_points_at_opening_quote() {
    let diag = LexError::new(Span::new(4, 10), LexErrorKind::UnterminatedString).to_diagnostic();
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.code, ErrorCode::E0001);
}
