use super::*;
use mote_ir::ArenaConfig;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut arena = Arena::new();
    Tokens::new(&mut arena, source)
        .map(|t| t.unwrap().kind)
        .collect()
}

fn lex_one(source: &str) -> Result<TokenKind, LexError> {
    let mut arena = Arena::new();
    lex(&mut arena, source, 0).map(|(t, _)| t.kind)
}

fn lex_string(source: &str) -> Vec<u8> {
    let mut arena = Arena::new();
    let (token, _) = lex(&mut arena, source, 0).unwrap();
    match token.kind {
        TokenKind::Str(s) => arena.str_bytes(s).to_vec(),
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn returns_rest_offset() {
    let mut arena = Arena::new();
    let source = "  (foo 12)";
    let (open, rest) = lex(&mut arena, source, 0).unwrap();
    assert_eq!(open.kind, TokenKind::LParen);
    assert_eq!(open.span, Span::new(2, 3));
    assert_eq!(rest, 3);

    let (atom, rest) = lex(&mut arena, source, rest).unwrap();
    assert_eq!(atom.kind, TokenKind::Atom);
    assert_eq!(atom.text, "foo");
    assert_eq!(rest, 6);
}

#[test]
fn end_of_input() {
    let mut arena = Arena::new();
    let (token, rest) = lex(&mut arena, "  ; only a comment", 0).unwrap();
    assert_eq!(token.kind, TokenKind::End);
    assert_eq!(token.text, "");
    assert_eq!(rest, 18);
}

#[test]
fn token_sequence() {
    assert_eq!(
        kinds("(+ 1 -2 2.5)"),
        vec![
            TokenKind::LParen,
            TokenKind::Atom,
            TokenKind::Integer(1),
            TokenKind::Integer(-2),
            TokenKind::Number(2.5),
            TokenKind::RParen,
        ]
    );
}

#[test]
fn decimals() {
    assert_eq!(lex_one("3.25"), Ok(TokenKind::Number(3.25)));
    assert_eq!(lex_one("-0.5"), Ok(TokenKind::Number(-0.5)));
    assert_eq!(lex_one("7."), Ok(TokenKind::Number(7.0)));
}

#[test]
fn integer_limits() {
    assert_eq!(lex_one("9223372036854775807"), Ok(TokenKind::Integer(i64::MAX)));
    assert_eq!(lex_one("-9223372036854775808"), Ok(TokenKind::Integer(i64::MIN)));
    assert_eq!(
        lex_one("9223372036854775808"),
        Err(LexError::new(Span::new(0, 19), LexErrorKind::IntegerOverflow))
    );
    assert_eq!(
        lex_one("99999999999999999999.5").map_err(|e| e.kind),
        Err(LexErrorKind::IntegerOverflow)
    );
}

#[test]
fn string_escapes_are_decoded() {
    assert_eq!(lex_string(r#""plain""#), b"plain");
    assert_eq!(lex_string(r#""a\nb""#), b"a\nb");
    assert_eq!(lex_string(r#""back\\slash""#), b"back\\slash");
    assert_eq!(lex_string(r#""""#), b"");
    assert_eq!(lex_string("\"line\nbreak\""), b"line\nbreak");
}

#[test]
fn invalid_escape() {
    assert_eq!(
        lex_one(r#"  "a\tb""#),
        Err(LexError::new(
            Span::new(4, 6),
            LexErrorKind::InvalidEscape { escape: 't' }
        ))
    );
    assert_eq!(
        lex_one(r#""\"""#).map_err(|e| e.kind),
        Err(LexErrorKind::InvalidEscape { escape: '"' })
    );
}

#[test]
fn unterminated_string() {
    assert_eq!(
        lex_one("\"abc"),
        Err(LexError::new(Span::new(0, 4), LexErrorKind::UnterminatedString))
    );
}

#[test]
fn string_region_exhaustion_is_an_error() {
    let mut arena = Arena::with_config(ArenaConfig {
        string_capacity: 2,
        ..ArenaConfig::default()
    });
    let err = lex(&mut arena, "\"abc\"", 0).unwrap_err();
    assert!(matches!(err.kind, LexErrorKind::Arena(_)));
}

#[test]
fn tokens_stop_after_error() {
    let mut arena = Arena::new();
    let results: Vec<_> = Tokens::new(&mut arena, "a \"oops").collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

#[test]
fn skip_blanks_handles_stacked_comments() {
    assert_eq!(skip_blanks("; a\n; b\n\n  x", 0), 11);
    assert_eq!(skip_blanks("x", 0), 0);
    assert_eq!(skip_blanks("   ", 0), 3);
}

proptest! {
    #[test]
    fn integers_lex_to_themselves(n in any::<i64>()) {
        prop_assert_eq!(lex_one(&n.to_string()), Ok(TokenKind::Integer(n)));
    }

    #[test]
    fn atoms_lex_whole(atom in "[a-z+*/<>=?!][a-z0-9+*/<>=?!-]{0,12}") {
        let mut arena = Arena::new();
        let (token, rest) = lex(&mut arena, &atom, 0).unwrap();
        prop_assert_eq!(token.kind, TokenKind::Atom);
        prop_assert_eq!(token.text, atom.as_str());
        prop_assert_eq!(rest as usize, atom.len());
    }
}
