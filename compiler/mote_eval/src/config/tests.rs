use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_is_lexical_and_unseeded() {
    let config = EvalConfig::default();
    assert_eq!(config.scoping, Scoping::Lexical);
    assert_eq!(config.seed, None);
}

#[test]
fn scoping_from_str() {
    assert_eq!("lexical".parse(), Ok(Scoping::Lexical));
    assert_eq!("caller".parse(), Ok(Scoping::CallerFallback));
    assert_eq!(
        "dynamic".parse::<Scoping>(),
        Err(UnknownScoping("dynamic".to_owned()))
    );
}

#[test]
fn scoping_display_parses_back() {
    for scoping in [Scoping::Lexical, Scoping::CallerFallback] {
        assert_eq!(scoping.to_string().parse(), Ok(scoping));
    }
}

#[test]
fn builder_methods() {
    let config = EvalConfig::default()
        .with_scoping(Scoping::CallerFallback)
        .with_seed(7);
    assert_eq!(config.scoping, Scoping::CallerFallback);
    assert_eq!(config.seed, Some(7));
}
