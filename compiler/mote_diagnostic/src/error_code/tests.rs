use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_matches_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn from_str_round_trips() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
    assert_eq!("E4242".parse::<ErrorCode>(), Err(()));
}

#[test]
fn phases_partition_codes() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_eval_error(),
            code.is_resource_error(),
        ];
        assert_eq!(phases.iter().filter(|p| **p).count(), 1, "{code}");
    }
}

#[test]
fn descriptions_are_lowercase() {
    for code in ErrorCode::ALL {
        let first = code.description().chars().next().unwrap();
        assert!(first.is_lowercase(), "{code}: {}", code.description());
    }
}
