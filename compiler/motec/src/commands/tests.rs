use super::*;
use pretty_assertions::assert_eq;

#[test]
fn utf8_source_is_accepted() {
    let bytes = "(display \"caf\u{e9}\")".as_bytes().to_vec();
    assert_eq!(
        source_text("ok.mote", bytes),
        Ok("(display \"caf\u{e9}\")".to_string())
    );
}

#[test]
fn invalid_utf8_names_the_first_bad_byte() {
    let bytes = b"(display \"\xff\")".to_vec();
    assert_eq!(
        source_text("bad.mote", bytes),
        Err("'bad.mote' contains invalid UTF-8 data at byte 10".to_string())
    );
}
