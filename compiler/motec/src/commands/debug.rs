//! Debug commands: `parse` and `lex` for inspecting the front end.

use mote_eval::PrimitiveTable;
use mote_ir::{Arena, TermDisplay};
use mote_lexer::Tokens;
use mote_parse::Forms;

use super::{read_file, report};

/// Print every top-level form re-printed from its parsed terms.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let mut arena = Arena::new();
    let mut forms = Forms::new(&mut arena, &source);
    while let Some(form) = forms.next() {
        match form {
            Ok(form) => println!("{}", TermDisplay::new(forms.arena(), &PrimitiveTable, form)),
            Err(err) => {
                report(path, &source, &err.to_diagnostic());
                std::process::exit(1);
            }
        }
    }
}

/// Print one token per line as `Kind "text"`.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let mut arena = Arena::new();
    for token in Tokens::new(&mut arena, &source) {
        match token {
            Ok(token) => println!("{} {:?}", token.kind.name(), token.text),
            Err(err) => {
                report(path, &source, &err.to_diagnostic());
                std::process::exit(1);
            }
        }
    }
}
