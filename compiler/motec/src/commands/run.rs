//! The `run` command.

use mote_eval::stdout_handler;

use super::{read_file, report};
use crate::{run_source, RunConfig};

/// Run a mote program, echoing every form and its result to stdout.
pub fn run_file(path: &str, config: &RunConfig) {
    let source = read_file(path);
    let output = stdout_handler();

    let result = run_source(&source, config, &output);
    if let Err(err) = output.flush() {
        eprintln!("error: failed to write output: {err}");
        std::process::exit(1);
    }
    if let Err(err) = result {
        report(path, &source, &err.to_diagnostic());
        std::process::exit(1);
    }
}
