//! Mote CLI

use motec::commands::{lex_file, parse_file, run_file};
use motec::{init_tracing, RunConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    match command.as_str() {
        "run" => {
            let mut config = match RunConfig::from_env() {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };
            let mut file_path = None;
            for arg in args.iter().skip(2) {
                match config.apply_flag(arg) {
                    Ok(true) => {}
                    Ok(false) if !arg.starts_with('-') && file_path.is_none() => {
                        file_path = Some(arg.as_str());
                    }
                    Ok(false) => {
                        eprintln!("error: unexpected argument '{arg}'");
                        std::process::exit(1);
                    }
                    Err(err) => {
                        eprintln!("error: {err}");
                        std::process::exit(1);
                    }
                }
            }
            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: mote run <file> [--scoping=lexical|caller] [--seed=<n>]");
                std::process::exit(1);
            };
            run_file(path, &config);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: mote parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: mote lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("mote {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: mote <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>      Evaluate a program, echoing each form and its result");
    println!("  parse <file>    Print each top-level form as parsed");
    println!("  lex <file>      Print the token stream");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Run options:");
    println!("  --scoping=<m>   Closure scoping: lexical (default), caller");
    println!("  --seed=<n>      Seed for `random`");
    println!();
    println!("Environment:");
    println!("  MOTE_SCOPING, MOTE_SEED   Defaults for the run options");
    println!("  MOTE_ARENA_CAPACITY       Bytes reserved for strings");
    println!("  RUST_LOG                  Enable logging (e.g. mote_eval=trace)");
    println!("  MOTE_LOG_TREE=1           Log as an indented call tree");
}
