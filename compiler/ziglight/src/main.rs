//! `ziglight` CLI
//!
//! Tokenizes Zig source files the way a syntax highlighter sees them.

use ziglight::commands::{check_file, lex_file, stats_file};
use ziglight::CliError;

fn main() {
    ziglight::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let mut stdout = std::io::stdout().lock();

    let result = match command {
        "lex" | "stats" | "check" => match args.get(2) {
            Some(path) if args.len() == 3 => match command {
                "lex" => lex_file(path, &mut stdout),
                "stats" => stats_file(path, &mut stdout),
                _ => check_file(path, &mut stdout),
            },
            _ => Err(CliError::Usage(format!("Usage: ziglight {command} <file.zig>"))),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            println!("ziglight {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CliError::Usage(format!("Unknown command: {command}"))),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(err.exit_code());
    }
}

fn print_usage() {
    eprintln!("ziglight - Zig tokenizer for syntax highlighting");
    eprintln!();
    eprintln!("Usage: ziglight <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>     Print every token as line:col tag \"text\"");
    eprintln!("  stats <file>   Count tokens per tag");
    eprintln!("  check <file>   Exit with status 1 if the file has invalid tokens");
    eprintln!("  help           Show this message");
    eprintln!();
    eprintln!("Set RUST_LOG=ziglight_lexer=trace to log each token as it is scanned.");
}
