//! Moon Compiler CLI

use moon_ir::StringInterner;
use moonc::{check_chunk, dump_tokens, Chunk};

fn main() {
    moonc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: moonc lex <file.moon | ->");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: moonc check <file.moon | ->");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Moon Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Lex a chunk and print its token stream.
fn lex_file(path: &str) {
    let interner = StringInterner::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = Chunk::open(path).and_then(|chunk| dump_tokens(chunk, &interner, &mut out));
    if let Err(err) = result {
        eprintln!("moonc: {err}");
        std::process::exit(1);
    }
}

/// Lex a chunk and report only whether it is lexically valid.
fn check_file(path: &str) {
    let interner = StringInterner::new();
    match Chunk::open(path).and_then(|chunk| check_chunk(chunk, &interner)) {
        Ok(count) => println!("{path}: ok ({count} tokens)"),
        Err(err) => {
            eprintln!("moonc: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Moon Compiler");
    println!();
    println!("Usage: moonc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.moon>      Tokenize and display tokens (`-` reads stdin)");
    println!("  check <file.moon>    Tokenize and report lexical errors only");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  {}=<filter>      Tracing filter, e.g. moon_lexer=trace", moonc::LOG_ENV);
}
