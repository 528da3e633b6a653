//! Rkt CLI
//!
//! Evaluates a JSON-encoded program and prints one result per line.

use std::io::Read;

use rktc::{
    host_interpreter, init_tracing, parse_args, run_program, Invocation, Program, ProgramError,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let program = match parse_args(&args) {
        Some(Invocation::Help) => {
            print_usage();
            return;
        }
        Some(Invocation::Stdin) => read_stdin(),
        Some(Invocation::File(path)) => Program::read(&path),
        None => {
            eprintln!("error: expected at most one argument, got {}", args.len());
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let program = match program {
        Ok(program) => program,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut interpreter = host_interpreter();
    if let Err(err) = run_program(&program, &mut interpreter, |value| println!("{value}")) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn read_stdin() -> Result<Program, ProgramError> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|err| ProgramError::Io {
            path: "<stdin>".to_string(),
            source: err,
        })?;
    Program::parse(&source)
}

fn print_usage() {
    println!("Rkt expression evaluator");
    println!();
    println!("Usage: rkt [FILE]");
    println!();
    println!("Reads a JSON document from FILE, or stdin when FILE is absent or `-`.");
    println!("The document is one expression or {{\"program\": [expr, ...]}}.");
    println!();
    println!("Expressions:");
    println!("  42                     number");
    println!("  \"\\\"text\\\"\"             string (quotes are part of the literal)");
    println!("  [\"+\", left, right]     operator: + - * /");
    println!("  [\"let\", \"name\", expr]  bind a variable");
    println!("  \"name\"                 variable reference");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=rkt_eval=trace   enable log output");
    println!("  RKT_LOG_TREE=1            nest log output by expression");
}
