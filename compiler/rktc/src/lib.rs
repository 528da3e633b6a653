//! Rktc - command-line host for the Rkt evaluator.
//!
//! Reads JSON-encoded expressions, evaluates them in order against one
//! global environment seeded with `true`, `false` and `null`, and reports
//! each result.

mod program;
mod tracing_setup;

pub use program::{Program, ProgramError};
pub use tracing_setup::init_tracing;

use rkt_eval::{Environment, EvalError, Interpreter, Value};

/// What the `rkt` command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// `--help` / `-h`.
    Help,
    /// No argument, or `-`.
    Stdin,
    /// A program file path.
    File(String),
}

/// Interpret the arguments after the program name.
///
/// Returns `None` for more than one argument.
pub fn parse_args(args: &[String]) -> Option<Invocation> {
    match args {
        [] => Some(Invocation::Stdin),
        [arg] => Some(match arg.as_str() {
            "--help" | "-h" => Invocation::Help,
            "-" => Invocation::Stdin,
            path => Invocation::File(path.to_string()),
        }),
        _ => None,
    }
}

/// Create the interpreter the `rkt` binary runs programs with.
pub fn host_interpreter() -> Interpreter {
    Interpreter::builder()
        .env(Environment::with_constants())
        .build()
}

/// Evaluate every expression of `program` in order, passing each result to
/// `emit`.
///
/// Stops at the first error. Bindings made by earlier expressions stay in
/// the interpreter's global environment.
pub fn run_program(
    program: &Program,
    interpreter: &mut Interpreter,
    mut emit: impl FnMut(&Value),
) -> Result<(), EvalError> {
    for (index, raw) in program.expressions().iter().enumerate() {
        let value = interpreter.eval_json(raw).inspect_err(|err| {
            tracing::debug!(index, %err, "evaluation failed");
        })?;
        emit(&value);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
