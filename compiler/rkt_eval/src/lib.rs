//! Rkt Eval - Tree-walking evaluator for Rkt expressions.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a single flat name-to-value store
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `Interpreter`: exhaustive recursion over `rkt_ir::Expr`
//! - `EvalError`: structured errors built by the factories in `errors`
//!
//! # Usage
//!
//! ```
//! use rkt_eval::{Environment, Interpreter, Value};
//! use serde_json::json;
//!
//! let mut interpreter = Interpreter::builder()
//!     .env(Environment::with_constants())
//!     .build();
//! interpreter.eval_json(&json!(["let", "x", ["*", 6, 7]])).unwrap();
//! assert_eq!(interpreter.eval_json(&json!("x")).unwrap(), Value::number(42.0));
//! ```

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod value;

pub use environment::{Environment, DEFAULT_CONSTANTS};
pub use errors::{
    recursion_limit_exceeded, type_mismatch, undefined_variable, unimplemented,
    unknown_operator, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_binary_symbol};
pub use rkt_stack::ensure_sufficient_stack;
pub use value::Value;

// Re-export the expression types callers build input from
pub use rkt_ir::{classify, BinaryOp, ClassifyError, Expr, Keyword};
