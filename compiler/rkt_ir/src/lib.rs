//! Rkt IR - Expression representation for the Rkt evaluator.
//!
//! This crate contains the data the evaluator walks:
//! - `Expr`: the closed set of expression shapes
//! - `BinaryOp` and `Keyword`: the fixed operator and keyword sets
//! - `classify`: the boundary that turns untyped JSON-shaped input into `Expr`
//!
//! # Design Philosophy
//!
//! Expressions are structured data handed to the evaluator; there is no
//! surface syntax. Shape tests happen once, at the boundary, so the evaluator
//! can match exhaustively on `Expr` instead of re-testing types at runtime.

pub mod ast;
mod classify;
mod ident;

pub use ast::{BinaryOp, Expr, Keyword};
pub use classify::{classify, ClassifyError};
pub use ident::is_identifier;

/// Render a number the way hosts expect to read it back.
///
/// Integral values print without a fractional part (`10`, not `10.0`);
/// infinities print as `Infinity` / `-Infinity`. Negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}
