//! Tree-walking interpreter for Rkt expressions.
//!
//! # Architecture
//!
//! `Interpreter` owns the global `Environment` and the evaluation limits.
//! Each entry point hands off to a short-lived `Evaluator` (see `eval.rs`)
//! that tracks nesting depth for one call and recurses over `Expr`.
//!
//! Typed input goes through `eval` / `eval_in`. Untyped JSON-shaped input
//! goes through `eval_json` / `eval_json_in`, which classify the whole
//! expression before evaluating any of it.

mod builder;
mod eval;

pub use builder::InterpreterBuilder;

use rkt_ir::{classify, Expr};

use crate::errors::EvalResult;
use crate::Environment;
use eval::Evaluator;

/// Tree-walking interpreter.
#[derive(Debug)]
pub struct Interpreter {
    /// Global environment, used when no environment is passed.
    pub(crate) global: Environment,
    /// Maximum expression nesting depth, `None` for unbounded.
    pub(crate) max_depth: Option<usize>,
}

impl Interpreter {
    /// Create an interpreter with an empty global environment.
    ///
    /// For more configuration options, use `Interpreter::builder()`.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Create an interpreter builder.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Get the global environment.
    #[inline]
    pub fn global(&self) -> &Environment {
        &self.global
    }

    /// Get the global environment mutably, e.g. to seed bindings.
    #[inline]
    pub fn global_mut(&mut self) -> &mut Environment {
        &mut self.global
    }

    /// Evaluate `expr` in the global environment.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        let Self { global, max_depth } = self;
        Evaluator::new(*max_depth).eval(expr, global)
    }

    /// Evaluate `expr` in `env`.
    ///
    /// `let` defines into `env`; the global environment is not touched.
    pub fn eval_in(&self, expr: &Expr, env: &mut Environment) -> EvalResult {
        Evaluator::new(self.max_depth).eval(expr, env)
    }

    /// Classify untyped input, then evaluate it in the global environment.
    pub fn eval_json(&mut self, raw: &serde_json::Value) -> EvalResult {
        let expr = classify(raw)?;
        self.eval(&expr)
    }

    /// Classify untyped input, then evaluate it in `env`.
    pub fn eval_json_in(&self, raw: &serde_json::Value, env: &mut Environment) -> EvalResult {
        let expr = classify(raw)?;
        self.eval_in(&expr, env)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
