//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::Environment;

/// Builder for creating Interpreter instances.
///
/// Defaults: empty global environment, unbounded nesting depth.
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    max_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial global environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Limit expression nesting depth.
    ///
    /// `None` leaves depth bounded only by memory; the stack grows on demand.
    #[must_use]
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        Interpreter {
            global: self.env.unwrap_or_default(),
            max_depth: self.max_depth,
        }
    }
}
