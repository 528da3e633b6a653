//! Recursive evaluation over `Expr`.
//!
//! Operands evaluate depth-first, left before right, in the environment of
//! the enclosing call.

use rkt_ir::{Expr, Keyword};
use rkt_stack::ensure_sufficient_stack;

use crate::errors::{recursion_limit_exceeded, unimplemented, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::{Environment, Value};

/// Per-call evaluation state.
pub(super) struct Evaluator {
    max_depth: Option<usize>,
    depth: usize,
}

impl Evaluator {
    pub(super) fn new(max_depth: Option<usize>) -> Self {
        Evaluator {
            max_depth,
            depth: 0,
        }
    }

    /// Evaluate one node, guarding depth and stack.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = expr.kind_name(), depth = self.depth))]
    pub(super) fn eval(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult {
        self.enter()?;
        let result = ensure_sufficient_stack(|| self.dispatch(expr, env));
        self.depth = self.depth.saturating_sub(1);
        result
    }

    fn enter(&mut self) -> Result<(), EvalError> {
        if let Some(limit) = self.max_depth {
            if self.depth >= limit {
                return Err(recursion_limit_exceeded(limit));
            }
        }
        self.depth = self.depth.saturating_add(1);
        Ok(())
    }

    fn dispatch(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(content) => Ok(Value::Str(content.clone())),
            Expr::Binary { op, left, right } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                evaluate_binary(left, right, *op)
            }
            Expr::Keyword { keyword, operands } => self.eval_keyword(*keyword, operands, env),
            Expr::Ident(name) => env.lookup(name),
        }
    }

    fn eval_keyword(
        &mut self,
        keyword: Keyword,
        operands: &[Expr],
        env: &mut Environment,
    ) -> EvalResult {
        match keyword {
            Keyword::Let => self.eval_let(operands, env),
            Keyword::Set | Keyword::Begin => Err(unimplemented(&format!("`{keyword}` expression"))),
        }
    }

    /// `(let name value)`: evaluate `value`, bind it, return it.
    ///
    /// Operands after the value are ignored.
    fn eval_let(&mut self, operands: &[Expr], env: &mut Environment) -> EvalResult {
        match operands {
            [Expr::Ident(name), value, ..] => {
                let value = self.eval(value, env)?;
                tracing::debug!(%name, %value, "let");
                Ok(env.define(name.as_str(), value))
            }
            [Expr::Ident(name)] => Err(unimplemented(&format!("`let {name}` without a value"))),
            [target, ..] => Err(unimplemented(&format!(
                "`let` target must be a variable name, got {}",
                target.kind_name()
            ))),
            [] => Err(unimplemented("`let` without a target")),
        }
    }
}
