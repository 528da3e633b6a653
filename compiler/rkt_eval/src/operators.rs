//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch on the operand pair. Numbers get arithmetic,
//! strings get concatenation, every other pairing is a type mismatch.

use rkt_ir::BinaryOp;

use crate::errors::{type_mismatch, unknown_operator, EvalResult};
use crate::value::Value;

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(eval_number_binary(a, b, op))),
        (Value::Str(a), Value::Str(b)) => {
            if op != BinaryOp::Add {
                tracing::warn!(
                    op = op.as_symbol(),
                    "string operands concatenate regardless of operator"
                );
            }
            Ok(concat(a, &b))
        }
        (left, right) => Err(type_mismatch(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// Evaluate a binary operation named by its source symbol.
///
/// For hosts that carry raw operator symbols. Operand types are inspected
/// first, as in `evaluate_binary`: two strings concatenate whatever the
/// symbol, two numbers need a known arithmetic symbol.
pub fn evaluate_binary_symbol(left: Value, right: Value, symbol: &str) -> EvalResult {
    if let Some(op) = BinaryOp::from_symbol(symbol) {
        return evaluate_binary(left, right, op);
    }
    match (left, right) {
        (Value::Number(_), Value::Number(_)) => Err(unknown_operator(symbol)),
        (Value::Str(a), Value::Str(b)) => Ok(concat(a, &b)),
        (left, right) => Err(type_mismatch(symbol, left.type_name(), right.type_name())),
    }
}

/// Arithmetic on numbers.
///
/// Division follows IEEE 754: `x / 0` is an infinity and `0 / 0` is NaN.
fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
    }
}

fn concat(mut a: String, b: &str) -> Value {
    a.push_str(b);
    Value::Str(a)
}
