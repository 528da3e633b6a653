//! Error types for evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries the structured data for each failure so callers
//! can match on the category instead of parsing messages. Factory functions
//! (e.g. `undefined_variable()`) are the public way to build errors; they
//! populate both `kind` and `message`.

use std::fmt;

use rkt_ir::ClassifyError;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Lookup of a name with no binding.
    UndefinedVariable { name: String },
    /// Operands are neither both numbers nor both strings.
    TypeMismatch {
        op: String,
        left: String,
        right: String,
    },
    /// An operator symbol outside `+ - * /` reached arithmetic dispatch.
    UnknownOperator { symbol: String },
    /// The expression has no evaluation rule.
    Unimplemented { form: String },
    /// Nesting exceeded the configured depth limit.
    StackOverflow { depth: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Variable \"{name}\" is not defined"),
            Self::TypeMismatch { op, left, right } => {
                write!(
                    f,
                    "Type mismatch: cannot apply operator {op} to {left} and {right}"
                )
            }
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator: {symbol}"),
            Self::Unimplemented { form } => write!(f, "Unimplemented: {form}"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message. Equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error from a structured kind.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

/// Unclassifiable input has no evaluation rule.
impl From<ClassifyError> for EvalError {
    fn from(err: ClassifyError) -> Self {
        unimplemented(&err.to_string())
    }
}

// Variable Errors

/// Undefined variable.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

// Operator Errors

/// Operands of a binary expression have incompatible types.
#[cold]
pub fn type_mismatch(op: &str, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op: op.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Operator symbol with no arithmetic rule.
#[cold]
pub fn unknown_operator(symbol: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        symbol: symbol.to_string(),
    })
}

// Form Errors

/// Expression form with no evaluation rule.
#[cold]
pub fn unimplemented(form: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Unimplemented {
        form: form.to_string(),
    })
}

/// Maximum nesting depth exceeded.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}
