//! Expression nodes.
//!
//! `Expr` is a closed tagged union. Every value of this type is a shape the
//! evaluator knows how to dispatch on; malformed input is rejected earlier,
//! by `classify`.

mod operators;

pub use operators::{BinaryOp, Keyword};

use std::fmt;

use crate::format_number;
use crate::ident::is_identifier;

/// The character that delimits string literals.
pub const STRING_DELIMITER: char = '"';

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numeric literal. Self-evaluating.
    Number(f64),
    /// String literal, stored without its delimiters.
    ///
    /// Interior characters are kept exactly as written: no escape processing.
    Str(String),
    /// Operator expression: `(op left right)`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Keyword expression: `(keyword operand...)`.
    Keyword {
        keyword: Keyword,
        operands: Vec<Expr>,
    },
    /// Variable reference.
    Ident(String),
}

impl Expr {
    pub fn number(n: f64) -> Self {
        Expr::Number(n)
    }

    /// String literal from its content (no delimiters).
    pub fn string(content: impl Into<String>) -> Self {
        Expr::Str(content.into())
    }

    /// String literal from delimited source text such as `"hello"`.
    ///
    /// Strips the first and last character. Returns `None` if the text does
    /// not begin and end with a quote. A lone `"` is an empty literal.
    pub fn string_literal(source: &str) -> Option<Self> {
        let inner = source
            .strip_prefix(STRING_DELIMITER)?
            .strip_suffix(STRING_DELIMITER);
        match inner {
            Some(content) => Some(Expr::Str(content.to_string())),
            // The opening quote doubles as the closing one.
            None if source.len() == STRING_DELIMITER.len_utf8() => Some(Expr::Str(String::new())),
            None => None,
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn keyword(keyword: Keyword, operands: Vec<Expr>) -> Self {
        Expr::Keyword { keyword, operands }
    }

    /// Variable reference. Returns `None` if `name` is not a valid identifier.
    pub fn ident(name: &str) -> Option<Self> {
        is_identifier(name).then(|| Expr::Ident(name.to_string()))
    }

    /// `(let name value)`.
    pub fn let_binding(name: &str, value: Expr) -> Option<Self> {
        Some(Expr::keyword(Keyword::Let, vec![Expr::ident(name)?, value]))
    }

    /// Short name of this node's shape, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number literal",
            Expr::Str(_) => "string literal",
            Expr::Binary { .. } => "operator expression",
            Expr::Keyword { .. } => "keyword expression",
            Expr::Ident(_) => "variable name",
        }
    }
}

/// Tears the tree down through an explicit work list, so dropping deeply
/// nested input does not recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Move this node's children into `out`, leaving leaves in their place.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Binary { left, right, .. } => {
                out.push(std::mem::replace(left.as_mut(), Expr::Number(0.0)));
                out.push(std::mem::replace(right.as_mut(), Expr::Number(0.0)));
            }
            Expr::Keyword { operands, .. } => out.append(operands),
            Expr::Number(_) | Expr::Str(_) | Expr::Ident(_) => {}
        }
    }
}

/// Renders the JSON-shaped source form, e.g. `["+",5,"\"a\""]`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => f.write_str(&format_number(*n)),
            Expr::Str(content) => {
                let quoted = format!("{STRING_DELIMITER}{content}{STRING_DELIMITER}");
                write!(f, "{}", serde_json::Value::String(quoted))
            }
            Expr::Binary { op, left, right } => {
                write!(f, "[\"{op}\",{left},{right}]")
            }
            Expr::Keyword { keyword, operands } => {
                write!(f, "[\"{keyword}\"")?;
                for operand in operands {
                    write!(f, ",{operand}")?;
                }
                f.write_str("]")
            }
            Expr::Ident(name) => write!(f, "\"{name}\""),
        }
    }
}
