//! Boundary classification of untyped input.
//!
//! Hosts hand over JSON-shaped data: numbers, strings, and arrays. This
//! module applies the ordered shape tests once and produces a typed `Expr`,
//! or a `ClassifyError` naming the fragment that matched no shape.
//!
//! Shape order:
//! 1. number
//! 2. string delimited by quotes
//! 3. `[op, left, right]` with `op` in `+ - * /`
//! 4. `[keyword, operand, ...]` with `keyword` in `let set begin`
//! 5. identifier string
//!
//! A triple headed by an unknown symbol (`["~", 5, 5]`) fails here, so it
//! never reaches arithmetic dispatch.

use rkt_stack::ensure_sufficient_stack;
use serde_json::Value as Json;

use crate::ast::{BinaryOp, Expr, Keyword};

/// Nesting levels of an offending fragment rendered before eliding with `...`.
const FRAGMENT_DEPTH: usize = 8;

/// Input that matches no expression shape.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized expression: {fragment}")]
pub struct ClassifyError {
    /// JSON text of the offending fragment, nested containers elided past
    /// `FRAGMENT_DEPTH` levels.
    pub fragment: String,
}

impl ClassifyError {
    #[cold]
    fn new(raw: &Json) -> Self {
        let mut fragment = String::new();
        render_fragment(raw, FRAGMENT_DEPTH, &mut fragment);
        ClassifyError { fragment }
    }
}

/// Compact JSON text of `raw`, with arrays and objects below `depth`
/// levels written as `[...]` and `{...}`.
fn render_fragment(raw: &Json, depth: usize, out: &mut String) {
    match raw {
        Json::Array(items) if items.is_empty() => out.push_str("[]"),
        Json::Object(fields) if fields.is_empty() => out.push_str("{}"),
        Json::Array(_) if depth == 0 => out.push_str("[...]"),
        Json::Object(_) if depth == 0 => out.push_str("{...}"),
        Json::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                render_fragment(item, depth - 1, out);
            }
            out.push(']');
        }
        Json::Object(fields) => {
            out.push('{');
            for (index, (key, value)) in fields.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&Json::String(key.clone()).to_string());
                out.push(':');
                render_fragment(value, depth - 1, out);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Classify untyped input into an `Expr`.
///
/// Operands are classified recursively, growing the stack as needed; the
/// first unrecognized fragment aborts the whole classification.
pub fn classify(raw: &Json) -> Result<Expr, ClassifyError> {
    ensure_sufficient_stack(|| classify_node(raw))
}

fn classify_node(raw: &Json) -> Result<Expr, ClassifyError> {
    match raw {
        Json::Number(n) => n.as_f64().map(Expr::Number).ok_or_else(|| ClassifyError::new(raw)),
        Json::String(text) => Expr::string_literal(text)
            .or_else(|| Expr::ident(text))
            .ok_or_else(|| ClassifyError::new(raw)),
        Json::Array(items) => classify_form(raw, items),
        Json::Null | Json::Bool(_) | Json::Object(_) => Err(ClassifyError::new(raw)),
    }
}

/// Classify an array as an operator or keyword expression.
fn classify_form(raw: &Json, items: &[Json]) -> Result<Expr, ClassifyError> {
    let Some((Json::String(head), rest)) = items.split_first() else {
        return Err(ClassifyError::new(raw));
    };

    if let (Some(op), [left, right]) = (BinaryOp::from_symbol(head), rest) {
        return Ok(Expr::binary(op, classify(left)?, classify(right)?));
    }

    if let Some(keyword) = Keyword::from_name(head) {
        if !rest.is_empty() {
            let operands = rest.iter().map(classify).collect::<Result<Vec<_>, _>>()?;
            return Ok(Expr::keyword(keyword, operands));
        }
    }

    Err(ClassifyError::new(raw))
}
