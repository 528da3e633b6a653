use super::*;
use crate::errors::EvalErrorKind;
use crate::Value;
use pretty_assertions::assert_eq;
use rkt_ir::{BinaryOp, Keyword};
use serde_json::json;

fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string())
}

fn let_(name: &str, value: Expr) -> Expr {
    Expr::keyword(Keyword::Let, vec![ident(name), value])
}

#[test]
fn test_literals_self_evaluate() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.eval(&Expr::number(42.0)), Ok(Value::number(42.0)));
    assert_eq!(interpreter.eval(&Expr::string("hi")), Ok(Value::string("hi")));
}

#[test]
fn test_nested_arithmetic() {
    let mut interpreter = Interpreter::new();
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Add, Expr::number(5.0), Expr::number(5.0)),
        Expr::number(5.0),
    );
    assert_eq!(interpreter.eval(&expr), Ok(Value::number(15.0)));
}

#[test]
fn test_let_defines_in_global() {
    let mut interpreter = Interpreter::new();
    assert_eq!(
        interpreter.eval(&let_("x", Expr::number(42.0))),
        Ok(Value::number(42.0))
    );
    assert_eq!(interpreter.global().get("x"), Some(&Value::number(42.0)));
    assert_eq!(interpreter.eval(&ident("x")), Ok(Value::number(42.0)));
}

#[test]
fn test_let_value_sees_current_environment() {
    let mut interpreter = Interpreter::new();
    interpreter.eval(&let_("x", Expr::number(2.0))).unwrap();
    let expr = let_(
        "y",
        Expr::binary(BinaryOp::Mul, ident("x"), Expr::number(10.0)),
    );
    assert_eq!(interpreter.eval(&expr), Ok(Value::number(20.0)));
}

#[test]
fn test_eval_in_leaves_global_untouched() {
    let interpreter = Interpreter::new();
    let mut local = Environment::with_bindings([("base", Value::number(1.0))]);
    let expr = let_(
        "x",
        Expr::binary(BinaryOp::Add, ident("base"), Expr::number(1.0)),
    );
    assert_eq!(interpreter.eval_in(&expr, &mut local), Ok(Value::number(2.0)));
    assert_eq!(local.get("x"), Some(&Value::number(2.0)));
    assert!(!interpreter.global().contains("x"));
}

#[test]
fn test_operands_resolve_in_passed_environment() {
    let interpreter = Interpreter::new();
    let mut local = Environment::with_bindings([("a", Value::string("x"))]);
    let expr = Expr::binary(BinaryOp::Add, ident("a"), ident("a"));
    assert_eq!(interpreter.eval_in(&expr, &mut local), Ok(Value::string("xx")));
}

#[test]
fn test_let_redefines() {
    let mut interpreter = Interpreter::new();
    interpreter.eval(&let_("x", Expr::number(1.0))).unwrap();
    interpreter.eval(&let_("x", Expr::string("one"))).unwrap();
    assert_eq!(interpreter.eval(&ident("x")), Ok(Value::string("one")));
}

#[test]
fn test_undefined_variable() {
    let mut interpreter = Interpreter::new();
    let err = interpreter.eval(&ident("x")).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_let_with_non_variable_target() {
    let mut interpreter = Interpreter::new();
    let expr = Expr::keyword(Keyword::Let, vec![Expr::string("x"), Expr::number(1.0)]);
    let err = interpreter.eval(&expr).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Unimplemented { .. }));
    assert!(interpreter.global().is_empty());
}

#[test]
fn test_let_without_value() {
    let mut interpreter = Interpreter::new();
    let expr = Expr::keyword(Keyword::Let, vec![ident("x")]);
    let err = interpreter.eval(&expr).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Unimplemented { .. }));
}

#[test]
fn test_set_and_begin_are_unimplemented() {
    let mut interpreter = Interpreter::new();
    for keyword in [Keyword::Set, Keyword::Begin] {
        let expr = Expr::keyword(keyword, vec![ident("x"), Expr::number(1.0)]);
        let err = interpreter.eval(&expr).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::Unimplemented {
                form: format!("`{keyword}` expression")
            }
        );
    }
}

#[test]
fn test_error_in_left_operand_skips_right() {
    let mut interpreter = Interpreter::new();
    let expr = Expr::binary(
        BinaryOp::Add,
        ident("missing"),
        let_("x", Expr::number(1.0)),
    );
    assert!(interpreter.eval(&expr).is_err());
    assert!(!interpreter.global().contains("x"));
}

#[test]
fn test_max_depth_allows_exact_nesting() {
    let mut interpreter = Interpreter::builder().max_depth(Some(2)).build();
    let expr = Expr::binary(BinaryOp::Add, Expr::number(1.0), Expr::number(1.0));
    assert_eq!(interpreter.eval(&expr), Ok(Value::number(2.0)));
}

#[test]
fn test_max_depth_exceeded() {
    let mut interpreter = Interpreter::builder().max_depth(Some(2)).build();
    let expr = Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Add, Expr::number(1.0), Expr::number(1.0)),
        Expr::number(1.0),
    );
    let err = interpreter.eval(&expr).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 2 });
}

#[test]
fn test_deep_nesting_without_limit() {
    let mut expr = Expr::number(0.0);
    for _ in 0..50_000 {
        expr = Expr::binary(BinaryOp::Add, expr, Expr::number(1.0));
    }
    let mut interpreter = Interpreter::new();
    let result = interpreter.eval(&expr);
    assert_eq!(result, Ok(Value::number(50_000.0)));
}

/// `["+", ["+", ... 0 ..., 1], 1]`, `depth` levels deep.
fn nested_sum_json(depth: usize) -> serde_json::Value {
    let mut raw = json!(0);
    for _ in 0..depth {
        raw = serde_json::Value::Array(vec![json!("+"), raw, json!(1)]);
    }
    raw
}

/// Tear down nested JSON arrays without recursive `Drop`.
fn drop_nested_json(raw: serde_json::Value) {
    let mut pending = vec![raw];
    while let Some(value) = pending.pop() {
        if let serde_json::Value::Array(items) = value {
            pending.extend(items);
        }
    }
}

#[test]
fn test_deep_json_without_limit() {
    let raw = nested_sum_json(200_000);
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.eval_json(&raw), Ok(Value::number(200_000.0)));
    drop_nested_json(raw);
}

#[test]
fn test_deep_json_past_max_depth() {
    let raw = nested_sum_json(200_000);
    let mut interpreter = Interpreter::builder().max_depth(Some(64)).build();
    let err = interpreter.eval_json(&raw).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 64 });
    let mut local = Environment::new();
    let err = interpreter.eval_json_in(&raw, &mut local).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 64 });
    drop_nested_json(raw);
}

#[test]
fn test_let_ignores_operands_after_value() {
    let mut interpreter = Interpreter::new();
    let expr = Expr::keyword(
        Keyword::Let,
        vec![ident("x"), Expr::number(1.0), Expr::number(2.0)],
    );
    assert_eq!(interpreter.eval(&expr), Ok(Value::number(1.0)));
    assert_eq!(interpreter.global().get("x"), Some(&Value::number(1.0)));
}

#[test]
fn test_builder_env_seeds_global() {
    let mut interpreter = Interpreter::builder()
        .env(Environment::with_constants())
        .build();
    assert_eq!(interpreter.eval(&ident("true")), Ok(Value::Bool(true)));
    assert_eq!(interpreter.eval(&ident("null")), Ok(Value::Null));
}
