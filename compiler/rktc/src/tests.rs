use super::*;
use pretty_assertions::assert_eq;
use rkt_eval::EvalErrorKind;
use serde_json::json;

fn run(source: &str) -> (Vec<String>, Result<(), EvalError>) {
    let program = Program::parse(source).unwrap();
    let mut interpreter = host_interpreter();
    let mut output = Vec::new();
    let result = run_program(&program, &mut interpreter, |value| {
        output.push(value.to_string());
    });
    (output, result)
}

#[test]
fn test_single_expression_document() {
    let program = Program::parse(r#"["+", 1, 2]"#).unwrap();
    assert_eq!(program.expressions(), &[json!(["+", 1, 2])]);
}

#[test]
fn test_program_document() {
    let program = Program::parse(r#"{"program": [1, "x"]}"#).unwrap();
    assert_eq!(program.expressions(), &[json!(1), json!("x")]);
}

#[test]
fn test_object_with_extra_keys_is_one_expression() {
    let program = Program::parse(r#"{"program": [1], "other": 2}"#).unwrap();
    assert_eq!(program.expressions().len(), 1);
}

#[test]
fn test_invalid_json() {
    let err = Program::parse("[1,").unwrap_err();
    assert!(matches!(err, ProgramError::Json(_)));
    assert!(err.to_string().starts_with("invalid JSON"));
}

#[test]
fn test_missing_file() {
    let err = Program::read("/nonexistent/program.json").unwrap_err();
    assert!(matches!(err, ProgramError::Io { .. }));
}

#[test]
fn test_run_program_in_order() {
    let (output, result) = run(r#"{"program": [
        ["let", "greeting", "\"hello\""],
        ["+", "greeting", "\" world\""],
        ["/", ["*", 5, 5], 5],
        "null"
    ]}"#);
    assert_eq!(result, Ok(()));
    assert_eq!(output, vec!["hello", "hello world", "5", "null"]);
}

#[test]
fn test_run_program_stops_at_first_error() {
    let (output, result) = run(r#"{"program": [["let", "x", 1], "y", ["let", "z", 2]]}"#);
    assert_eq!(output, vec!["1"]);
    let err = result.unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "y".to_string()
        }
    );
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_parse_args() {
    assert_eq!(parse_args(&args(&[])), Some(Invocation::Stdin));
    assert_eq!(parse_args(&args(&["-"])), Some(Invocation::Stdin));
    assert_eq!(parse_args(&args(&["-h"])), Some(Invocation::Help));
    assert_eq!(parse_args(&args(&["--help"])), Some(Invocation::Help));
    assert_eq!(
        parse_args(&args(&["prog.json"])),
        Some(Invocation::File("prog.json".to_string()))
    );
}

#[test]
fn test_parse_args_rejects_extra_arguments() {
    assert_eq!(parse_args(&args(&["a.json", "b.json"])), None);
    assert_eq!(parse_args(&args(&["--help", "a.json"])), None);
}
