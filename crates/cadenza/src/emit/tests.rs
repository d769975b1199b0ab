use super::*;
use crate::lexer;
use crate::lower;
use crate::parser;

fn compile(source: &str) -> String {
    let tokens = lexer::lex(source).unwrap();
    let program = parser::parse(&tokens).unwrap();
    let unit = lower::lower(&program).unwrap();
    emit(&unit)
}

#[test]
fn emits_usings_and_namespace_braces() {
    let text = compile("pure function add(a: int, b: int) -> int { return a + b }");
    assert!(text.starts_with("using System;\n"));
    assert!(text.contains("using Cadenza.Runtime;\n"));
    assert!(text.contains("namespace Cadenza.Generated\n{"));
}

#[test]
fn emits_result_carrier_with_generics() {
    let text = compile("pure function noop() -> Unit { return }");
    assert!(text.contains("public static class Result<T, E>"));
    assert!(text.contains("public sealed class Result<T, E>"));
}

#[test]
fn emits_interpolated_string_literal() {
    let text = compile(r#"function greet(name: string) -> string { return $"Hello, {name}!" }"#);
    assert!(text.contains("$\"Hello, {name}!\""));
}

#[test]
fn emits_if_else_block() {
    let text = compile("function sign(x: int) -> int { if x > 0 { return 1 } else { return 0 } }");
    assert!(text.contains("if (x > 0)"));
    assert!(text.contains("else"));
}

#[test]
fn parenthesizes_arithmetic_operand_of_comparison() {
    let text = compile("function check(a: int, b: int) -> bool { return a + b > 0 }");
    assert!(text.contains("(a + b) > 0"));
}
