use super::*;
use crate::ast::{BinOp, Decl, Expr, MatchBody, Pattern, Stmt, Type};
use crate::lexer::lex;

fn parse_source(source: &str) -> Program {
    let tokens = lex(source).unwrap();
    parse(&tokens).unwrap()
}

#[test]
fn parses_pure_function_with_arithmetic() {
    let program = parse_source("pure function add(a: int, b: int) -> int { return a + b }");
    assert_eq!(program.decls.len(), 1);
    let Decl::Function(f) = &program.decls[0] else { panic!("expected function") };
    assert!(f.is_pure);
    assert_eq!(f.name, "add");
    assert_eq!(f.return_type, Type::Named("int".to_string()));
    assert_eq!(f.body.len(), 1);
    match &f.body[0] {
        Stmt::Return(Some(Expr::Binary { op: BinOp::Add, .. }), _) => {}
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn parses_effectful_function_with_uses_clause() {
    let program = parse_source(
        "function fetch(id: int) -> Result<string, string> uses Network, Database { return Ok(\"x\") }",
    );
    let Decl::Function(f) = &program.decls[0] else { panic!("expected function") };
    assert!(!f.is_pure);
    assert_eq!(f.effects, vec!["Network".to_string(), "Database".to_string()]);
    assert_eq!(f.return_type, Type::result(Type::Named("string".into()), Type::Named("string".into())));
}

#[test]
fn parses_module_and_import() {
    let program = parse_source(
        r#"
        import { helper } from "utils"
        module mathutils {
            pure function square(x: int) -> int { return x * x }
        }
        "#,
    );
    assert_eq!(program.decls.len(), 2);
    assert!(matches!(program.decls[0], Decl::Import(_)));
    let Decl::Module(m) = &program.decls[1] else { panic!("expected module") };
    assert_eq!(m.name, "mathutils");
    assert_eq!(m.decls.len(), 1);
}

#[test]
fn parses_let_with_propagate() {
    let program = parse_source(
        "function run() -> Result<int, string> { let x = compute()? return Ok(x) }",
    );
    let Decl::Function(f) = &program.decls[0] else { panic!("expected function") };
    match &f.body[0] {
        Stmt::Let { value: Expr::Propagate(inner, _), .. } => {
            assert!(matches!(**inner, Expr::Call { .. }));
        }
        other => panic!("unexpected stmt: {other:?}"),
    }
}

#[test]
fn parses_guard_statement() {
    let program = parse_source(
        "function check(x: int) -> int { guard x > 0 else { return 0 } return x }",
    );
    let Decl::Function(f) = &program.decls[0] else { panic!("expected function") };
    assert!(matches!(f.body[0], Stmt::Guard { .. }));
}

#[test]
fn parses_match_over_result() {
    let program = parse_source(
        r#"function describe(r: Result<int, string>) -> string {
            return match r {
                Ok(v) -> "ok",
                Error(e) -> e,
            }
        }"#,
    );
    let Decl::Function(f) = &program.decls[0] else { panic!("expected function") };
    match &f.body[0] {
        Stmt::Return(Some(Expr::Match { cases, .. }), _) => {
            assert_eq!(cases.len(), 2);
            assert!(matches!(cases[0].pattern, Pattern::Ok(_)));
            assert!(matches!(cases[1].pattern, Pattern::Error(_)));
            assert!(matches!(cases[0].body, MatchBody::Expr(_)));
        }
        other => panic!("unexpected stmt: {other:?}"),
    }
}

#[test]
fn parses_interpolated_string_with_remapped_positions() {
    let program = parse_source(r#"function greet(name: string) -> string { return $"Hello, {name}!" }"#);
    let Decl::Function(f) = &program.decls[0] else { panic!("expected function") };
    match &f.body[0] {
        Stmt::Return(Some(Expr::Interpolation(parts, _)), _) => {
            assert_eq!(parts.len(), 3);
        }
        other => panic!("unexpected stmt: {other:?}"),
    }
}

#[test]
fn parses_spec_block_before_function() {
    let program = parse_source(
        "/*spec intent: doubles a number\nrule: result is always even spec*/ pure function double(x: int) -> int { return x * 2 }",
    );
    let Decl::Function(f) = &program.decls[0] else { panic!("expected function") };
    let spec = f.spec.as_ref().expect("expected a spec block");
    assert_eq!(spec.intent.as_deref(), Some("doubles a number"));
    assert_eq!(spec.rules, vec!["result is always even".to_string()]);
}

#[test]
fn component_body_is_captured_opaquely() {
    let program = parse_source("component Counter { state count: int }");
    let Decl::Component(c) = &program.decls[0] else { panic!("expected component") };
    assert_eq!(c.name, "Counter");
    assert!(c.raw_body.contains("count"));
}

#[test]
fn rejects_malformed_function_with_positioned_error() {
    let tokens = lex("function broken( -> int { return 1 }").unwrap();
    let err = parse(&tokens).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}
