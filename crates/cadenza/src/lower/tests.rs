use super::*;
use crate::emit;
use crate::lexer;
use crate::parser;

fn lower_source(source: &str) -> CompilationUnit {
    let tokens = lexer::lex(source).unwrap();
    let program = parser::parse(&tokens).unwrap();
    lower(&program).unwrap()
}

fn find_method<'a>(unit: &'a CompilationUnit, namespace: &str, class: &str, method: &str) -> &'a CsMethod {
    let ns = unit.namespaces.iter().find(|n| n.name == namespace).expect("namespace not found");
    let cls = ns.classes.iter().find(|c| c.name == class).expect("class not found");
    cls.methods.iter().find(|m| m.name == method).expect("method not found")
}

#[test]
fn lowers_pure_function_into_program_class() {
    let unit = lower_source("pure function add(a: int, b: int) -> int { return a + b }");
    let method = find_method(&unit, MODULES_ROOT, "Program", "add");
    assert_eq!(method.return_type, "int");
    assert_eq!(method.params.len(), 2);
}

#[test]
fn rejects_pure_function_declaring_effects() {
    let tokens = lexer::lex("pure function bad() -> int uses Network { return 1 }").unwrap();
    let program = parser::parse(&tokens).unwrap();
    let err = lower(&program).unwrap_err();
    assert!(matches!(err, Error::Lower { .. }));
}

#[test]
fn propagate_desugars_into_three_statements() {
    let unit = lower_source(
        "function run() -> Result<int, string> { let x = compute()? return Ok(x) }",
    );
    let method = find_method(&unit, MODULES_ROOT, "Program", "run");
    // var x_result = compute(); if (x_result.IsError) return ...; var x = x_result.Value; return Ok(x);
    assert_eq!(method.body.len(), 4);
    assert!(matches!(method.body[0], CsStmt::VarDecl { .. }));
    assert!(matches!(method.body[1], CsStmt::If { .. }));
    assert!(matches!(method.body[2], CsStmt::VarDecl { .. }));
    assert!(matches!(method.body[3], CsStmt::Return(Some(_))));
}

#[test]
fn match_on_result_lowers_to_ternary() {
    let unit = lower_source(
        r#"function describe(r: Result<int, string>) -> string {
            return match r {
                Ok(v) -> "ok",
                Error(e) -> e,
            }
        }"#,
    );
    let method = find_method(&unit, MODULES_ROOT, "Program", "describe");
    match &method.body[0] {
        CsStmt::Return(Some(CsExpr::Ternary { .. })) => {}
        other => panic!("expected a ternary return, got {other:?}"),
    }
}

#[test]
fn module_qualified_call_resolves_namespace() {
    let unit = lower_source(
        r#"
        module mathutils {
            pure function square(x: int) -> int { return x * x }
        }
        function run() -> int { return mathutils.square(3) }
        "#,
    );
    let method = find_method(&unit, MODULES_ROOT, "Program", "run");
    match &method.body[0] {
        CsStmt::Return(Some(CsExpr::Call { callee, .. })) => {
            let CsExpr::Ident(name) = callee.as_ref() else { panic!("expected plain call name") };
            assert_eq!(name, "Cadenza.Generated.mathutils.mathutils.square");
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn imported_symbol_resolves_to_owning_module() {
    let unit = lower_source(
        r#"
        import { square } from "mathutils"
        module mathutils {
            pure function square(x: int) -> int { return x * x }
        }
        function run() -> int { return square(4) }
        "#,
    );
    let method = find_method(&unit, MODULES_ROOT, "Program", "run");
    match &method.body[0] {
        CsStmt::Return(Some(CsExpr::Call { callee, .. })) => {
            let CsExpr::Ident(name) = callee.as_ref() else { panic!("expected plain call name") };
            assert_eq!(name, "Cadenza.Generated.mathutils.mathutils.square");
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn dot_length_rewrites_to_count() {
    let unit = lower_source("function size(items: List<int>) -> int { return items.length }");
    let method = find_method(&unit, MODULES_ROOT, "Program", "size");
    match &method.body[0] {
        CsStmt::Return(Some(CsExpr::MemberAccess { member, .. })) => assert_eq!(member, "Count"),
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn entry_point_is_synthesized_for_main() {
    let unit = lower_source("function main() -> Unit { return }");
    let class = unit
        .namespaces
        .iter()
        .find(|n| n.name == MODULES_ROOT)
        .unwrap()
        .classes
        .iter()
        .find(|c| c.name == "Program")
        .unwrap();
    assert!(class.methods.iter().any(|m| m.name == "Main"));
}

#[test]
fn carrier_classes_are_always_present() {
    let unit = lower_source("pure function noop() -> Unit { return }");
    let runtime = unit.namespaces.iter().find(|n| n.name == RUNTIME_NAMESPACE).unwrap();
    let names: Vec<_> = runtime.classes.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Result"));
    assert!(names.contains(&"Option"));
    assert!(names.contains(&"CadenzaRuntime"));
}

#[test]
fn full_pipeline_emits_well_formed_text() {
    let tokens = lexer::lex("pure function add(a: int, b: int) -> int { return a + b }").unwrap();
    let program = parser::parse(&tokens).unwrap();
    let unit = lower(&program).unwrap();
    let text = emit::emit(&unit);
    assert!(text.contains("namespace Cadenza.Generated"));
    assert!(text.contains("public static int add(int a, int b)"));
}
