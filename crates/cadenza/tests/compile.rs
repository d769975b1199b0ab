//! End-to-end compilation scenarios, source text in, C# text out.

fn compile(source: &str) -> String {
    cadenza::compile(source).expect("expected successful compilation")
}

#[test]
fn pure_arithmetic_function() {
    let output = compile("pure function add(a: int, b: int) -> int { return a + b }");
    assert!(output.contains("public static int add(int a, int b)"));
    assert!(output.contains("return a + b;"));
}

#[test]
fn error_propagation_chain() {
    let output = compile(indoc::indoc! {r#"
        function parse_and_double(text: string) -> Result<int, string> {
            let n = parse(text)?
            return Ok(n * 2)
        }
    "#});
    assert!(output.contains("var n_result = parse(text);"));
    assert!(output.contains("if (n_result.IsError)"));
    assert!(output.contains("return Result.Error<int, string>(n_result.Error);"));
    assert!(output.contains("var n = n_result.Value;"));
    assert!(output.contains("return Result.Ok<int, string>(n * 2);"));
}

#[test]
fn guard_clause_lowers_to_early_return() {
    let output = compile(indoc::indoc! {r#"
        function safe_div(a: int, b: int) -> Result<int, string> {
            guard b != 0 else { return Error("division by zero") }
            return Ok(a / b)
        }
    "#});
    assert!(output.contains("if (!(b != 0))"));
    assert!(output.contains("return Result.Error<int, string>(\"division by zero\");"));
}

#[test]
fn match_on_result_lowers_to_ternary() {
    let output = compile(indoc::indoc! {r#"
        function describe(r: Result<int, string>) -> int {
            return match r {
                Ok(v) -> v,
                Error(e) -> -1,
            }
        }
    "#});
    assert!(output.contains("return r.IsSuccess ? r.Value : -1;"));
}

#[test]
fn string_interpolation_with_expression_hole() {
    let output = compile(r#"function greet(name: string) -> string { return $"Hello, {name}!" }"#);
    assert!(output.contains("$\"Hello, {name}!\""));
}

#[test]
fn specification_comment_becomes_doc_comment() {
    let source = indoc::indoc! {r#"
        /*spec
        intent: doubles a number
        rule: result is always even
        spec*/
        pure function double(x: int) -> int { return x * 2 }
    "#};
    let output = compile(source);
    assert!(output.contains("/// doubles a number"));
    assert!(output.contains("/// Business Rules:"));
    assert!(output.contains("/// - result is always even"));
}

#[test]
fn single_line_spec_block_with_dashed_lists() {
    let source = indoc::indoc! {r#"
        /*spec intent: "add two" rules: - "commutative" postconditions: - "result = a+b" spec*/
        pure function add(a: int, b: int) -> int { return a + b }
    "#};
    let output = compile(source);
    assert!(output.contains("/// add two"));
    assert!(output.contains("/// Business Rules:"));
    assert!(output.contains("/// - commutative"));
    assert!(output.contains("/// Expected Outcomes:"));
    assert!(output.contains("/// - result = a+b"));
}

#[test]
fn pure_function_without_spec_documents_no_side_effects() {
    let output = compile("pure function square(x: int) -> int { return x * x }");
    assert!(output.contains("/// Pure function - no side effects"));
}

#[test]
fn module_namespaces_and_qualified_calls() {
    let output = compile(indoc::indoc! {r#"
        module mathutils {
            pure function square(x: int) -> int { return x * x }
        }
        function run() -> int { return mathutils.square(5) }
    "#});
    assert!(output.contains("namespace Cadenza.Generated.mathutils"));
    assert!(output.contains("Cadenza.Generated.mathutils.mathutils.square(5)"));
}

#[test]
fn entry_point_invokes_declared_main() {
    let output = compile("function main() -> Unit { return }");
    assert!(output.contains("public static void Main(string[] args)"));
    assert!(output.contains("main();"));
}

#[test]
fn orphan_specification_comment_is_rejected() {
    let err = cadenza::parse("/*spec intent: unused spec*/").unwrap_err();
    assert!(matches!(err, cadenza::Error::Parse { .. }));
}

#[test]
fn pure_function_with_effects_is_rejected_at_lowering() {
    let err = cadenza::compile("pure function bad() -> int uses Network { return 1 }").unwrap_err();
    assert!(matches!(err, cadenza::Error::Lower { .. }));
}

#[test]
fn parsing_is_deterministic() {
    let source = "pure function add(a: int, b: int) -> int { return a + b }";
    let first = cadenza::parse(source).unwrap();
    let second = cadenza::parse(source).unwrap();
    assert_eq!(first, second);
}
