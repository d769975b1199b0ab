//! Synthesis of the `Result<T, E>` and `Option<T>` carrier types every
//! compilation unit gets, plus their non-generic static factory classes
//! (`Result.Ok<T, E>(...)`, `Option.Some<T>(...)`, etc.) so call sites never
//! have to spell the instance constructor.

use super::target::{CsClass, CsExpr, CsField, CsMethod, CsParam, CsStmt};

pub fn result_instance_class() -> CsClass {
    let mut class = CsClass::new("Result");
    class.generics = vec!["T".to_string(), "E".to_string()];
    class.doc = vec!["Carries either a success value of type T or an error of type E.".to_string()];
    class.fields = vec![
        CsField { modifiers: "public readonly".to_string(), ty: "bool".to_string(), name: "IsError".to_string(), initializer: None },
        CsField { modifiers: "public readonly".to_string(), ty: "bool".to_string(), name: "IsSuccess".to_string(), initializer: None },
        CsField { modifiers: "public readonly".to_string(), ty: "T".to_string(), name: "Value".to_string(), initializer: None },
        CsField { modifiers: "public readonly".to_string(), ty: "E".to_string(), name: "Error".to_string(), initializer: None },
    ];
    let mut ctor = CsMethod::new("Result", "");
    ctor.params = vec![
        CsParam { ty: "bool".to_string(), name: "isError".to_string() },
        CsParam { ty: "T".to_string(), name: "value".to_string() },
        CsParam { ty: "E".to_string(), name: "error".to_string() },
    ];
    ctor.body = vec![
        CsStmt::Raw("IsError = isError;".to_string()),
        CsStmt::Raw("IsSuccess = !isError;".to_string()),
        CsStmt::Raw("Value = value;".to_string()),
        CsStmt::Raw("Error = error;".to_string()),
    ];
    class.methods = vec![ctor];
    class
}

pub fn result_factory_class() -> CsClass {
    let mut class = CsClass::new("Result");
    class.is_static = true;
    class.doc = vec!["Factory helpers for constructing `Result<T, E>` values.".to_string()];

    let mut ok = CsMethod::new("Ok", "Result<T, E>");
    ok.is_static = true;
    ok.generics = vec!["T".to_string(), "E".to_string()];
    ok.params = vec![CsParam { ty: "T".to_string(), name: "value".to_string() }];
    ok.body = vec![CsStmt::Return(Some(CsExpr::New {
        type_name: "Result<T, E>".to_string(),
        args: vec![CsExpr::BoolLit(false), CsExpr::Ident("value".to_string()), CsExpr::Ident("default".to_string())],
    }))];

    let mut error = CsMethod::new("Error", "Result<T, E>");
    error.is_static = true;
    error.generics = vec!["T".to_string(), "E".to_string()];
    error.params = vec![CsParam { ty: "E".to_string(), name: "error".to_string() }];
    error.body = vec![CsStmt::Return(Some(CsExpr::New {
        type_name: "Result<T, E>".to_string(),
        args: vec![CsExpr::BoolLit(true), CsExpr::Ident("default".to_string()), CsExpr::Ident("error".to_string())],
    }))];

    class.methods = vec![ok, error];
    class
}

pub fn option_instance_class() -> CsClass {
    let mut class = CsClass::new("Option");
    class.generics = vec!["T".to_string()];
    class.doc = vec!["Carries an optional value of type T.".to_string()];
    class.fields = vec![
        CsField { modifiers: "public readonly".to_string(), ty: "bool".to_string(), name: "IsSome".to_string(), initializer: None },
        CsField { modifiers: "public readonly".to_string(), ty: "T".to_string(), name: "Value".to_string(), initializer: None },
    ];
    let mut ctor = CsMethod::new("Option", "");
    ctor.params = vec![
        CsParam { ty: "bool".to_string(), name: "isSome".to_string() },
        CsParam { ty: "T".to_string(), name: "value".to_string() },
    ];
    ctor.body = vec![CsStmt::Raw("IsSome = isSome;".to_string()), CsStmt::Raw("Value = value;".to_string())];
    class.methods = vec![ctor];
    class
}

pub fn option_factory_class() -> CsClass {
    let mut class = CsClass::new("Option");
    class.is_static = true;
    class.doc = vec!["Factory helpers for constructing `Option<T>` values.".to_string()];

    let mut some = CsMethod::new("Some", "Option<T>");
    some.is_static = true;
    some.generics = vec!["T".to_string()];
    some.params = vec![CsParam { ty: "T".to_string(), name: "value".to_string() }];
    some.body = vec![CsStmt::Return(Some(CsExpr::New {
        type_name: "Option<T>".to_string(),
        args: vec![CsExpr::BoolLit(true), CsExpr::Ident("value".to_string())],
    }))];

    let mut none = CsMethod::new("None", "Option<T>");
    none.is_static = true;
    none.generics = vec!["T".to_string()];
    none.body = vec![CsStmt::Return(Some(CsExpr::New {
        type_name: "Option<T>".to_string(),
        args: vec![CsExpr::BoolLit(false), CsExpr::Ident("default".to_string())],
    }))];

    class.methods = vec![some, none];
    class
}

/// Backs the `?` operator used outside statement position, where there is
/// no enclosing `let` to expand into the three-statement propagation form.
/// Throws at runtime instead of returning early.
pub fn runtime_helper_class() -> CsClass {
    let mut class = CsClass::new("CadenzaRuntime");
    class.is_static = true;
    class.doc = vec!["Runtime support for error-propagation used outside a `let` binding.".to_string()];

    let mut unwrap_result = CsMethod::new("Unwrap", "T");
    unwrap_result.is_static = true;
    unwrap_result.generics = vec!["T".to_string(), "E".to_string()];
    unwrap_result.params = vec![CsParam { ty: "Result<T, E>".to_string(), name: "result".to_string() }];
    unwrap_result.body = vec![
        CsStmt::If {
            condition: CsExpr::MemberAccess { receiver: Box::new(CsExpr::Ident("result".to_string())), member: "IsError".to_string() },
            then_body: vec![CsStmt::Raw(
                "throw new System.InvalidOperationException(result.Error?.ToString() ?? \"propagated error\");".to_string(),
            )],
            else_body: None,
        },
        CsStmt::Return(Some(CsExpr::MemberAccess { receiver: Box::new(CsExpr::Ident("result".to_string())), member: "Value".to_string() })),
    ];

    let mut unwrap_option = CsMethod::new("Unwrap", "T");
    unwrap_option.is_static = true;
    unwrap_option.generics = vec!["T".to_string()];
    unwrap_option.params = vec![CsParam { ty: "Option<T>".to_string(), name: "option".to_string() }];
    unwrap_option.body = vec![
        CsStmt::If {
            condition: CsExpr::Unary {
                op: "!",
                operand: Box::new(CsExpr::MemberAccess { receiver: Box::new(CsExpr::Ident("option".to_string())), member: "IsSome".to_string() }),
            },
            then_body: vec![CsStmt::Raw("throw new System.InvalidOperationException(\"propagated None\");".to_string())],
            else_body: None,
        },
        CsStmt::Return(Some(CsExpr::MemberAccess { receiver: Box::new(CsExpr::Ident("option".to_string())), member: "Value".to_string() })),
    ];

    class.methods = vec![unwrap_result, unwrap_option];
    class
}
