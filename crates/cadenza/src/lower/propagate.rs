//! Desugaring of `let x = expr?`.
//!
//! Expands to three statements: capture the callee's `Result`, return early
//! (re-wrapped as the enclosing function's own `Result<Tsucc, Terr>`) if it
//! carries an error, otherwise bind the unwrapped value.

use super::expressions::lower_expr;
use super::target::{CsExpr, CsStmt};
use super::Context;
use crate::ast::Expr;
use crate::error::Error;

pub(super) fn lower_let_propagate(name: &str, inner: &Expr, ctx: &mut Context, out: &mut Vec<CsStmt>) -> Result<(), Error> {
    let result_var = format!("{name}_result");
    let inner_cs = lower_expr(inner, ctx)?;
    out.push(CsStmt::VarDecl { name: result_var.clone(), value: inner_cs });

    let (ok, err) = super::current_result_generics(ctx);
    let error_return = CsExpr::call(
        format!("Result.Error<{ok}, {err}>"),
        vec![CsExpr::MemberAccess { receiver: Box::new(CsExpr::Ident(result_var.clone())), member: "Error".to_string() }],
    );
    out.push(CsStmt::If {
        condition: CsExpr::MemberAccess { receiver: Box::new(CsExpr::Ident(result_var.clone())), member: "IsError".to_string() },
        then_body: vec![CsStmt::Return(Some(error_return))],
        else_body: None,
    });

    out.push(CsStmt::VarDecl {
        name: name.to_string(),
        value: CsExpr::MemberAccess { receiver: Box::new(CsExpr::Ident(result_var)), member: "Value".to_string() },
    });
    Ok(())
}
