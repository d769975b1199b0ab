//! Lowering of statement blocks, where error-propagation expands in place.

use super::expressions::lower_expr;
use super::target::{CsExpr, CsStmt};
use super::{propagate, Context};
use crate::ast::{Expr, Stmt};
use crate::error::Error;

pub(super) fn lower_block(stmts: &[Stmt], ctx: &mut Context) -> Result<Vec<CsStmt>, Error> {
    let mut out = Vec::new();
    for stmt in stmts {
        lower_stmt(stmt, ctx, &mut out)?;
    }
    Ok(out)
}

fn lower_stmt(stmt: &Stmt, ctx: &mut Context, out: &mut Vec<CsStmt>) -> Result<(), Error> {
    match stmt {
        Stmt::Return(value, _) => {
            let cs_value = value.as_ref().map(|v| lower_expr(v, ctx)).transpose()?;
            out.push(CsStmt::Return(cs_value));
        }
        Stmt::Let { name, value, .. } => {
            if let Expr::Propagate(inner, _) = value {
                propagate::lower_let_propagate(name, inner, ctx, out)?;
            } else {
                out.push(CsStmt::VarDecl { name: name.clone(), value: lower_expr(value, ctx)? });
            }
        }
        Stmt::Guard { condition, else_body, .. } => {
            let negated_operand = match condition {
                Expr::Binary { .. } => lower_expr(condition, ctx)?.paren(),
                _ => lower_expr(condition, ctx)?,
            };
            let cs_condition = CsExpr::Unary { op: "!", operand: Box::new(negated_operand) };
            let cs_else = lower_block(else_body, ctx)?;
            out.push(CsStmt::If { condition: cs_condition, then_body: cs_else, else_body: None });
        }
        Stmt::If { condition, then_body, else_body, .. } => {
            let cs_condition = lower_expr(condition, ctx)?;
            let cs_then = lower_block(then_body, ctx)?;
            let cs_else = else_body.as_ref().map(|body| lower_block(body, ctx)).transpose()?;
            out.push(CsStmt::If { condition: cs_condition, then_body: cs_then, else_body: cs_else });
        }
        Stmt::Expr(expr) => out.push(CsStmt::Expr(lower_expr(expr, ctx)?)),
    }
    Ok(())
}
