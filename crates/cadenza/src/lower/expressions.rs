//! Lowering of Cadenza expressions into C# target expressions.

use super::target::{CsExpr, CsInterpPart};
use super::Context;
use crate::ast::{self, BinOp, Expr, UnOp};
use crate::error::Error;

pub(super) fn lower_expr(expr: &Expr, ctx: &mut Context) -> Result<CsExpr, Error> {
    match expr {
        Expr::IntLit(v, _) => Ok(CsExpr::IntLit(*v)),
        Expr::DecimalLit(v, _) => Ok(CsExpr::DecimalLit(*v)),
        Expr::StringLit(v, _) => Ok(CsExpr::StringLit(v.clone())),
        Expr::BoolLit(v, _) => Ok(CsExpr::BoolLit(*v)),
        Expr::Identifier(name, _) => {
            if let Some(bound) = ctx.bindings.get(name) {
                Ok(bound.clone())
            } else {
                Ok(CsExpr::Ident(name.clone()))
            }
        }
        Expr::Call { callee, args, .. } => lower_call(callee, args, ctx),
        Expr::MethodCall { receiver, method, args, .. } => Ok(CsExpr::MethodCall {
            receiver: Box::new(lower_expr(receiver, ctx)?),
            method: method.clone(),
            args: args.iter().map(|a| lower_expr(a, ctx)).collect::<Result<_, _>>()?,
        }),
        Expr::MemberAccess { receiver, member, .. } => {
            let member = if member == "length" { "Count".to_string() } else { member.clone() };
            Ok(CsExpr::MemberAccess { receiver: Box::new(lower_expr(receiver, ctx)?), member })
        }
        Expr::ListLit(items, _) => Ok(CsExpr::ListLit {
            element_type: "int".to_string(),
            items: items.iter().map(|i| lower_expr(i, ctx)).collect::<Result<_, _>>()?,
        }),
        Expr::Index { receiver, index, .. } => Ok(CsExpr::Index {
            receiver: Box::new(lower_expr(receiver, ctx)?),
            index: Box::new(lower_expr(index, ctx)?),
        }),
        Expr::Binary { op, left, right, .. } => lower_binary(*op, left, right, ctx),
        Expr::Unary { op, operand, .. } => {
            let cs_op = match op {
                UnOp::Neg => "-",
                UnOp::Not => "!",
            };
            Ok(CsExpr::Unary { op: cs_op, operand: Box::new(lower_expr(operand, ctx)?) })
        }
        Expr::Interpolation(parts, _) => {
            let mut cs_parts = Vec::with_capacity(parts.len());
            for part in parts {
                cs_parts.push(match part {
                    ast::InterpPart::Text(s) => CsInterpPart::Text(s.clone()),
                    ast::InterpPart::Expr(e) => CsInterpPart::Expr(lower_expr(e, ctx)?),
                });
            }
            Ok(CsExpr::InterpolatedString(cs_parts))
        }
        Expr::Ok(inner, _) => {
            let (ok, err) = super::current_result_generics(ctx);
            Ok(CsExpr::call(format!("Result.Ok<{ok}, {err}>"), vec![lower_expr(inner, ctx)?]))
        }
        Expr::Error(inner, _) => {
            let (ok, err) = super::current_result_generics(ctx);
            Ok(CsExpr::call(format!("Result.Error<{ok}, {err}>"), vec![lower_expr(inner, ctx)?]))
        }
        Expr::Some(inner, _) => {
            let inner_ty = super::current_option_generic(ctx);
            Ok(CsExpr::call(format!("Option.Some<{inner_ty}>"), vec![lower_expr(inner, ctx)?]))
        }
        Expr::None(_) => {
            let inner_ty = super::current_option_generic(ctx);
            Ok(CsExpr::call(format!("Option.None<{inner_ty}>"), vec![]))
        }
        Expr::Propagate(inner, _) => {
            let lowered = lower_expr(inner, ctx)?;
            Ok(CsExpr::call("CadenzaRuntime.Unwrap", vec![lowered]))
        }
        Expr::Match { scrutinee, cases, position } => super::match_lower::lower_match(scrutinee, cases, *position, ctx),
    }
}

fn lower_call(callee: &Expr, args: &[Expr], ctx: &mut Context) -> Result<CsExpr, Error> {
    let lowered_args = args.iter().map(|a| lower_expr(a, ctx)).collect::<Result<Vec<_>, _>>()?;
    let callee_text = match callee {
        Expr::Identifier(name, _) => resolve_call_name(name, ctx),
        Expr::MemberAccess { receiver, member, .. } => {
            if let Expr::Identifier(module_name, _) = receiver.as_ref() {
                if let Some(namespace) = ctx.module_namespace.get(module_name) {
                    Some(format!("{namespace}.{module_name}.{member}"))
                } else {
                    None
                }
            } else {
                None
            }
        }
        _ => None,
    };
    if let Some(name) = callee_text {
        return Ok(CsExpr::Call { callee: Box::new(CsExpr::Ident(name)), args: lowered_args });
    }
    Ok(CsExpr::Call { callee: Box::new(lower_expr(callee, ctx)?), args: lowered_args })
}

/// Resolves a bare call name: an imported symbol is qualified with its
/// module's namespace and class; anything else is assumed to be callable
/// unqualified (a sibling function in the same class).
fn resolve_call_name(name: &str, ctx: &Context) -> Option<String> {
    if let Some(module) = ctx.imports.get(name) {
        let namespace = ctx.module_namespace.get(module)?;
        return Some(format!("{namespace}.{module}.{name}"));
    }
    if ctx.local_functions.contains(name) {
        return None;
    }
    let module = ctx.wildcard_module.as_ref()?;
    let namespace = ctx.module_namespace.get(module)?;
    Some(format!("{namespace}.{module}.{name}"))
}

fn lower_binary(op: BinOp, left: &Expr, right: &Expr, ctx: &mut Context) -> Result<CsExpr, Error> {
    let cs_op = match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Rem => "%",
        BinOp::Eq => "==",
        BinOp::NotEq => "!=",
        BinOp::Lt => "<",
        BinOp::LtEq => "<=",
        BinOp::Gt => ">",
        BinOp::GtEq => ">=",
        BinOp::And => "&&",
        BinOp::Or => "||",
    };
    let is_comparison_or_logical = !matches!(op, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Rem);
    let left_cs = lower_operand(left, ctx, is_comparison_or_logical)?;
    let right_cs = lower_operand(right, ctx, is_comparison_or_logical)?;
    Ok(CsExpr::Binary { op: cs_op, left: Box::new(left_cs), right: Box::new(right_cs) })
}

/// Parenthesizes an arithmetic sub-expression used as the operand of a
/// comparison or logical operator, so precedence survives C# re-printing.
fn lower_operand(expr: &Expr, ctx: &mut Context, parent_is_comparison_or_logical: bool) -> Result<CsExpr, Error> {
    let lowered = lower_expr(expr, ctx)?;
    let is_arithmetic = matches!(
        expr,
        Expr::Binary { op: BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Rem, .. }
    );
    if parent_is_comparison_or_logical && is_arithmetic {
        Ok(lowered.paren())
    } else {
        Ok(lowered)
    }
}
