//! Lowering of `match` expressions over `Result`/`Option`.
//!
//! A two-arm match whose patterns are exactly `Ok`/`Error` (in either
//! order) or `Some`/`None` (in either order), with expression-bodied arms,
//! lowers to a single ternary. Anything wider — more arms, literal or
//! wildcard patterns, block-bodied arms — falls back to the first arm's
//! body, which is the documented minimum behavior for cases this pipeline
//! does not attempt to model exhaustively.

use super::expressions::lower_expr;
use super::target::CsExpr;
use super::Context;
use crate::ast::{Expr, MatchBody, MatchCase, Pattern};
use crate::error::{Error, Position};

pub(super) fn lower_match(scrutinee: &Expr, cases: &[MatchCase], position: Position, ctx: &mut Context) -> Result<CsExpr, Error> {
    if cases.len() == 2 {
        if let Some(result) = try_ternary(scrutinee, cases, ctx)? {
            return Ok(result);
        }
    }

    match &cases[0].body {
        MatchBody::Expr(e) => lower_expr(e, ctx),
        MatchBody::Block(_) => Err(Error::lower(
            "match expressions with more than two arms, non-Result/Option patterns, or block-bodied arms require an expression-bodied first arm to fall back to",
            position,
        )),
    }
}

fn try_ternary(scrutinee: &Expr, cases: &[MatchCase], ctx: &mut Context) -> Result<Option<CsExpr>, Error> {
    let (success, failure) = match (&cases[0].pattern, &cases[1].pattern) {
        (Pattern::Ok(_), Pattern::Error(_)) | (Pattern::Some(_), Pattern::None) => (&cases[0], &cases[1]),
        (Pattern::Error(_), Pattern::Ok(_)) | (Pattern::None, Pattern::Some(_)) => (&cases[1], &cases[0]),
        _ => return Ok(None),
    };
    let (success_body, failure_body) = match (&success.body, &failure.body) {
        (MatchBody::Expr(s), MatchBody::Expr(f)) => (s, f),
        _ => return Ok(None),
    };

    let scrutinee_cs = lower_expr(scrutinee, ctx)?;
    let is_result = matches!(success.pattern, Pattern::Ok(_));
    let success_binding = match &success.pattern {
        Pattern::Ok(name) | Pattern::Some(name) => Some(name.clone()),
        _ => None,
    };
    let failure_binding = match &failure.pattern {
        Pattern::Error(name) => Some(name.clone()),
        _ => None,
    };

    let value_accessor = CsExpr::MemberAccess { receiver: Box::new(scrutinee_cs.clone()), member: "Value".to_string() };
    let error_accessor = CsExpr::MemberAccess { receiver: Box::new(scrutinee_cs.clone()), member: "Error".to_string() };
    let condition_member = if is_result { "IsSuccess" } else { "IsSome" };
    let condition = CsExpr::MemberAccess { receiver: Box::new(scrutinee_cs), member: condition_member.to_string() };

    let success_cs = with_binding(ctx, success_binding, value_accessor, |ctx| lower_expr(success_body, ctx))?;
    let failure_cs = with_binding(ctx, failure_binding, error_accessor, |ctx| lower_expr(failure_body, ctx))?;

    Ok(Some(CsExpr::Ternary {
        condition: Box::new(condition),
        then_branch: Box::new(success_cs),
        else_branch: Box::new(failure_cs),
    }))
}

fn with_binding<F>(ctx: &mut Context, binding: Option<String>, value: CsExpr, f: F) -> Result<CsExpr, Error>
where
    F: FnOnce(&mut Context) -> Result<CsExpr, Error>,
{
    let Some(name) = binding else {
        return f(ctx);
    };
    let previous = ctx.bindings.insert(name.clone(), value);
    let result = f(ctx);
    match previous {
        Some(old) => {
            ctx.bindings.insert(name.clone(), old);
        }
        None => {
            ctx.bindings.shift_remove(&name);
        }
    }
    result
}
