//! Lowering of a single function declaration into a C# method.

use super::target::{CsMethod, CsParam, CsStmt};
use super::{docs, statements, type_to_csharp, Context};
use crate::ast::FunctionDecl;
use crate::error::Error;

pub(super) fn lower_function(func: &FunctionDecl, ctx: &mut Context) -> Result<CsMethod, Error> {
    if func.is_pure && !func.effects.is_empty() {
        return Err(Error::lower(
            format!("pure function '{}' must not declare effects", func.name),
            func.position,
        ));
    }

    let return_type = type_to_csharp(&func.return_type);
    let params = func
        .params
        .iter()
        .map(|p| CsParam { ty: type_to_csharp(&p.ty), name: p.name.clone() })
        .collect();

    ctx.current_return_type = Some(func.return_type.clone());
    let mut body = statements::lower_block(&func.body, ctx)?;
    wrap_implicit_return(&mut body, &func.return_type);
    ctx.current_return_type = None;

    Ok(CsMethod {
        name: func.name.clone(),
        is_static: true,
        generics: Vec::new(),
        doc: docs::function_doc(func),
        return_type,
        params,
        body,
    })
}

/// If a function's last statement is a bare expression rather than an
/// explicit `return`/`if`/`guard`, and the function does not return `Unit`,
/// wrap it as the function's return value.
fn wrap_implicit_return(body: &mut [CsStmt], return_type: &crate::ast::Type) {
    if return_type.base_name() == "Unit" {
        return;
    }
    if let Some(last) = body.last_mut() {
        if let CsStmt::Expr(expr) = last {
            *last = CsStmt::Return(Some(expr.clone()));
        }
    }
}
