//! Expression-to-text rendering and C# string-literal escaping.

use crate::lower::target::{CsExpr, CsInterpPart};

pub(super) fn render_expr(expr: &CsExpr) -> String {
    match expr {
        CsExpr::IntLit(v) => v.to_string(),
        CsExpr::DecimalLit(v) => {
            if v.fract() == 0.0 {
                format!("{v:.1}")
            } else {
                v.to_string()
            }
        }
        CsExpr::StringLit(s) => format!("\"{}\"", escape_plain(s)),
        CsExpr::BoolLit(true) => "true".to_string(),
        CsExpr::BoolLit(false) => "false".to_string(),
        CsExpr::Null => "default".to_string(),
        CsExpr::Ident(name) => name.clone(),
        CsExpr::Call { callee, args } => format!("{}({})", render_expr(callee), render_args(args)),
        CsExpr::MethodCall { receiver, method, args } => {
            format!("{}.{}({})", render_expr(receiver), method, render_args(args))
        }
        CsExpr::MemberAccess { receiver, member } => format!("{}.{member}", render_expr(receiver)),
        CsExpr::New { type_name, args } => format!("new {type_name}({})", render_args(args)),
        CsExpr::ListLit { element_type, items } => {
            if items.is_empty() {
                format!("new List<{element_type}>()")
            } else {
                format!("new List<{element_type}> {{ {} }}", render_args(items))
            }
        }
        CsExpr::Index { receiver, index } => format!("{}[{}]", render_expr(receiver), render_expr(index)),
        CsExpr::Binary { op, left, right } => format!("{} {op} {}", render_expr(left), render_expr(right)),
        CsExpr::Unary { op, operand } => format!("{op}{}", render_expr(operand)),
        CsExpr::Ternary { condition, then_branch, else_branch } => {
            format!("{} ? {} : {}", render_expr(condition), render_expr(then_branch), render_expr(else_branch))
        }
        CsExpr::Paren(inner) => format!("({})", render_expr(inner)),
        CsExpr::InterpolatedString(parts) => render_interpolated(parts),
    }
}

fn render_args(args: &[CsExpr]) -> String {
    args.iter().map(render_expr).collect::<Vec<_>>().join(", ")
}

fn render_interpolated(parts: &[CsInterpPart]) -> String {
    let mut out = String::from("$\"");
    for part in parts {
        match part {
            CsInterpPart::Text(text) => out.push_str(&escape_interpolated(text)),
            CsInterpPart::Expr(expr) => {
                out.push('{');
                out.push_str(&render_expr(expr));
                out.push('}');
            }
        }
    }
    out.push('"');
    out
}

fn escape_plain(text: &str) -> String {
    escape_with(text, false)
}

fn escape_interpolated(text: &str) -> String {
    escape_with(text, true)
}

fn escape_with(text: &str, double_braces: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '{' if double_braces => out.push_str("{{"),
            '}' if double_braces => out.push_str("}}"),
            other => out.push(other),
        }
    }
    out
}
