//! Thin emission stage: walks the C# target tree and prints well-formed,
//! indented C# source text. No further analysis happens here — lowering
//! already decided every name, type, and control-flow shape.

mod expr;

#[cfg(test)]
mod tests;

use expr::render_expr;

use crate::lower::target::{CompilationUnit, CsClass, CsMethod, CsNamespace, CsStmt};

const INDENT: &str = "    ";

/// Renders a lowered compilation unit to C# source text.
pub fn emit(unit: &CompilationUnit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_unit(unit);
    emitter.output
}

struct Emitter {
    output: String,
    indent: usize,
}

impl Emitter {
    fn new() -> Self {
        Self { output: String::new(), indent: 0 }
    }

    fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.output.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn emit_unit(&mut self, unit: &CompilationUnit) {
        self.line("using System;");
        self.line("using System.Collections.Generic;");
        self.line("using Cadenza.Runtime;");
        for namespace in &unit.namespaces {
            if namespace.name != "Cadenza.Runtime" {
                self.line(&format!("using {};", namespace.name));
            }
        }
        self.line("");
        for namespace in &unit.namespaces {
            self.emit_namespace(namespace);
        }
    }

    fn emit_namespace(&mut self, namespace: &CsNamespace) {
        self.line(&format!("namespace {}", namespace.name));
        self.line("{");
        self.indent += 1;
        for (i, class) in namespace.classes.iter().enumerate() {
            if i > 0 {
                self.line("");
            }
            self.emit_class(class);
        }
        self.indent -= 1;
        self.line("}");
        self.line("");
    }

    fn emit_class(&mut self, class: &CsClass) {
        for doc in &class.doc {
            self.line(&format!("/// {doc}"));
        }
        let kind = if class.is_static { "static class" } else { "sealed class" };
        let generics = generics_suffix(&class.generics);
        self.line(&format!("public {kind} {}{generics}", class.name));
        self.line("{");
        self.indent += 1;
        for field in &class.fields {
            let initializer = field
                .initializer
                .as_ref()
                .map(|v| format!(" = {}", render_expr(v)))
                .unwrap_or_default();
            self.line(&format!("{} {} {}{};", field.modifiers, field.ty, field.name, initializer));
        }
        for (i, method) in class.methods.iter().enumerate() {
            if i > 0 || !class.fields.is_empty() {
                self.line("");
            }
            self.emit_method(method);
        }
        for nested in &class.nested {
            self.line("");
            self.emit_class(nested);
        }
        self.indent -= 1;
        self.line("}");
    }

    fn emit_method(&mut self, method: &CsMethod) {
        for doc in &method.doc {
            self.line(&format!("/// {doc}"));
        }
        let static_kw = if method.is_static { "static " } else { "" };
        let generics = generics_suffix(&method.generics);
        let params = method
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let signature = if method.return_type.is_empty() {
            format!("public {}({params})", method.name)
        } else {
            format!("public {static_kw}{} {}{generics}({params})", method.return_type, method.name)
        };
        self.line(&signature);
        self.line("{");
        self.indent += 1;
        for stmt in &method.body {
            self.emit_stmt(stmt);
        }
        self.indent -= 1;
        self.line("}");
    }

    fn emit_stmt(&mut self, stmt: &CsStmt) {
        match stmt {
            CsStmt::Expr(e) => self.line(&format!("{};", render_expr(e))),
            CsStmt::VarDecl { name, value } => self.line(&format!("var {name} = {};", render_expr(value))),
            CsStmt::Return(Some(e)) => self.line(&format!("return {};", render_expr(e))),
            CsStmt::Return(None) => self.line("return;"),
            CsStmt::If { condition, then_body, else_body } => {
                self.line(&format!("if ({})", render_expr(condition)));
                self.line("{");
                self.indent += 1;
                for s in then_body {
                    self.emit_stmt(s);
                }
                self.indent -= 1;
                self.line("}");
                if let Some(else_body) = else_body {
                    self.line("else");
                    self.line("{");
                    self.indent += 1;
                    for s in else_body {
                        self.emit_stmt(s);
                    }
                    self.indent -= 1;
                    self.line("}");
                }
            }
            CsStmt::Raw(text) => self.line(text),
        }
    }
}

fn generics_suffix(generics: &[String]) -> String {
    if generics.is_empty() {
        String::new()
    } else {
        format!("<{}>", generics.join(", "))
    }
}
