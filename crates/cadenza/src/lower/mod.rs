//! Syntax-directed lowering from the Cadenza AST to a C# compilation unit.
//!
//! Runs in two passes. Pass one walks declarations collecting import
//! bindings and the namespace each module maps to, without looking inside
//! any function body. Pass two walks declarations again, emitting C#
//! members and resolving every call site against the tables pass one
//! built.

mod carriers;
mod docs;
mod expressions;
mod functions;
mod match_lower;
mod propagate;
mod statements;
pub mod target;

#[cfg(test)]
mod tests;

use indexmap::IndexMap;

use crate::ast::{self, Decl, ModuleDecl, Program, Type};
use crate::error::Error;
use target::{CompilationUnit, CsClass, CsExpr, CsMethod, CsNamespace, CsParam, CsStmt};

/// Root namespace every generated module nests under.
const MODULES_ROOT: &str = "Cadenza.Generated";
/// Namespace holding the synthesized `Result`/`Option` carriers.
const RUNTIME_NAMESPACE: &str = "Cadenza.Runtime";

/// Transient state threaded through lowering. Never stored globally: a
/// fresh `Context` is built per compilation, and `current_return_type` /
/// `bindings` are scoped to the function or match arm being lowered.
pub(crate) struct Context {
    pub imports: IndexMap<String, String>,
    pub module_namespace: IndexMap<String, String>,
    pub wildcard_module: Option<String>,
    pub local_functions: indexmap::IndexSet<String>,
    pub current_return_type: Option<Type>,
    pub bindings: IndexMap<String, CsExpr>,
}

impl Context {
    fn new() -> Self {
        Self {
            imports: IndexMap::new(),
            module_namespace: IndexMap::new(),
            wildcard_module: None,
            local_functions: indexmap::IndexSet::new(),
            current_return_type: None,
            bindings: IndexMap::new(),
        }
    }
}

/// Lowers a parsed program into a C# compilation unit.
pub fn lower(program: &Program) -> Result<CompilationUnit, Error> {
    let mut ctx = Context::new();
    collect_decls(&program.decls, &mut ctx);

    let mut program_methods = Vec::new();
    let mut module_namespaces = Vec::new();
    for decl in &program.decls {
        match decl {
            Decl::Function(f) => program_methods.push(functions::lower_function(f, &mut ctx)?),
            Decl::Module(m) => module_namespaces.push(lower_module(m, &mut ctx)?),
            Decl::Import(_) | Decl::Component(_) | Decl::AppState(_) | Decl::ApiClient(_) => {}
        }
    }

    let mut program_class = CsClass::new("Program");
    program_class.is_static = true;
    program_class.methods = program_methods;

    let runtime_namespace = CsNamespace {
        name: RUNTIME_NAMESPACE.to_string(),
        classes: vec![
            carriers::result_instance_class(),
            carriers::result_factory_class(),
            carriers::option_instance_class(),
            carriers::option_factory_class(),
            carriers::runtime_helper_class(),
        ],
    };
    let root_namespace = CsNamespace { name: MODULES_ROOT.to_string(), classes: vec![program_class] };

    let mut unit = CompilationUnit { namespaces: vec![runtime_namespace, root_namespace] };
    unit.namespaces.extend(module_namespaces);
    add_entry_point(&mut unit);
    Ok(unit)
}

fn lower_module(module: &ModuleDecl, ctx: &mut Context) -> Result<CsNamespace, Error> {
    let namespace_name = ctx
        .module_namespace
        .get(&module.name)
        .cloned()
        .unwrap_or_else(|| format!("{MODULES_ROOT}.{}", module.name));

    let mut class = CsClass::new(module.name.clone());
    class.is_static = true;
    for decl in &module.decls {
        if let Decl::Function(f) = decl {
            class.methods.push(functions::lower_function(f, ctx)?);
        }
    }
    Ok(CsNamespace { name: namespace_name, classes: vec![class] })
}

/// Pass one: records every module's namespace and every imported symbol's
/// owning module, without lowering any function body.
fn collect_decls(decls: &[Decl], ctx: &mut Context) {
    for decl in decls {
        match decl {
            Decl::Module(m) => {
                ctx.module_namespace
                    .insert(m.name.clone(), format!("{MODULES_ROOT}.{}", m.name));
                collect_decls(&m.decls, ctx);
            }
            Decl::Import(import) => {
                let module = import.module.clone();
                match &import.kind {
                    ast::ImportKind::Named(names) => {
                        for name in names {
                            ctx.imports.insert(name.clone(), module.clone());
                        }
                    }
                    ast::ImportKind::Wildcard => ctx.wildcard_module = Some(module),
                }
            }
            Decl::Function(f) => {
                ctx.local_functions.insert(f.name.clone());
            }
            _ => {}
        }
    }
}

/// If any function named `main` with no parameters exists, gives its
/// containing class a conventional `Main(string[] args)` entry point that
/// invokes it.
fn add_entry_point(unit: &mut CompilationUnit) {
    for namespace in &mut unit.namespaces {
        for class in &mut namespace.classes {
            if class.methods.iter().any(|m| m.name == "main" && m.params.is_empty()) {
                let mut entry = CsMethod::new("Main", "void");
                entry.is_static = true;
                entry.params = vec![CsParam { ty: "string[]".to_string(), name: "args".to_string() }];
                entry.body = vec![CsStmt::Expr(CsExpr::call("main", vec![]))];
                class.methods.push(entry);
                return;
            }
        }
    }
}

fn type_to_csharp(ty: &Type) -> String {
    match ty {
        Type::Named(name) => Type::csharp_primitive(name).map(|s| s.to_string()).unwrap_or_else(|| name.clone()),
        Type::Generic { base, args } => {
            let inner = args.iter().map(type_to_csharp).collect::<Vec<_>>().join(", ");
            format!("{base}<{inner}>")
        }
    }
}

fn current_result_generics(ctx: &Context) -> (String, String) {
    if let Some(ty) = &ctx.current_return_type {
        if let Some((ok, err)) = ty.as_result() {
            return (type_to_csharp(ok), type_to_csharp(err));
        }
    }
    ("object".to_string(), "string".to_string())
}

fn current_option_generic(ctx: &Context) -> String {
    if let Some(ty) = &ctx.current_return_type {
        if let Some(inner) = ty.as_option() {
            return type_to_csharp(inner);
        }
        if let Some((ok, _)) = ty.as_result() {
            if let Some(inner) = ok.as_option() {
                return type_to_csharp(inner);
            }
        }
    }
    "object".to_string()
}
