//! The Cadenza abstract syntax tree.
//!
//! Modeled as a single tagged union per declaration/statement/expression
//! kind rather than a class hierarchy, so lowering can match exhaustively
//! and the compiler catches unhandled cases at compile time.

mod spec_block;
mod types;

pub use spec_block::SpecBlock;
pub use types::Type;

use crate::error::Position;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Program {
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Decl {
    Module(ModuleDecl),
    Import(ImportDecl),
    Function(FunctionDecl),
    Component(ComponentDecl),
    AppState(AppStateDecl),
    ApiClient(ApiClientDecl),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ModuleDecl {
    pub name: String,
    pub decls: Vec<Decl>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum ImportKind {
    /// `import { a, b } from "module"`
    Named(Vec<String>),
    /// `import * from "module"`
    Wildcard,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ImportDecl {
    pub kind: ImportKind,
    pub module: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FunctionDecl {
    pub name: String,
    pub is_pure: bool,
    pub is_exported: bool,
    pub effects: Vec<String>,
    pub params: Vec<Param>,
    pub return_type: Type,
    pub body: Vec<Stmt>,
    pub spec: Option<SpecBlock>,
    pub position: Position,
}

/// `component`/`state`/`events`/`render`/`on_mount`/`event_handler` blocks.
/// Recognized structurally by the parser but not semantically lowered: the
/// core pipeline transpiles pure/effectful functions and data flow, not UI
/// rendering, so lowering treats a `ComponentDecl` as opaque.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ComponentDecl {
    pub name: String,
    pub raw_body: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AppStateDecl {
    pub name: String,
    pub raw_body: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ApiClientDecl {
    pub name: String,
    pub raw_body: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Stmt {
    Return(Option<Expr>, Position),
    Let { name: String, value: Expr, position: Position },
    Guard { condition: Expr, else_body: Vec<Stmt>, position: Position },
    If { condition: Expr, then_body: Vec<Stmt>, else_body: Option<Vec<Stmt>>, position: Position },
    Expr(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum UnOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Expr {
    IntLit(i64, Position),
    DecimalLit(f64, Position),
    StringLit(String, Position),
    BoolLit(bool, Position),
    Identifier(String, Position),
    Call { callee: Box<Expr>, args: Vec<Expr>, position: Position },
    MethodCall { receiver: Box<Expr>, method: String, args: Vec<Expr>, position: Position },
    MemberAccess { receiver: Box<Expr>, member: String, position: Position },
    ListLit(Vec<Expr>, Position),
    Index { receiver: Box<Expr>, index: Box<Expr>, position: Position },
    Binary { op: BinOp, left: Box<Expr>, right: Box<Expr>, position: Position },
    Unary { op: UnOp, operand: Box<Expr>, position: Position },
    Interpolation(Vec<InterpPart>, Position),
    Ok(Box<Expr>, Position),
    Error(Box<Expr>, Position),
    Some(Box<Expr>, Position),
    None(Position),
    Propagate(Box<Expr>, Position),
    Match { scrutinee: Box<Expr>, cases: Vec<MatchCase>, position: Position },
}

impl Expr {
    pub fn position(&self) -> Position {
        match self {
            Expr::IntLit(_, p)
            | Expr::DecimalLit(_, p)
            | Expr::StringLit(_, p)
            | Expr::BoolLit(_, p)
            | Expr::Identifier(_, p)
            | Expr::Call { position: p, .. }
            | Expr::MethodCall { position: p, .. }
            | Expr::MemberAccess { position: p, .. }
            | Expr::ListLit(_, p)
            | Expr::Index { position: p, .. }
            | Expr::Binary { position: p, .. }
            | Expr::Unary { position: p, .. }
            | Expr::Interpolation(_, p)
            | Expr::Ok(_, p)
            | Expr::Error(_, p)
            | Expr::Some(_, p)
            | Expr::None(p)
            | Expr::Propagate(_, p)
            | Expr::Match { position: p, .. } => *p,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum InterpPart {
    Text(String),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum Pattern {
    Ok(String),
    Error(String),
    Some(String),
    None,
    IntLit(i64),
    StringLit(String),
    Wildcard,
    Identifier(String),
    Constructor { name: String, binding: Option<String> },
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MatchCase {
    pub pattern: Pattern,
    pub body: MatchBody,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MatchBody {
    Expr(Expr),
    Block(Vec<Stmt>),
}
