//! A small C# syntax tree: just enough structure for [`crate::emit`] to
//! print well-formed, readably indented C#. Types are plain strings rather
//! than a structured type system — lowering already resolved every type to
//! its C# spelling (including generic argument lists) before building these
//! nodes, so there is nothing left for the target model to check.

#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub namespaces: Vec<CsNamespace>,
}

#[derive(Debug, Clone)]
pub struct CsNamespace {
    pub name: String,
    pub classes: Vec<CsClass>,
}

#[derive(Debug, Clone)]
pub struct CsClass {
    pub name: String,
    pub generics: Vec<String>,
    pub is_static: bool,
    pub doc: Vec<String>,
    pub fields: Vec<CsField>,
    pub methods: Vec<CsMethod>,
    pub nested: Vec<CsClass>,
}

impl CsClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            is_static: false,
            doc: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsField {
    pub modifiers: String,
    pub ty: String,
    pub name: String,
    pub initializer: Option<CsExpr>,
}

#[derive(Debug, Clone)]
pub struct CsParam {
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CsMethod {
    pub name: String,
    pub is_static: bool,
    pub generics: Vec<String>,
    pub doc: Vec<String>,
    pub return_type: String,
    pub params: Vec<CsParam>,
    pub body: Vec<CsStmt>,
}

impl CsMethod {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            generics: Vec::new(),
            doc: Vec::new(),
            return_type: return_type.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum CsStmt {
    Expr(CsExpr),
    VarDecl { name: String, value: CsExpr },
    Return(Option<CsExpr>),
    If { condition: CsExpr, then_body: Vec<CsStmt>, else_body: Option<Vec<CsStmt>> },
    /// An escape hatch for fixed text (e.g. a `// TODO` left by a fallback
    /// lowering). Used sparingly, never for anything a node above could
    /// express structurally.
    Raw(String),
}

#[derive(Debug, Clone)]
pub enum CsExpr {
    IntLit(i64),
    DecimalLit(f64),
    StringLit(String),
    BoolLit(bool),
    Null,
    Ident(String),
    Call { callee: Box<CsExpr>, args: Vec<CsExpr> },
    MethodCall { receiver: Box<CsExpr>, method: String, args: Vec<CsExpr> },
    MemberAccess { receiver: Box<CsExpr>, member: String },
    New { type_name: String, args: Vec<CsExpr> },
    ListLit { element_type: String, items: Vec<CsExpr> },
    Index { receiver: Box<CsExpr>, index: Box<CsExpr> },
    Binary { op: &'static str, left: Box<CsExpr>, right: Box<CsExpr> },
    Unary { op: &'static str, operand: Box<CsExpr> },
    Ternary { condition: Box<CsExpr>, then_branch: Box<CsExpr>, else_branch: Box<CsExpr> },
    Paren(Box<CsExpr>),
    InterpolatedString(Vec<CsInterpPart>),
}

#[derive(Debug, Clone)]
pub enum CsInterpPart {
    Text(String),
    Expr(CsExpr),
}

impl CsExpr {
    pub fn paren(self) -> CsExpr {
        CsExpr::Paren(Box::new(self))
    }

    pub fn call(callee: impl Into<String>, args: Vec<CsExpr>) -> CsExpr {
        CsExpr::Call { callee: Box::new(CsExpr::Ident(callee.into())), args }
    }
}
