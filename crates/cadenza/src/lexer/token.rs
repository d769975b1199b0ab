//! Token kinds and the token payload types produced by the lexer.

use crate::error::Position;

/// All token kinds the lexer can produce. Punctuation, keywords, and
/// literal-bearing kinds live side by side in one flat enum, matching the
/// "tokens first, kinds undifferentiated by role" shape a hand-written
/// lexer naturally produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Identifier,
    IntLiteral,
    DecimalLiteral,
    StringLiteral,
    InterpolatedString,
    SpecComment,

    // Keywords
    Function,
    Pure,
    Return,
    If,
    Else,
    Let,
    Guard,
    Match,
    Uses,
    Module,
    Import,
    Export,
    From,
    Component,
    State,
    Events,
    Render,
    OnMount,
    EventHandler,
    AppState,
    Action,
    Updates,
    ApiClient,
    Endpoint,
    For,
    In,
    Where,
    KwResult,
    KwOk,
    KwError,
    KwSome,
    KwNone,
    KwOption,
    KwList,

    // Primitive type keywords
    KwString,
    KwInt,
    KwBool,
    KwUnit,

    // Effect name keywords
    KwDatabase,
    KwNetwork,
    KwLogging,
    KwFileSystem,
    KwMemory,
    KwIO,

    // Punctuation / operators
    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Arrow,      // ->
    FatArrow,   // =>
    EqEq,       // ==
    NotEq,      // !=
    LtEq,       // <=
    GtEq,       // >=
    AndAnd,     // &&
    OrOr,       // ||
    Bang,       // !
    Question,   // ?
    Dot,        // .
    Comma,      // ,
    Semicolon,  // ;
    Colon,      // :
    Equals,     // =
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Lt,
    Gt,

    Eof,
}

impl TokenKind {
    /// The keyword, if `text` names one; `None` for ordinary identifiers.
    pub fn keyword_from_str(text: &str) -> Option<TokenKind> {
        use TokenKind::*;
        Some(match text {
            "function" => Function,
            "pure" => Pure,
            "return" => Return,
            "if" => If,
            "else" => Else,
            "let" => Let,
            "guard" => Guard,
            "match" => Match,
            "uses" => Uses,
            "module" => Module,
            "import" => Import,
            "export" => Export,
            "from" => From,
            "component" => Component,
            "state" => State,
            "events" => Events,
            "render" => Render,
            "on_mount" => OnMount,
            "event_handler" => EventHandler,
            "app_state" => AppState,
            "action" => Action,
            "updates" => Updates,
            "api_client" => ApiClient,
            "endpoint" => Endpoint,
            "for" => For,
            "in" => In,
            "where" => Where,
            "Result" => KwResult,
            "Ok" => KwOk,
            "Error" => KwError,
            "Some" => KwSome,
            "None" => KwNone,
            "Option" => KwOption,
            "List" => KwList,
            "string" => KwString,
            "int" => KwInt,
            "bool" => KwBool,
            "Unit" => KwUnit,
            "Database" => KwDatabase,
            "Network" => KwNetwork,
            "Logging" => KwLogging,
            "FileSystem" => KwFileSystem,
            "Memory" => KwMemory,
            "IO" => KwIO,
            _ => return None,
        })
    }
}

/// One fragment of an interpolated string: literal text, or a raw expression
/// slice to be re-lexed and re-parsed by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpFragment {
    Str(String),
    Expr { text: String, position: Position },
}

/// The decoded payload carried by literal-bearing tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Decimal(f64),
    Str(String),
    Interp(Vec<InterpFragment>),
    Spec(String),
}

/// A single token: kind, original lexeme, optional decoded literal, and the
/// position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self { kind, lexeme: lexeme.into(), literal: None, position }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }
}
