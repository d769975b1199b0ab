//! Cadenza: a lexer, parser, and C# code generator for the Cadenza language.
//!
//! # Example
//!
//! ```
//! let source = "pure function add(a: int, b: int) -> int { return a + b }";
//! let output = cadenza::compile(source).expect("valid program");
//! assert!(output.contains("int add(int a, int b)"));
//! ```

pub mod ast;
pub mod error;
pub mod emit;
pub mod lexer;
pub mod lower;
pub mod parser;

pub use error::{Error, Position};

/// Parses Cadenza source into a program AST.
///
/// Exposed separately from [`compile`] so a driver can inspect imports,
/// exports, and the presence of `main` without running full lowering.
pub fn parse(source: &str) -> Result<ast::Program, Error> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}

/// Compiles Cadenza source to a C# compilation unit.
pub fn compile(source: &str) -> Result<String, Error> {
    let program = parse(source)?;
    let unit = lower::lower(&program)?;
    Ok(emit::emit(&unit))
}
