//! Hand-written character lexer for Cadenza source.
//!
//! Produces an ordered token stream terminated by [`TokenKind::Eof`]. Unlike
//! a regex/derive-based tokenizer, this lexer walks source one character at
//! a time so it can balance nested braces inside string interpolation and
//! capture `/*spec … spec*/` blocks verbatim.

mod scan;
mod token;

#[cfg(test)]
mod tests;

pub use token::{InterpFragment, Literal, Token, TokenKind};

use crate::error::{Error, Position};

/// Tokenizes `source`, returning tokens in source order ending in `Eof`.
pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    scan::Lexer::new(source).run()
}

/// Translates a position produced by re-lexing an interpolation fragment
/// (which always starts at 1:1) back into the coordinate space of the
/// original file, given the fragment's starting position `base`.
pub fn translate_position(base: Position, sub: Position) -> Position {
    if sub.line == 1 {
        Position::new(base.line, base.column + sub.column - 1)
    } else {
        Position::new(base.line + sub.line - 1, sub.column)
    }
}
