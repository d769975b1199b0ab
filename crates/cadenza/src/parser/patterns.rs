//! Parsing of `match` arm patterns.

use super::Parser;
use crate::ast::Pattern;
use crate::error::Error;
use crate::lexer::{Literal, TokenKind};

impl<'a> Parser<'a> {
    pub(super) fn parse_pattern(&mut self) -> Result<Pattern, Error> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::KwOk => {
                self.advance();
                let binding = self.parse_constructor_binding()?;
                Ok(Pattern::Ok(binding))
            }
            TokenKind::KwError => {
                self.advance();
                let binding = self.parse_constructor_binding()?;
                Ok(Pattern::Error(binding))
            }
            TokenKind::KwSome => {
                self.advance();
                let binding = self.parse_constructor_binding()?;
                Ok(Pattern::Some(binding))
            }
            TokenKind::KwNone => {
                self.advance();
                Ok(Pattern::None)
            }
            TokenKind::IntLiteral => {
                self.advance();
                let value = match tok.literal {
                    Some(Literal::Int(v)) => v,
                    _ => unreachable!("int literal token without Literal::Int payload"),
                };
                Ok(Pattern::IntLit(value))
            }
            TokenKind::StringLiteral => {
                self.advance();
                let value = match tok.literal {
                    Some(Literal::Str(v)) => v,
                    _ => unreachable!("string literal token without Literal::Str payload"),
                };
                Ok(Pattern::StringLit(value))
            }
            TokenKind::Identifier if tok.lexeme == "_" => {
                self.advance();
                Ok(Pattern::Wildcard)
            }
            TokenKind::Identifier => {
                self.advance();
                if self.check(TokenKind::ParenOpen) {
                    let binding = self.parse_constructor_binding()?;
                    Ok(Pattern::Constructor { name: tok.lexeme, binding: Some(binding) })
                } else {
                    Ok(Pattern::Identifier(tok.lexeme))
                }
            }
            _ => Err(self.error(format!("expected a pattern, found '{}'", tok.lexeme))),
        }
    }

    /// Parses the `(binding)` that follows a constructor-style pattern head.
    fn parse_constructor_binding(&mut self) -> Result<String, Error> {
        self.expect(TokenKind::ParenOpen, "expected '(' after pattern constructor")?;
        let name = self.expect(TokenKind::Identifier, "expected a binding name")?.lexeme;
        self.expect(TokenKind::ParenClose, "expected ')' to close pattern constructor")?;
        Ok(name)
    }
}
