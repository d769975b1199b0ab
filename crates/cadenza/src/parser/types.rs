//! Parsing of `Name` / `Name<Arg, ...>` type syntax.

use super::Parser;
use crate::ast::Type;
use crate::error::Error;
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    pub(super) fn parse_type(&mut self) -> Result<Type, Error> {
        let name = self.parse_type_name()?;
        if self.check(TokenKind::Lt) {
            self.advance();
            let mut args = vec![self.parse_type()?];
            while self.check(TokenKind::Comma) {
                self.advance();
                args.push(self.parse_type()?);
            }
            self.expect(TokenKind::Gt, "expected '>' to close type argument list")?;
            Ok(Type::Generic { base: name, args })
        } else {
            Ok(Type::Named(name))
        }
    }

    fn parse_type_name(&mut self) -> Result<String, Error> {
        let tok = self.peek().clone();
        let name = match tok.kind {
            TokenKind::Identifier => tok.lexeme.clone(),
            TokenKind::KwResult => "Result".to_string(),
            TokenKind::KwOption => "Option".to_string(),
            TokenKind::KwList => "List".to_string(),
            TokenKind::KwString => "string".to_string(),
            TokenKind::KwInt => "int".to_string(),
            TokenKind::KwBool => "bool".to_string(),
            TokenKind::KwUnit => "Unit".to_string(),
            _ => return Err(self.error(format!("expected a type, found '{}'", tok.lexeme))),
        };
        self.advance();
        Ok(name)
    }
}
