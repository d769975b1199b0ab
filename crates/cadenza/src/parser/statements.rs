//! Statement and block parsing.

use super::expressions::remap_positions;
use super::Parser;
use crate::ast::{Expr, Stmt};
use crate::error::{Error, Position};
use crate::lexer::TokenKind;

impl<'a> Parser<'a> {
    pub(super) fn parse_block(&mut self) -> Result<Vec<Stmt>, Error> {
        self.expect(TokenKind::BraceOpen, "expected '{' to begin a block")?;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::BraceClose) {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(TokenKind::BraceClose, "expected '}' to close a block")?;
        Ok(stmts)
    }

    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, Error> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::Return => {
                self.advance();
                let value = if self.at_stmt_end() { None } else { Some(self.parse_expr()?) };
                self.eat_semicolon();
                Ok(Stmt::Return(value, tok.position))
            }
            TokenKind::Let => {
                self.advance();
                let name = self.expect(TokenKind::Identifier, "expected a variable name after 'let'")?.lexeme;
                self.expect(TokenKind::Equals, "expected '=' after 'let' binding name")?;
                let value = self.parse_expr()?;
                self.eat_semicolon();
                Ok(Stmt::Let { name, value, position: tok.position })
            }
            TokenKind::Guard => {
                self.advance();
                let condition = self.parse_expr()?;
                self.expect(TokenKind::Else, "expected 'else' after 'guard' condition")?;
                let else_body = self.parse_block()?;
                Ok(Stmt::Guard { condition, else_body, position: tok.position })
            }
            TokenKind::If => {
                self.advance();
                let condition = self.parse_expr()?;
                let then_body = self.parse_block()?;
                let else_body = if self.check(TokenKind::Else) {
                    self.advance();
                    if self.check(TokenKind::If) {
                        Some(vec![self.parse_stmt()?])
                    } else {
                        Some(self.parse_block()?)
                    }
                } else {
                    None
                };
                Ok(Stmt::If { condition, then_body, else_body, position: tok.position })
            }
            _ => {
                let expr = self.parse_expr()?;
                self.eat_semicolon();
                Ok(Stmt::Expr(expr))
            }
        }
    }

    fn at_stmt_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::BraceClose | TokenKind::Semicolon | TokenKind::Eof)
    }

    fn eat_semicolon(&mut self) {
        if self.check(TokenKind::Semicolon) {
            self.advance();
        }
    }
}

pub(super) fn remap_stmt_positions(stmt: &mut Stmt, base: Position) {
    match stmt {
        Stmt::Return(value, position) => {
            if let Some(expr) = value {
                remap_positions(expr, base);
            }
            *position = crate::lexer::translate_position(base, *position);
        }
        Stmt::Let { value, position, .. } => {
            remap_positions(value, base);
            *position = crate::lexer::translate_position(base, *position);
        }
        Stmt::Guard { condition, else_body, position } => {
            remap_positions(condition, base);
            else_body.iter_mut().for_each(|s| remap_stmt_positions(s, base));
            *position = crate::lexer::translate_position(base, *position);
        }
        Stmt::If { condition, then_body, else_body, position } => {
            remap_positions(condition, base);
            then_body.iter_mut().for_each(|s| remap_stmt_positions(s, base));
            if let Some(body) = else_body {
                body.iter_mut().for_each(|s| remap_stmt_positions(s, base));
            }
            *position = crate::lexer::translate_position(base, *position);
        }
        Stmt::Expr(expr) => remap_positions(expr, base),
    }
}
