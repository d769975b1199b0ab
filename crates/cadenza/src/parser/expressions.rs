//! Precedence-climbing expression parser.
//!
//! Levels, loosest to tightest: logical or, logical and, equality,
//! relational, additive, multiplicative, unary, error-propagation postfix,
//! call/member/index postfix, primary.

use super::Parser;
use crate::ast::{BinOp, Expr, InterpPart, MatchBody, MatchCase, UnOp};
use crate::error::{Error, Position};
use crate::lexer::{self, InterpFragment, Literal, Token, TokenKind};

impl<'a> Parser<'a> {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, Error> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, Error> {
        self.parse_binary_level(Self::parse_and, &[(TokenKind::OrOr, BinOp::Or)])
    }

    fn parse_and(&mut self) -> Result<Expr, Error> {
        self.parse_binary_level(Self::parse_equality, &[(TokenKind::AndAnd, BinOp::And)])
    }

    fn parse_equality(&mut self) -> Result<Expr, Error> {
        self.parse_binary_level(
            Self::parse_relational,
            &[(TokenKind::EqEq, BinOp::Eq), (TokenKind::NotEq, BinOp::NotEq)],
        )
    }

    fn parse_relational(&mut self) -> Result<Expr, Error> {
        self.parse_binary_level(
            Self::parse_additive,
            &[
                (TokenKind::Lt, BinOp::Lt),
                (TokenKind::LtEq, BinOp::LtEq),
                (TokenKind::Gt, BinOp::Gt),
                (TokenKind::GtEq, BinOp::GtEq),
            ],
        )
    }

    fn parse_additive(&mut self) -> Result<Expr, Error> {
        self.parse_binary_level(
            Self::parse_multiplicative,
            &[(TokenKind::Plus, BinOp::Add), (TokenKind::Minus, BinOp::Sub)],
        )
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, Error> {
        self.parse_binary_level(
            Self::parse_unary,
            &[
                (TokenKind::Star, BinOp::Mul),
                (TokenKind::Slash, BinOp::Div),
                (TokenKind::Percent, BinOp::Rem),
            ],
        )
    }

    fn parse_binary_level(
        &mut self,
        next: fn(&mut Self) -> Result<Expr, Error>,
        ops: &[(TokenKind, BinOp)],
    ) -> Result<Expr, Error> {
        let mut left = next(self)?;
        loop {
            let kind = self.peek().kind;
            let matched = ops.iter().find(|(k, _)| *k == kind);
            let Some((_, op)) = matched else { break };
            let position = self.peek().position;
            self.advance();
            let right = next(self)?;
            left = Expr::Binary { op: *op, left: Box::new(left), right: Box::new(right), position };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, Error> {
        let tok = self.peek().clone();
        let op = match tok.kind {
            TokenKind::Minus => Some(UnOp::Neg),
            TokenKind::Bang => Some(UnOp::Not),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary { op, operand: Box::new(operand), position: tok.position });
        }
        self.parse_propagate()
    }

    fn parse_propagate(&mut self) -> Result<Expr, Error> {
        let mut expr = self.parse_postfix()?;
        while self.check(TokenKind::Question) {
            let position = self.peek().position;
            self.advance();
            expr = Expr::Propagate(Box::new(expr), position);
        }
        Ok(expr)
    }

    fn parse_postfix(&mut self) -> Result<Expr, Error> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.peek().kind {
                TokenKind::Dot => {
                    let position = self.peek().position;
                    self.advance();
                    let member = self.expect(TokenKind::Identifier, "expected a member name after '.'")?.lexeme;
                    if self.check(TokenKind::ParenOpen) {
                        let args = self.parse_call_args()?;
                        expr = Expr::MethodCall { receiver: Box::new(expr), method: member, args, position };
                    } else {
                        expr = Expr::MemberAccess { receiver: Box::new(expr), member, position };
                    }
                }
                TokenKind::ParenOpen => {
                    let position = self.peek().position;
                    let args = self.parse_call_args()?;
                    expr = Expr::Call { callee: Box::new(expr), args, position };
                }
                TokenKind::BracketOpen => {
                    let position = self.peek().position;
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect(TokenKind::BracketClose, "expected ']' to close index expression")?;
                    expr = Expr::Index { receiver: Box::new(expr), index: Box::new(index), position };
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_call_args(&mut self) -> Result<Vec<Expr>, Error> {
        self.expect(TokenKind::ParenOpen, "expected '('")?;
        let mut args = Vec::new();
        if !self.check(TokenKind::ParenClose) {
            args.push(self.parse_expr()?);
            while self.check(TokenKind::Comma) {
                self.advance();
                args.push(self.parse_expr()?);
            }
        }
        self.expect(TokenKind::ParenClose, "expected ')' to close argument list")?;
        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expr, Error> {
        let tok = self.peek().clone();
        match tok.kind {
            TokenKind::IntLiteral => {
                self.advance();
                let Some(Literal::Int(v)) = tok.literal else { unreachable!() };
                Ok(Expr::IntLit(v, tok.position))
            }
            TokenKind::DecimalLiteral => {
                self.advance();
                let Some(Literal::Decimal(v)) = tok.literal else { unreachable!() };
                Ok(Expr::DecimalLit(v, tok.position))
            }
            TokenKind::StringLiteral => {
                self.advance();
                let Some(Literal::Str(v)) = tok.literal else { unreachable!() };
                Ok(Expr::StringLit(v, tok.position))
            }
            TokenKind::InterpolatedString => {
                self.advance();
                let Some(Literal::Interp(fragments)) = tok.literal else { unreachable!() };
                self.build_interpolation(fragments, tok.position)
            }
            TokenKind::KwOk => {
                self.advance();
                let inner = self.parse_parenthesized_expr()?;
                Ok(Expr::Ok(Box::new(inner), tok.position))
            }
            TokenKind::KwError => {
                self.advance();
                let inner = self.parse_parenthesized_expr()?;
                Ok(Expr::Error(Box::new(inner), tok.position))
            }
            TokenKind::KwSome => {
                self.advance();
                let inner = self.parse_parenthesized_expr()?;
                Ok(Expr::Some(Box::new(inner), tok.position))
            }
            TokenKind::KwNone => {
                self.advance();
                Ok(Expr::None(tok.position))
            }
            TokenKind::Match => self.parse_match_expr(),
            TokenKind::BracketOpen => self.parse_list_literal(),
            TokenKind::ParenOpen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::ParenClose, "expected ')' to close parenthesized expression")?;
                Ok(inner)
            }
            TokenKind::Identifier if tok.lexeme == "true" => {
                self.advance();
                Ok(Expr::BoolLit(true, tok.position))
            }
            TokenKind::Identifier if tok.lexeme == "false" => {
                self.advance();
                Ok(Expr::BoolLit(false, tok.position))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Identifier(tok.lexeme, tok.position))
            }
            _ => Err(self.error(format!("expected an expression, found '{}'", tok.lexeme))),
        }
    }

    fn parse_parenthesized_expr(&mut self) -> Result<Expr, Error> {
        self.expect(TokenKind::ParenOpen, "expected '('")?;
        let inner = self.parse_expr()?;
        self.expect(TokenKind::ParenClose, "expected ')'")?;
        Ok(inner)
    }

    fn parse_list_literal(&mut self) -> Result<Expr, Error> {
        let position = self.peek().position;
        self.advance();
        let mut items = Vec::new();
        if !self.check(TokenKind::BracketClose) {
            items.push(self.parse_expr()?);
            while self.check(TokenKind::Comma) {
                self.advance();
                items.push(self.parse_expr()?);
            }
        }
        self.expect(TokenKind::BracketClose, "expected ']' to close list literal")?;
        Ok(Expr::ListLit(items, position))
    }

    fn parse_match_expr(&mut self) -> Result<Expr, Error> {
        let position = self.peek().position;
        self.advance();
        let scrutinee = self.parse_expr()?;
        self.expect(TokenKind::BraceOpen, "expected '{' to begin match arms")?;
        let mut cases = Vec::new();
        while !self.check(TokenKind::BraceClose) {
            let case_position = self.peek().position;
            let pattern = self.parse_pattern()?;
            self.expect(TokenKind::Arrow, "expected '->' after match pattern")?;
            let body = if self.check(TokenKind::BraceOpen) {
                MatchBody::Block(self.parse_block()?)
            } else {
                MatchBody::Expr(self.parse_expr()?)
            };
            cases.push(MatchCase { pattern, body, position: case_position });
            if self.check(TokenKind::Comma) {
                self.advance();
            }
        }
        self.expect(TokenKind::BraceClose, "expected '}' to close match arms")?;
        Ok(Expr::Match { scrutinee: Box::new(scrutinee), cases, position })
    }

    fn build_interpolation(&mut self, fragments: Vec<InterpFragment>, position: Position) -> Result<Expr, Error> {
        let mut parts = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            match fragment {
                InterpFragment::Str(text) => parts.push(InterpPart::Text(text)),
                InterpFragment::Expr { text, position: frag_position } => {
                    let expr = parse_embedded_expr(&text, frag_position)?;
                    parts.push(InterpPart::Expr(expr));
                }
            }
        }
        Ok(Expr::Interpolation(parts, position))
    }
}

/// Re-lexes and re-parses the raw text of an interpolation hole, remapping
/// every position in the resulting expression back into file coordinates.
fn parse_embedded_expr(text: &str, base: Position) -> Result<Expr, Error> {
    let tokens: Vec<Token> = lexer::lex(text)?;
    let mut sub_parser = Parser::new(&tokens);
    let mut expr = sub_parser.parse_expr()?;
    if !sub_parser.check(TokenKind::Eof) {
        return Err(Error::parse(
            "unexpected trailing tokens in interpolation expression",
            lexer::translate_position(base, sub_parser.peek().position),
        ));
    }
    remap_positions(&mut expr, base);
    Ok(expr)
}

fn remap(position: &mut Position, base: Position) {
    *position = lexer::translate_position(base, *position);
}

pub(super) fn remap_positions(expr: &mut Expr, base: Position) {
    match expr {
        Expr::IntLit(_, p)
        | Expr::DecimalLit(_, p)
        | Expr::StringLit(_, p)
        | Expr::BoolLit(_, p)
        | Expr::Identifier(_, p)
        | Expr::None(p) => remap(p, base),
        Expr::Call { callee, args, position } => {
            remap_positions(callee, base);
            args.iter_mut().for_each(|a| remap_positions(a, base));
            remap(position, base);
        }
        Expr::MethodCall { receiver, args, position, .. } => {
            remap_positions(receiver, base);
            args.iter_mut().for_each(|a| remap_positions(a, base));
            remap(position, base);
        }
        Expr::MemberAccess { receiver, position, .. } => {
            remap_positions(receiver, base);
            remap(position, base);
        }
        Expr::ListLit(items, position) => {
            items.iter_mut().for_each(|i| remap_positions(i, base));
            remap(position, base);
        }
        Expr::Index { receiver, index, position } => {
            remap_positions(receiver, base);
            remap_positions(index, base);
            remap(position, base);
        }
        Expr::Binary { left, right, position, .. } => {
            remap_positions(left, base);
            remap_positions(right, base);
            remap(position, base);
        }
        Expr::Unary { operand, position, .. } => {
            remap_positions(operand, base);
            remap(position, base);
        }
        Expr::Interpolation(parts, position) => {
            for part in parts {
                if let InterpPart::Expr(e) = part {
                    remap_positions(e, base);
                }
            }
            remap(position, base);
        }
        Expr::Ok(inner, position) | Expr::Error(inner, position) | Expr::Some(inner, position) | Expr::Propagate(inner, position) => {
            remap_positions(inner, base);
            remap(position, base);
        }
        Expr::Match { scrutinee, cases, position } => {
            remap_positions(scrutinee, base);
            for case in cases {
                match &mut case.body {
                    MatchBody::Expr(e) => remap_positions(e, base),
                    MatchBody::Block(stmts) => {
                        for stmt in stmts {
                            super::statements::remap_stmt_positions(stmt, base);
                        }
                    }
                }
                remap(&mut case.position, base);
            }
            remap(position, base);
        }
    }
}
