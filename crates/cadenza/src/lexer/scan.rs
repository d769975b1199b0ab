//! Character-at-a-time scanner backing [`super::lex`].

use super::token::{InterpFragment, Literal, Token, TokenKind};
use crate::error::{Error, Position};

pub(crate) struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, chars: source.char_indices().collect(), pos: 0, line: 1, column: 1 }
    }

    pub fn run(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.is_eof() {
                break;
            }
            tokens.push(self.lex_token()?);
        }
        tokens.push(Token::new(TokenKind::Eof, "", self.position()));
        Ok(tokens)
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn byte_offset(&self) -> usize {
        self.chars.get(self.pos).map(|&(b, _)| b).unwrap_or(self.source.len())
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).map(|&(_, c)| c)
    }

    fn starts_with(&self, s: &str) -> bool {
        self.source[self.byte_offset()..].starts_with(s)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    if self.starts_with("/*spec") {
                        break;
                    }
                    self.skip_block_comment()?;
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn skip_block_comment(&mut self) -> Result<(), Error> {
        let start_pos = self.position();
        self.advance_n(2);
        loop {
            if self.is_eof() {
                return Err(Error::lex("unterminated block comment", start_pos));
            }
            if self.peek() == Some('*') && self.peek_at(1) == Some('/') {
                self.advance_n(2);
                return Ok(());
            }
            self.advance();
        }
    }

    fn lex_token(&mut self) -> Result<Token, Error> {
        if self.starts_with("/*spec") {
            return self.lex_spec_comment();
        }
        match self.peek() {
            Some('"') => self.lex_string(),
            Some('$') if self.peek_at(1) == Some('"') => self.lex_interpolated_string(),
            Some(c) if c.is_ascii_digit() => Ok(self.lex_number()),
            Some(c) if c.is_alphabetic() || c == '_' => Ok(self.lex_identifier()),
            _ => self.lex_punct(),
        }
    }

    fn lex_spec_comment(&mut self) -> Result<Token, Error> {
        let start_pos = self.position();
        let start_byte = self.byte_offset();
        self.advance_n("/*spec".chars().count());
        let content_start = self.byte_offset();
        loop {
            if self.is_eof() {
                return Err(Error::lex("unterminated specification block", start_pos));
            }
            if self.starts_with("spec*/") {
                let content_end = self.byte_offset();
                let content = self.source[content_start..content_end].to_string();
                self.advance_n("spec*/".chars().count());
                let lexeme = self.source[start_byte..self.byte_offset()].to_string();
                return Ok(Token::new(TokenKind::SpecComment, lexeme, start_pos)
                    .with_literal(Literal::Spec(content)));
            }
            self.advance();
        }
    }

    fn decode_escape(&mut self, start_pos: Position, extra: &[(char, char)]) -> Result<char, Error> {
        match self.advance() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('\\') => Ok('\\'),
            Some('"') => Ok('"'),
            Some(c) => {
                for &(from, to) in extra {
                    if c == from {
                        return Ok(to);
                    }
                }
                Ok(c)
            }
            None => Err(Error::lex("unterminated string literal", start_pos)),
        }
    }

    fn lex_string(&mut self) -> Result<Token, Error> {
        let start_pos = self.position();
        let start_byte = self.byte_offset();
        self.advance();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(Error::lex("unterminated string literal", start_pos)),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    value.push(self.decode_escape(start_pos, &[])?);
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
        let lexeme = self.source[start_byte..self.byte_offset()].to_string();
        Ok(Token::new(TokenKind::StringLiteral, lexeme, start_pos).with_literal(Literal::Str(value)))
    }

    fn lex_interpolated_string(&mut self) -> Result<Token, Error> {
        let start_pos = self.position();
        let start_byte = self.byte_offset();
        self.advance_n(2); // $"
        let mut fragments = Vec::new();
        let mut current = String::new();
        loop {
            match self.peek() {
                None => return Err(Error::lex("unterminated interpolated string", start_pos)),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    current.push(self.decode_escape(start_pos, &[('{', '{'), ('}', '}')])?);
                }
                Some('{') => {
                    if !current.is_empty() {
                        fragments.push(InterpFragment::Str(std::mem::take(&mut current)));
                    }
                    self.advance();
                    let expr_pos = self.position();
                    let expr_start = self.byte_offset();
                    let mut depth = 1u32;
                    loop {
                        match self.peek() {
                            None => return Err(Error::lex("unterminated interpolation expression", start_pos)),
                            Some('{') => {
                                depth += 1;
                                self.advance();
                            }
                            Some('}') => {
                                depth -= 1;
                                if depth == 0 {
                                    break;
                                }
                                self.advance();
                            }
                            Some(_) => {
                                self.advance();
                            }
                        }
                    }
                    let text = self.source[expr_start..self.byte_offset()].to_string();
                    self.advance(); // closing }
                    fragments.push(InterpFragment::Expr { text, position: expr_pos });
                }
                Some(c) => {
                    current.push(c);
                    self.advance();
                }
            }
        }
        if !current.is_empty() || fragments.is_empty() {
            fragments.push(InterpFragment::Str(current));
        }
        let lexeme = self.source[start_byte..self.byte_offset()].to_string();
        Ok(Token::new(TokenKind::InterpolatedString, lexeme, start_pos)
            .with_literal(Literal::Interp(fragments)))
    }

    fn lex_number(&mut self) -> Token {
        let start_pos = self.position();
        let start_byte = self.byte_offset();
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        let mut is_decimal = false;
        if self.peek() == Some('.') && matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) {
            is_decimal = true;
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let lexeme = self.source[start_byte..self.byte_offset()].to_string();
        if is_decimal {
            let value: f64 = lexeme.parse().unwrap_or(0.0);
            Token::new(TokenKind::DecimalLiteral, lexeme, start_pos).with_literal(Literal::Decimal(value))
        } else {
            let value: i64 = lexeme.parse().unwrap_or(0);
            Token::new(TokenKind::IntLiteral, lexeme, start_pos).with_literal(Literal::Int(value))
        }
    }

    fn lex_identifier(&mut self) -> Token {
        let start_pos = self.position();
        let start_byte = self.byte_offset();
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        let lexeme = self.source[start_byte..self.byte_offset()].to_string();
        let kind = TokenKind::keyword_from_str(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, start_pos)
    }

    fn lex_punct(&mut self) -> Result<Token, Error> {
        let start_pos = self.position();
        let start_byte = self.byte_offset();
        let two = match (self.peek(), self.peek_at(1)) {
            (Some('-'), Some('>')) => Some(TokenKind::Arrow),
            (Some('='), Some('>')) => Some(TokenKind::FatArrow),
            (Some('='), Some('=')) => Some(TokenKind::EqEq),
            (Some('!'), Some('=')) => Some(TokenKind::NotEq),
            (Some('<'), Some('=')) => Some(TokenKind::LtEq),
            (Some('>'), Some('=')) => Some(TokenKind::GtEq),
            (Some('&'), Some('&')) => Some(TokenKind::AndAnd),
            (Some('|'), Some('|')) => Some(TokenKind::OrOr),
            _ => None,
        };
        if let Some(kind) = two {
            self.advance_n(2);
            let lexeme = self.source[start_byte..self.byte_offset()].to_string();
            return Ok(Token::new(kind, lexeme, start_pos));
        }
        let c = match self.peek() {
            Some(c) => c,
            None => unreachable!("lex_punct called at eof"),
        };
        let kind = match c {
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            '{' => TokenKind::BraceOpen,
            '}' => TokenKind::BraceClose,
            '[' => TokenKind::BracketOpen,
            ']' => TokenKind::BracketClose,
            '!' => TokenKind::Bang,
            '?' => TokenKind::Question,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Equals,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            other => return Err(Error::lex(format!("unexpected character '{other}'"), start_pos)),
        };
        self.advance();
        let lexeme = self.source[start_byte..self.byte_offset()].to_string();
        Ok(Token::new(kind, lexeme, start_pos))
    }
}
