//! Recursive-descent parser turning a token stream into a [`crate::ast::Program`].

mod expressions;
mod patterns;
mod statements;
mod types;

#[cfg(test)]
mod tests;

use crate::ast::{
    AppStateDecl, ApiClientDecl, ComponentDecl, Decl, FunctionDecl, ImportDecl, ImportKind, ModuleDecl, Param,
    Program, SpecBlock,
};
use crate::error::Error;
use crate::lexer::{Token, TokenKind};

/// Parses a complete token stream (as produced by [`crate::lexer::lex`]) into
/// a [`Program`].
pub fn parse(tokens: &[Token]) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program()?;
    parser.expect(TokenKind::Eof, "expected end of input")?;
    Ok(program)
}

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("{message}, found '{}'", self.peek().lexeme)))
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::parse(message, self.peek().position)
    }

    fn parse_program(&mut self) -> Result<Program, Error> {
        let mut decls = Vec::new();
        while !self.check(TokenKind::Eof) {
            decls.push(self.parse_decl()?);
        }
        Ok(Program { decls })
    }

    /// Parses one top-level or nested-module declaration, consuming a
    /// leading specification comment and `export` marker if present.
    fn parse_decl(&mut self) -> Result<Decl, Error> {
        let spec = self.take_leading_spec_block()?;
        let is_exported = if self.check(TokenKind::Export) {
            self.advance();
            true
        } else {
            false
        };

        match self.peek_kind() {
            TokenKind::Module => self.parse_module_decl(),
            TokenKind::Import => self.parse_import_decl(),
            TokenKind::Pure | TokenKind::Function => self.parse_function_decl(spec, is_exported),
            TokenKind::Component => self.parse_component_decl(),
            TokenKind::AppState => self.parse_app_state_decl(),
            TokenKind::ApiClient => self.parse_api_client_decl(),
            _ => Err(self.error(format!("expected a declaration, found '{}'", self.peek().lexeme))),
        }
    }

    /// A `/*spec … spec*/` token, if one sits directly before the next
    /// declaration, parsed into its structured fields.
    fn take_leading_spec_block(&mut self) -> Result<Option<SpecBlock>, Error> {
        if !self.check(TokenKind::SpecComment) {
            return Ok(None);
        }
        let tok = self.advance();
        let raw = match tok.literal {
            Some(crate::lexer::Literal::Spec(text)) => text,
            _ => unreachable!("SpecComment token without Literal::Spec payload"),
        };
        Ok(Some(parse_spec_block_text(&raw)))
    }

    fn parse_module_decl(&mut self) -> Result<Decl, Error> {
        let position = self.peek().position;
        self.advance();
        let name = self.expect(TokenKind::Identifier, "expected a module name")?.lexeme;
        self.expect(TokenKind::BraceOpen, "expected '{' to begin module body")?;
        let mut decls = Vec::new();
        while !self.check(TokenKind::BraceClose) {
            decls.push(self.parse_decl()?);
        }
        self.expect(TokenKind::BraceClose, "expected '}' to close module body")?;
        Ok(Decl::Module(ModuleDecl { name, decls, position }))
    }

    fn parse_import_decl(&mut self) -> Result<Decl, Error> {
        let position = self.peek().position;
        self.advance();
        let kind = if self.check(TokenKind::Star) {
            self.advance();
            ImportKind::Wildcard
        } else if self.check(TokenKind::BraceOpen) {
            self.advance();
            let mut names = vec![self.expect(TokenKind::Identifier, "expected an imported name")?.lexeme];
            while self.check(TokenKind::Comma) {
                self.advance();
                names.push(self.expect(TokenKind::Identifier, "expected an imported name")?.lexeme);
            }
            self.expect(TokenKind::BraceClose, "expected '}' to close import list")?;
            ImportKind::Named(names)
        } else {
            return Err(self.error("expected '{' or '*' after 'import'"));
        };
        self.expect(TokenKind::From, "expected 'from' after import list")?;
        let module = self.expect(TokenKind::StringLiteral, "expected a module path string")?.lexeme;
        let module = module.trim_matches('"').to_string();
        Ok(Decl::Import(ImportDecl { kind, module, position }))
    }

    fn parse_function_decl(&mut self, spec: Option<SpecBlock>, is_exported: bool) -> Result<Decl, Error> {
        let is_pure = if self.check(TokenKind::Pure) {
            self.advance();
            true
        } else {
            false
        };
        let position = self.peek().position;
        self.expect(TokenKind::Function, "expected 'function'")?;
        let name = self.expect(TokenKind::Identifier, "expected a function name")?.lexeme;

        self.expect(TokenKind::ParenOpen, "expected '(' after function name")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::ParenClose) {
            params.push(self.parse_param()?);
            while self.check(TokenKind::Comma) {
                self.advance();
                params.push(self.parse_param()?);
            }
        }
        self.expect(TokenKind::ParenClose, "expected ')' to close parameter list")?;

        self.expect(TokenKind::Arrow, "expected '->' after parameter list")?;
        let return_type = self.parse_type()?;

        let mut effects = Vec::new();
        if self.check(TokenKind::Uses) {
            self.advance();
            effects.push(self.parse_effect_name()?);
            while self.check(TokenKind::Comma) {
                self.advance();
                effects.push(self.parse_effect_name()?);
            }
        }

        let body = self.parse_block()?;
        Ok(Decl::Function(FunctionDecl {
            name,
            is_pure,
            is_exported,
            effects,
            params,
            return_type,
            body,
            spec,
            position,
        }))
    }

    fn parse_param(&mut self) -> Result<Param, Error> {
        let name = self.expect(TokenKind::Identifier, "expected a parameter name")?.lexeme;
        self.expect(TokenKind::Colon, "expected ':' after parameter name")?;
        let ty = self.parse_type()?;
        Ok(Param { name, ty })
    }

    fn parse_effect_name(&mut self) -> Result<String, Error> {
        let tok = self.peek().clone();
        let name = match tok.kind {
            TokenKind::KwDatabase => "Database",
            TokenKind::KwNetwork => "Network",
            TokenKind::KwLogging => "Logging",
            TokenKind::KwFileSystem => "FileSystem",
            TokenKind::KwMemory => "Memory",
            TokenKind::KwIO => "IO",
            TokenKind::Identifier => {
                self.advance();
                return Ok(tok.lexeme);
            }
            _ => return Err(self.error(format!("expected an effect name, found '{}'", tok.lexeme))),
        };
        self.advance();
        Ok(name.to_string())
    }

    fn parse_component_decl(&mut self) -> Result<Decl, Error> {
        let position = self.peek().position;
        self.advance();
        let name = self.expect(TokenKind::Identifier, "expected a component name")?.lexeme;
        let raw_body = self.capture_raw_braced_body()?;
        Ok(Decl::Component(ComponentDecl { name, raw_body, position }))
    }

    fn parse_app_state_decl(&mut self) -> Result<Decl, Error> {
        let position = self.peek().position;
        self.advance();
        let name = self.expect(TokenKind::Identifier, "expected an app_state name")?.lexeme;
        let raw_body = self.capture_raw_braced_body()?;
        Ok(Decl::AppState(AppStateDecl { name, raw_body, position }))
    }

    fn parse_api_client_decl(&mut self) -> Result<Decl, Error> {
        let position = self.peek().position;
        self.advance();
        let name = self.expect(TokenKind::Identifier, "expected an api_client name")?.lexeme;
        let raw_body = self.capture_raw_braced_body()?;
        Ok(Decl::ApiClient(ApiClientDecl { name, raw_body, position }))
    }

    /// Consumes a balanced `{ ... }` block without interpreting it,
    /// returning the enclosed tokens' lexemes joined by spaces. Used for
    /// declaration kinds the lowering pass treats as opaque.
    fn capture_raw_braced_body(&mut self) -> Result<String, Error> {
        self.expect(TokenKind::BraceOpen, "expected '{' to begin body")?;
        let mut depth = 1u32;
        let mut pieces = Vec::new();
        loop {
            if self.check(TokenKind::Eof) {
                return Err(self.error("unexpected end of input inside a block"));
            }
            match self.peek_kind() {
                TokenKind::BraceOpen => {
                    depth += 1;
                    pieces.push(self.advance().lexeme);
                }
                TokenKind::BraceClose => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        break;
                    }
                    pieces.push(self.advance().lexeme);
                }
                _ => pieces.push(self.advance().lexeme),
            }
        }
        Ok(pieces.join(" "))
    }
}

/// Parses the raw text between `/*spec` and `spec*/` into structured
/// fields. Recognized keys are `intent:`, `source:`, the list keys
/// `rules:` / `postconditions:` (each followed by zero or more `- "item"`
/// entries, as in `rules: - "commutative" - "associative"`), and the
/// older per-line singular `rule:` / `postcondition:`. Keys may appear on
/// one line or spread across several; anything unrecognized is kept only
/// in `source_doc`.
fn parse_spec_block_text(raw: &str) -> SpecBlock {
    let trimmed = raw.trim();
    let mut block = SpecBlock { source_doc: trimmed.to_string(), ..SpecBlock::default() };

    const LIST_KEYS: [&str; 2] = ["rules:", "postconditions:"];
    const SINGLE_KEYS: [&str; 2] = ["rule:", "postcondition:"];
    const SCALAR_KEYS: [&str; 2] = ["intent:", "source:"];

    let mut keys = Vec::new();
    for key in LIST_KEYS.into_iter().chain(SINGLE_KEYS).chain(SCALAR_KEYS) {
        let mut search_from = 0;
        while let Some(offset) = trimmed[search_from..].find(key) {
            keys.push((search_from + offset, key));
            search_from += offset + key.len();
        }
    }
    keys.sort_by_key(|(position, _)| *position);

    for (i, (position, key)) in keys.iter().enumerate() {
        let content_start = position + key.len();
        let content_end = keys.get(i + 1).map(|(next, _)| *next).unwrap_or(trimmed.len());
        let content = trimmed[content_start..content_end].trim();
        match *key {
            "intent:" => block.intent = Some(unquote(content)),
            "source:" if !content.is_empty() => block.source = Some(unquote(content)),
            "rules:" => block.rules.extend(split_list_items(content)),
            "postconditions:" => block.postconditions.extend(split_list_items(content)),
            "rule:" if !content.is_empty() => block.rules.push(unquote(content)),
            "postcondition:" if !content.is_empty() => block.postconditions.push(unquote(content)),
            _ => {}
        }
    }
    block
}

/// Splits a `rules:`/`postconditions:` value into its `- "item"` entries.
fn split_list_items(content: &str) -> Vec<String> {
    content
        .split('-')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(unquote)
        .collect()
}

fn unquote(text: &str) -> String {
    let text = text.trim();
    match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) => inner.to_string(),
        None => text.to_string(),
    }
}
