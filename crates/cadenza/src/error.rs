//! Positioned errors shared by every stage of the pipeline.

use std::fmt;

/// A 1-based line/column position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Every error the core can produce. Each variant carries the position the
/// driver needs to render `error: <message> at line N, column M`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("{message} at {position}")]
    Lex { message: String, position: Position },

    #[error("{message} at {position}")]
    Parse { message: String, position: Position },

    #[error("{message} at {position}")]
    Lower { message: String, position: Position },
}

impl Error {
    pub fn lex(message: impl Into<String>, position: Position) -> Self {
        Error::Lex { message: message.into(), position }
    }

    pub fn parse(message: impl Into<String>, position: Position) -> Self {
        Error::Parse { message: message.into(), position }
    }

    pub fn lower(message: impl Into<String>, position: Position) -> Self {
        Error::Lower { message: message.into(), position }
    }

    /// The message text, without the trailing position suffix.
    pub fn message(&self) -> &str {
        match self {
            Error::Lex { message, .. } | Error::Parse { message, .. } | Error::Lower { message, .. } => message,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Error::Lex { position, .. } | Error::Parse { position, .. } | Error::Lower { position, .. } => *position,
        }
    }
}
