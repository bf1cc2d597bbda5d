//! Contains the tokens produced by the [`Lexer`](crate::parsers::Lexer).

use crate::parsed_types::LeafKind;
use crate::parsers::Span;
use std::fmt::{Display, Formatter};
use strum_macros::{Display as StrumDisplay, EnumIs};

/// A 1-based line and column in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: usize,
}

impl Position {
    pub const fn new(line: u32, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<&Span<'_>> for Position {
    fn from(span: &Span<'_>) -> Self {
        Self::new(span.location_line(), span.get_utf8_column())
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, StrumDisplay)]
pub enum TokenKind {
    #[strum(serialize = "atom")]
    Atom,
    #[strum(serialize = "number")]
    Number,
    #[strum(serialize = "variable")]
    Variable,
    #[strum(serialize = "'('")]
    LeftParen,
    #[strum(serialize = "')'")]
    RightParen,
    #[strum(serialize = "','")]
    Comma,
    #[strum(serialize = "end of input")]
    EndOfInput,
}

impl TokenKind {
    /// The kind of leaf term this token denotes, if any.
    pub const fn leaf_kind(&self) -> Option<LeafKind> {
        match self {
            TokenKind::Atom => Some(LeafKind::Atom),
            TokenKind::Number => Some(LeafKind::Number),
            TokenKind::Variable => Some(LeafKind::Variable),
            _ => None,
        }
    }
}

/// A token together with the text it was scanned from. Punctuation carries
/// its single character as literal and end of input carries an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: &'a str,
    pub position: Position,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, literal: &'a str, position: Position) -> Self {
        Self {
            kind,
            literal,
            position,
        }
    }
}
