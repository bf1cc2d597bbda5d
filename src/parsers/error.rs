//! Contains the error returned when the input is not a valid term.

use crate::parsers::{Position, Token, TokenKind};
use strum_macros::Display;
use thiserror::Error;

/// What the parser was looking for when it found something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Expected {
    #[strum(serialize = "a term")]
    Term,
    #[strum(serialize = "end of input")]
    EndOfInput,
    #[strum(serialize = "',' or ')'")]
    ArgumentTerminator,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorReason {
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: TokenKind },
    #[error("terms nested deeper than {0} levels")]
    DepthLimitExceeded(usize),
}

/// The single error returned for any input that is not a valid term. There
/// is no recovery: once this is returned the parse is over and no partial
/// term is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at {position}: {reason}")]
pub struct ParseError {
    position: Position,
    reason: ParseErrorReason,
}

impl ParseError {
    pub const fn new(position: Position, reason: ParseErrorReason) -> Self {
        Self { position, reason }
    }

    pub fn unexpected_token(token: &Token<'_>, expected: Expected) -> Self {
        Self::new(
            token.position,
            ParseErrorReason::UnexpectedToken {
                expected,
                found: token.kind,
            },
        )
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_position_and_tokens() {
        let token = Token::new(TokenKind::Atom, "b", Position::new(1, 3));
        let error = ParseError::unexpected_token(&token, Expected::EndOfInput);
        assert_eq!(
            error.to_string(),
            "parse error at 1:3: expected end of input, found atom"
        );
    }

    #[test]
    fn message_for_unexpected_character() {
        let error = ParseError::new(
            Position::new(2, 1),
            ParseErrorReason::UnexpectedCharacter('#'),
        );
        assert_eq!(error.to_string(), "parse error at 2:1: unexpected character '#'");
    }
}
