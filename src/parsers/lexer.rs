//! Provides the scanner that turns term text into [`Token`]s.

use crate::parsers::{
    LexResult, ParseError, ParseErrorReason, Position, Span, Token, TokenKind,
};
use nom::branch::alt;
use nom::bytes::complete::take_while;
use nom::character::complete::{char, digit1, multispace0, satisfy};
use nom::combinator::{consumed, recognize, value};
use nom::sequence::pair;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scans an atom, i.e. a lowercase letter followed by letters, digits and
/// underscores.
fn scan_atom(input: Span) -> LexResult<Span> {
    recognize(pair(
        satisfy(|c| c.is_ascii_lowercase()),
        take_while(is_name_char),
    ))(input)
}

/// Scans a variable, i.e. an uppercase letter or underscore followed by
/// letters, digits and underscores.
fn scan_variable(input: Span) -> LexResult<Span> {
    recognize(pair(
        satisfy(|c| c.is_ascii_uppercase() || c == '_'),
        take_while(is_name_char),
    ))(input)
}

fn scan_token(input: Span) -> LexResult<(Span, TokenKind)> {
    consumed(alt((
        value(TokenKind::LeftParen, char('(')),
        value(TokenKind::RightParen, char(')')),
        value(TokenKind::Comma, char(',')),
        value(TokenKind::Number, digit1),
        value(TokenKind::Atom, scan_atom),
        value(TokenKind::Variable, scan_variable),
    )))(input)
}

fn skip_whitespace(input: Span) -> Span {
    match multispace0::<Span, crate::parsers::LexError>(input) {
        Ok((remaining, _)) => remaining,
        Err(_) => input,
    }
}

/// A scanner over a single input string. Whitespace between tokens is
/// skipped; once the input is exhausted every call to
/// [`Lexer::next_token`] returns [`TokenKind::EndOfInput`].
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    remaining: Span<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            remaining: Span::new(input),
        }
    }

    /// Returns the next token and advances past it.
    pub fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        let start = skip_whitespace(self.remaining);
        let position = Position::from(&start);
        self.remaining = start;

        let Some(first) = start.fragment().chars().next() else {
            return Ok(Token::new(TokenKind::EndOfInput, "", position));
        };

        match scan_token(start) {
            Ok((remaining, (text, kind))) => {
                self.remaining = remaining;
                Ok(Token::new(kind, text.into_fragment(), position))
            }
            Err(_) => Err(ParseError::new(
                position,
                ParseErrorReason::UnexpectedCharacter(first),
            )),
        }
    }

    /// Returns the next non-whitespace character without advancing, or
    /// `None` if only whitespace remains.
    pub fn peek_char(&self) -> Option<char> {
        skip_whitespace(self.remaining).fragment().chars().next()
    }

    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.peek_char().is_none()
    }
}

/// Scans the whole input, returning every token up to and including the
/// end of input.
///
/// ## Example
/// ```
/// # use termparse::parsers::{tokenize, TokenKind};
/// let kinds: Vec<TokenKind> = tokenize("f(X, 1)")
///     .unwrap()
///     .iter()
///     .map(|token| token.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Atom,
///         TokenKind::LeftParen,
///         TokenKind::Variable,
///         TokenKind::Comma,
///         TokenKind::Number,
///         TokenKind::RightParen,
///         TokenKind::EndOfInput,
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token()?;
        let done = token.kind.is_end_of_input();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
