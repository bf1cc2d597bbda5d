mod builder;
mod driver;
mod error;
mod lexer;
mod parse_statistics;
mod test_helpers;
mod token;

use crate::config::ParserConfig;
use crate::parsed_types::TermRef;
use driver::Driver;

#[cfg(test)]
pub(crate) use test_helpers::Match;
pub use test_helpers::UnwrapValue;

/// The outcome of parsing one input: a term, no term for empty input, or
/// an error.
pub type ParseOutcome = Result<Option<TermRef>, ParseError>;

pub trait Parser {
    /// Parses `input` as a single term. Each call starts from an empty
    /// interning table, so no nodes are shared between calls.
    fn parse(&self, input: &str) -> ParseOutcome;

    /// Parses every input independently.
    fn parse_all<'i, I>(&self, inputs: I) -> Vec<ParseOutcome>
    where
        I: IntoIterator<Item = &'i str>,
    {
        inputs.into_iter().map(|input| self.parse(input)).collect()
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type LexError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type LexResult<'a, T, E = LexError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Parses terms according to a [`ParserConfig`].
#[derive(Debug, Clone, Default)]
pub struct TermParser {
    config: ParserConfig,
}

impl TermParser {
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `input` and also returns the counters collected on the way.
    ///
    /// ## Example
    /// ```
    /// # use termparse::parsers::TermParser;
    /// let (term, statistics) = TermParser::default()
    ///     .parse_with_statistics("f(X, X)")
    ///     .unwrap();
    /// assert_eq!(term.unwrap().to_string(), "f(X,X)");
    /// assert_eq!(statistics.created_leaves(), 1);
    /// assert_eq!(statistics.reused_leaves(), 1);
    /// ```
    pub fn parse_with_statistics(
        &self,
        input: &str,
    ) -> Result<(Option<TermRef>, ParseStatistics), ParseError> {
        Driver::new(input, &self.config).run()
    }
}

impl Parser for TermParser {
    /// Parses a single term.
    ///
    /// ## Example
    /// ```
    /// # use termparse::parsers::{Parser, TermParser};
    /// # use termparse::parsed_types::{Term, TermKind};
    /// let parser = TermParser::default();
    /// let term = parser.parse("f(X, g(X))").unwrap().unwrap();
    /// assert_eq!(term.kind(), TermKind::Compound);
    /// assert!(Term::same_node(&term.args()[0], &term.args()[1].args()[0]));
    ///
    /// assert_eq!(parser.parse(""), Ok(None));
    /// assert!(parser.parse("f()").is_err());
    /// ```
    fn parse(&self, input: &str) -> ParseOutcome {
        self.parse_with_statistics(input).map(|(term, _)| term)
    }
}

/// Parses a term with the default configuration.
///
/// ## Example
/// ```
/// # use termparse::parsers::{parse_term, preamble::*};
/// assert!(parse_term("foo").is_value("foo"));
/// assert!(parse_term("f(a, g(1), X)").is_value("f(a,g(1),X)"));
/// assert!(parse_term("   ").is_no_term());
/// assert!(parse_term("f(a,)").is_err());
/// ```
pub fn parse_term(input: &str) -> ParseOutcome {
    TermParser::default().parse(input)
}

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseOutcome, Span};
}

pub use builder::TermBuilder;
pub use error::{Expected, ParseError, ParseErrorReason};
pub use lexer::{tokenize, Lexer};
pub use parse_statistics::ParseStatistics;
pub use token::{Position, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InternPolicy;
    use crate::parsed_types::{Term, TermKind};
    use crate::test_utils::*;

    #[test]
    fn leaves_parse_to_their_token_class() {
        for (input, kind) in [
            ("abc", TermKind::Atom),
            ("a_B9", TermKind::Atom),
            ("0", TermKind::Number),
            ("1234567890", TermKind::Number),
            ("X", TermKind::Variable),
            ("_G123", TermKind::Variable),
        ] {
            let term = parse_term(input).unwrap().unwrap();
            assert_eq!(term.kind(), kind, "{input}");
            assert_eq!(term.literal(), input);
        }
    }

    #[test]
    fn calls_do_not_share_nodes() {
        let parser = TermParser::default();
        let first = parser.parse("f(X)").unwrap().unwrap();
        let second = parser.parse("f(X)").unwrap().unwrap();
        assert_eq!(first, second);
        assert!(!Term::same_node(&first.args()[0], &second.args()[0]));
    }

    #[test]
    fn kind_aware_interning_still_shares_same_kind() {
        let config = ParserConfig::default().with_interning(InternPolicy::ByKindAndLiteral);
        let parser = TermParser::new(config);
        let term = parser.parse("f(X,X)").unwrap().unwrap();
        assert!(Term::same_node(&term.args()[0], &term.args()[1]));
    }

    #[test]
    fn well_formed_samples_round_trip() {
        for line in WELL_FORMED_TERMS_TEXT.lines().filter(|l| !l.trim().is_empty()) {
            let (input, expected) = line.split_once("=>").unwrap();
            assert!(
                parse_term(input).is_exactly(expected.trim()),
                "{input:?} should render as {expected:?}"
            );
        }
    }

    #[test]
    fn malformed_samples_fail() {
        for input in MALFORMED_TERMS_TEXT.lines().filter(|l| !l.trim().is_empty()) {
            assert!(parse_term(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn parse_all_is_independent_per_input() {
        let outcomes = TermParser::default().parse_all(["a", "", "a b", "g(1)"]);
        assert!(outcomes[0].is_value("a"));
        assert!(outcomes[1].is_no_term());
        assert!(outcomes[2].is_err());
        assert!(outcomes[3].is_value("g(1)"));
    }
}
