//! Provides the recursive descent over the term grammar:
//!
//! ```text
//! <term>     ::= ATOM | NUMBER | VARIABLE | <compound>
//! <compound> ::= ATOM '(' <args> ')'
//! <args>     ::= <term> | <term> ',' <args>
//! ```

use crate::config::ParserConfig;
use crate::parsed_types::{Arguments, TermRef};
use crate::parsers::{
    Expected, Lexer, ParseError, ParseErrorReason, ParseStatistics, TermBuilder, Token, TokenKind,
};
use std::time::Instant;
use tracing::debug;

/// What must follow the term currently being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// The outermost term, followed by the end of input.
    TopLevel,
    /// One argument of an enclosing compound, followed by `,` or `)`. The
    /// terminator is left for the enclosing argument list to consume.
    Argument,
}

/// Drives one parse. Owns the lexer and the term builder, so nothing
/// survives from one input to the next.
#[derive(Debug)]
pub(crate) struct Driver<'a> {
    lexer: Lexer<'a>,
    builder: TermBuilder,
    max_depth: Option<usize>,
}

impl<'a> Driver<'a> {
    pub fn new(input: &'a str, config: &ParserConfig) -> Self {
        Self {
            lexer: Lexer::new(input),
            builder: TermBuilder::new(config.interning),
            max_depth: config.max_depth,
        }
    }

    /// Parses the whole input. Returns `Ok(None)` if the input holds no
    /// term at all.
    pub fn run(mut self) -> Result<(Option<TermRef>, ParseStatistics), ParseError> {
        let start_time = Instant::now();
        let term = if self.lexer.at_end() {
            None
        } else {
            Some(self.parse_term(Mode::TopLevel, 0)?)
        };

        let mut statistics = *self.builder.statistics();
        statistics.finish(start_time);
        debug!(
            parsed = term.is_some(),
            interned = self.builder.len(),
            "finished parse"
        );
        Ok((term, statistics))
    }

    fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        let token = self.lexer.next_token()?;
        self.builder.statistics_mut().increment_tokens();
        Ok(token)
    }

    fn parse_term(&mut self, mode: Mode, depth: usize) -> Result<TermRef, ParseError> {
        let token = self.next_token()?;
        let term = if token.kind.is_atom() && self.lexer.peek_char() == Some('(') {
            let open = self.next_token()?;
            debug_assert!(open.kind.is_left_paren());
            self.parse_compound(&token, depth)?
        } else if let Some(kind) = token.kind.leaf_kind() {
            self.builder.intern(kind, token.literal)
        } else {
            return Err(ParseError::unexpected_token(&token, Expected::Term));
        };

        self.expect_terminator(mode)?;
        Ok(term)
    }

    /// Parses the arguments of a compound whose functor and `(` have already
    /// been read, up to and including the closing `)`.
    fn parse_compound(&mut self, functor: &Token<'a>, depth: usize) -> Result<TermRef, ParseError> {
        let depth = depth + 1;
        if let Some(max_depth) = self.max_depth {
            if depth > max_depth {
                return Err(ParseError::new(
                    functor.position,
                    ParseErrorReason::DepthLimitExceeded(max_depth),
                ));
            }
        }
        self.builder.statistics_mut().register_depth(depth);

        let mut args = Arguments::new();
        loop {
            args.push(self.parse_term(Mode::Argument, depth)?);

            let separator = self.next_token()?;
            match separator.kind {
                TokenKind::Comma => continue,
                TokenKind::RightParen => break,
                _ => {
                    return Err(ParseError::unexpected_token(
                        &separator,
                        Expected::ArgumentTerminator,
                    ))
                }
            }
        }

        Ok(self.builder.new_compound(functor.literal, args))
    }

    fn expect_terminator(&mut self, mode: Mode) -> Result<(), ParseError> {
        match mode {
            Mode::TopLevel => {
                let token = self.next_token()?;
                if token.kind.is_end_of_input() {
                    Ok(())
                } else {
                    Err(ParseError::unexpected_token(&token, Expected::EndOfInput))
                }
            }
            Mode::Argument => match self.lexer.peek_char() {
                Some(',') | Some(')') => Ok(()),
                _ => {
                    // Read the offending token so the error can name it.
                    let token = self.next_token()?;
                    Err(ParseError::unexpected_token(
                        &token,
                        Expected::ArgumentTerminator,
                    ))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Term, TermKind};
    use crate::parsers::Position;

    fn parse(input: &str) -> Result<Option<TermRef>, ParseError> {
        Driver::new(input, &ParserConfig::default())
            .run()
            .map(|(term, _)| term)
    }

    fn parse_err(input: &str) -> ParseError {
        parse(input).unwrap_err()
    }

    #[test]
    fn empty_input_is_no_term() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("  \n\t"), Ok(None));
    }

    #[test]
    fn leaves_at_top_level() {
        let term = parse("foo").unwrap().unwrap();
        assert_eq!(term.kind(), TermKind::Atom);
        assert_eq!(term.literal(), "foo");

        let term = parse(" 42 ").unwrap().unwrap();
        assert_eq!(term.kind(), TermKind::Number);
        assert_eq!(term.literal(), "42");

        let term = parse("Foo").unwrap().unwrap();
        assert_eq!(term.kind(), TermKind::Variable);
    }

    #[test]
    fn compound_with_leaf_arguments() {
        let term = parse("f(a,b,c)").unwrap().unwrap();
        assert_eq!(term.kind(), TermKind::Compound);
        assert_eq!(term.functor().unwrap().literal(), "f");
        let literals: Vec<&str> = term.args().iter().map(|arg| arg.literal()).collect();
        assert_eq!(literals, vec!["a", "b", "c"]);
    }

    #[test]
    fn nested_compounds_keep_order() {
        let term = parse("f(g(1),h(2,3))").unwrap().unwrap();
        let args = term.args();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].functor().unwrap().literal(), "g");
        assert_eq!(args[0].arity(), 1);
        assert_eq!(args[1].functor().unwrap().literal(), "h");
        assert_eq!(args[1].arity(), 2);
        assert_eq!(args[1].args()[1].literal(), "3");
    }

    #[test]
    fn compound_as_middle_argument() {
        let term = parse("f(a, g(X), b)").unwrap().unwrap();
        assert_eq!(term.to_string(), "f(a,g(X),b)");
    }

    #[test]
    fn repeated_literals_share_nodes() {
        let term = parse("f(X,g(X),X)").unwrap().unwrap();
        let args = term.args();
        assert!(Term::same_node(&args[0], &args[2]));
        assert!(Term::same_node(&args[0], &args[1].args()[0]));
    }

    #[test]
    fn functors_are_not_interned() {
        // The compound `a(a)` keeps its shape, and both `a` leaves share a node.
        let term = parse("f(a, a(a))").unwrap().unwrap();
        let args = term.args();
        assert_eq!(args[1].kind(), TermKind::Compound);
        assert!(Term::same_node(&args[0], &args[1].args()[0]));
    }

    #[test]
    fn malformed_inputs_fail() {
        for input in ["f(", "f()", "f(a,)", "a b", "f(a", "f(a b)", ")", ",", "f(a))", "1(a)"] {
            assert!(parse(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn errors_point_at_offending_token() {
        let error = parse_err("a b");
        assert_eq!(error.position(), Position::new(1, 3));
        assert_eq!(
            error.reason(),
            &ParseErrorReason::UnexpectedToken {
                expected: Expected::EndOfInput,
                found: TokenKind::Atom,
            }
        );

        let error = parse_err("f()");
        assert_eq!(error.position(), Position::new(1, 3));
        assert_eq!(
            error.reason(),
            &ParseErrorReason::UnexpectedToken {
                expected: Expected::Term,
                found: TokenKind::RightParen,
            }
        );

        let error = parse_err("f(a b)");
        assert_eq!(
            error.reason(),
            &ParseErrorReason::UnexpectedToken {
                expected: Expected::ArgumentTerminator,
                found: TokenKind::Atom,
            }
        );

        let error = parse_err("f(");
        assert_eq!(
            error.reason(),
            &ParseErrorReason::UnexpectedToken {
                expected: Expected::Term,
                found: TokenKind::EndOfInput,
            }
        );
    }

    #[test]
    fn depth_limit() {
        let config = ParserConfig::default().with_max_depth(2);
        let run = |input| Driver::new(input, &config).run().map(|(term, _)| term);

        assert!(run("f(g(a))").is_ok());
        let error = run("f(g(h(a)))").unwrap_err();
        assert_eq!(error.reason(), &ParseErrorReason::DepthLimitExceeded(2));
        assert_eq!(error.position(), Position::new(1, 5));
    }

    #[test]
    fn statistics_count_nodes() {
        let (_, statistics) = Driver::new("f(X, g(X, 1))", &ParserConfig::default())
            .run()
            .unwrap();
        assert_eq!(statistics.created_leaves(), 2);
        assert_eq!(statistics.reused_leaves(), 1);
        assert_eq!(statistics.compounds(), 2);
        assert_eq!(statistics.max_depth(), 2);
        // f ( X , g ( X , 1 ) ) <eoi>
        assert_eq!(statistics.tokens(), 12);
    }
}
