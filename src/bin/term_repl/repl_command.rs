use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, multispace0, multispace1};
use nom::combinator::{all_consuming, map_opt};
use nom::sequence::{delimited, preceded};
use termparse::render::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    Format(OutputFormat),
    Tokens(String),
    Parse(String),
}

impl ReplCommand {
    /// Lines starting with `:` are commands, anything else is a term to
    /// parse. Returns `None` for an unknown or malformed command.
    pub fn parse(input: &str) -> Option<Self> {
        if !input.trim_start().starts_with(':') {
            return Some(ReplCommand::Parse(input.to_owned()));
        }

        alt((
            Self::parse_exit,
            Self::parse_help,
            Self::parse_format,
            Self::parse_tokens,
        ))(input)
        .ok()
        .map(|(_, cmd)| cmd)
    }

    fn parse_exit(input: &str) -> nom::IResult<&str, ReplCommand> {
        let (input, _) = all_consuming(delimited(
            multispace0,
            alt((tag(":exit"), tag(":quit"), tag(":q"))),
            multispace0,
        ))(input)?;
        Ok((input, ReplCommand::Exit))
    }

    fn parse_help(input: &str) -> nom::IResult<&str, ReplCommand> {
        let (input, _) = all_consuming(delimited(multispace0, tag(":help"), multispace0))(input)?;
        Ok((input, ReplCommand::Help))
    }

    fn parse_format(input: &str) -> nom::IResult<&str, ReplCommand> {
        let (input, _) = preceded(multispace0, tag(":format"))(input)?;
        let (input, _) = multispace1(input)?;
        let (input, format) = all_consuming(map_opt(
            delimited(multispace0, alpha1, multispace0),
            |name: &str| <OutputFormat as clap::ValueEnum>::from_str(name, true).ok(),
        ))(input)?;
        Ok((input, ReplCommand::Format(format)))
    }

    fn parse_tokens(input: &str) -> nom::IResult<&str, ReplCommand> {
        let (input, _) = preceded(multispace0, tag(":tokens"))(input)?;
        let (input, _) = multispace1(input)?;
        Ok(("", ReplCommand::Tokens(input.to_owned())))
    }
}
