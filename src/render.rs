//! Rendering of parsed terms for the command-line tools.

use crate::parsed_types::Term;
use std::fmt::{Display, Formatter};
use strum_macros::{Display as StrumDisplay, EnumIter};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Source syntax, e.g. `f(a,X)`
    Text,
    /// One node per line, indented by depth
    Tree,
    /// The term as JSON
    Json,
    /// The Rust debug representation
    Debug,
}

pub fn render(term: &Term, format: OutputFormat) -> Result<String, serde_json::Error> {
    Ok(match format {
        OutputFormat::Text => term.to_string(),
        OutputFormat::Tree => TreeView(term).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(term)?,
        OutputFormat::Debug => format!("{:#?}", term),
    })
}

/// Displays a term one node per line, indented by depth.
struct TreeView<'a>(&'a Term);

impl TreeView<'_> {
    fn write_node(term: &Term, depth: usize, f: &mut Formatter<'_>) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        match term {
            Term::Compound { functor, args } => {
                writeln!(f, "{}{} {}/{}", indent, term.kind(), functor, args.len())?
            }
            leaf => writeln!(f, "{}{} {}", indent, leaf.kind(), leaf.literal())?,
        }
        for arg in term.args() {
            Self::write_node(arg, depth + 1, f)?;
        }
        Ok(())
    }
}

impl Display for TreeView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Self::write_node(self.0, 0, f)
    }
}
