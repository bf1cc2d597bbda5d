#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binaries but not in the library. Unfortunately
// cargo does not yet allow specifying dependencies for binaries only.
use console as _;
use dialoguer as _;
use humantime as _;

pub mod config;
pub mod logging;
pub mod parsed_types;
pub mod parsers;
pub mod render;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, InternPolicy, ParserConfig};
pub use parsed_types::*;
pub use parsers::{parse_term, ParseError, Parser, TermParser};
