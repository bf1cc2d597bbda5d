//! Contains the types produced by the parsers.

mod term;

pub use term::{Arguments, LeafKind, Term, TermKind, TermRef, TYPICAL_ARITY};
