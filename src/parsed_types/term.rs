//! Contains terms via the [`Term`] type.

use itertools::Itertools;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use strum_macros::{Display as StrumDisplay, EnumIs, EnumIter};

/// Most compound terms have only a handful of arguments, so they are kept
/// inline up to this arity.
pub const TYPICAL_ARITY: usize = 4;

/// A shared handle to a [`Term`]. Leaves with the same literal text are
/// shared between parents within one parse, so terms are reference counted
/// rather than exclusively owned.
pub type TermRef = Rc<Term>;

/// The arguments of a compound term, in source order.
pub type Arguments = SmallVec<[TermRef; TYPICAL_ARITY]>;

/// The kind of a [`Term`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum TermKind {
    Atom,
    Number,
    Variable,
    Compound,
}

/// The kind of a leaf term, i.e. every [`TermKind`] except
/// [`TermKind::Compound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum LeafKind {
    Atom,
    Number,
    Variable,
}

impl From<LeafKind> for TermKind {
    fn from(value: LeafKind) -> Self {
        match value {
            LeafKind::Atom => TermKind::Atom,
            LeafKind::Number => TermKind::Number,
            LeafKind::Variable => TermKind::Variable,
        }
    }
}

/// A term, i.e. an atom, a number, a variable, or a functor applied to a
/// non-empty list of argument terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Term {
    Atom(String),
    Number(String),
    Variable(String),
    Compound { functor: TermRef, args: Arguments },
}

impl Term {
    pub fn new_leaf(kind: LeafKind, literal: &str) -> Self {
        match kind {
            LeafKind::Atom => Self::Atom(literal.to_owned()),
            LeafKind::Number => Self::Number(literal.to_owned()),
            LeafKind::Variable => Self::Variable(literal.to_owned()),
        }
    }

    /// Creates a compound term. The functor is always a fresh atom node.
    pub fn new_compound(functor: &str, args: Arguments) -> Self {
        debug_assert!(!args.is_empty(), "compound terms have at least one argument");
        Self::Compound {
            functor: Rc::new(Self::Atom(functor.to_owned())),
            args,
        }
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Term::Atom(_) => TermKind::Atom,
            Term::Number(_) => TermKind::Number,
            Term::Variable(_) => TermKind::Variable,
            Term::Compound { .. } => TermKind::Compound,
        }
    }

    /// The source text of a leaf term. Compound terms have an empty literal.
    pub fn literal(&self) -> &str {
        match self {
            Term::Atom(literal) | Term::Number(literal) | Term::Variable(literal) => literal,
            Term::Compound { .. } => "",
        }
    }

    /// The functor of a compound term.
    pub fn functor(&self) -> Option<&TermRef> {
        match self {
            Term::Compound { functor, .. } => Some(functor),
            _ => None,
        }
    }

    /// The arguments of a compound term, empty for leaves.
    pub fn args(&self) -> &[TermRef] {
        match self {
            Term::Compound { args, .. } => args.as_slice(),
            _ => &[],
        }
    }

    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.args().len()
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        !self.kind().is_compound()
    }

    /// Whether `a` and `b` are the same node, as opposed to merely equal.
    #[inline(always)]
    pub fn same_node(a: &TermRef, b: &TermRef) -> bool {
        Rc::ptr_eq(a, b)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Compound { functor, args } => {
                write!(f, "{}({})", functor, args.iter().join(","))
            }
            leaf => write!(f, "{}", leaf.literal()),
        }
    }
}
