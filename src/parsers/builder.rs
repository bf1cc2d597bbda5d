//! Provides the [`TermBuilder`], which creates term nodes and owns the
//! interning table of one parse.

use crate::config::InternPolicy;
use crate::parsed_types::{Arguments, LeafKind, Term, TermRef};
use crate::parsers::ParseStatistics;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;

/// Key of the interning table. The kind is only part of the key under
/// [`InternPolicy::ByKindAndLiteral`].
type InternKey = (Option<LeafKind>, String);

/// Creates term nodes for a single parse. Leaves are interned: asking twice
/// for the same literal returns the same node. Under
/// [`InternPolicy::ByLiteral`] the lookup ignores the requested kind, so a
/// later leaf gets whatever node was first stored under its text.
#[derive(Debug)]
pub struct TermBuilder {
    policy: InternPolicy,
    table: HashMap<InternKey, TermRef>,
    statistics: ParseStatistics,
}

impl TermBuilder {
    pub fn new(policy: InternPolicy) -> Self {
        Self {
            policy,
            table: HashMap::new(),
            statistics: ParseStatistics::new(),
        }
    }

    fn key(&self, kind: LeafKind, literal: &str) -> InternKey {
        match self.policy {
            InternPolicy::ByLiteral => (None, literal.to_owned()),
            InternPolicy::ByKindAndLiteral => (Some(kind), literal.to_owned()),
        }
    }

    /// Returns the leaf stored for `literal`, creating it with `kind` if
    /// there is none yet.
    pub fn intern(&mut self, kind: LeafKind, literal: &str) -> TermRef {
        let key = self.key(kind, literal);
        if let Some(existing) = self.table.get(&key) {
            trace!(literal, requested = %kind, found = %existing.kind(), "reusing leaf");
            self.statistics.increment_reused_leaves();
            return existing.clone();
        }

        trace!(literal, kind = %kind, "creating leaf");
        let term = Rc::new(Term::new_leaf(kind, literal));
        self.table.insert(key, term.clone());
        self.statistics.increment_created_leaves();
        term
    }

    /// Creates a compound term. Compound terms and their functors are never
    /// interned.
    pub fn new_compound(&mut self, functor: &str, args: Arguments) -> TermRef {
        trace!(functor, arity = args.len(), "creating compound");
        self.statistics.increment_compounds();
        Rc::new(Term::new_compound(functor, args))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn statistics(&self) -> &ParseStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut ParseStatistics {
        &mut self.statistics
    }
}
