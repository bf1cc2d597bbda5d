use std::time::{Duration, Instant};
use tracing::info;

/// Counters collected while parsing a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStatistics {
    /// Number of tokens read from the lexer
    tokens: usize,
    /// Number of leaf nodes created
    created_leaves: usize,
    /// Number of times an existing leaf node was handed out again
    reused_leaves: usize,
    /// Number of compound nodes created
    compounds: usize,
    /// Deepest argument list nesting seen
    max_depth: usize,
    /// Time spent parsing
    duration: Duration,
}

impl ParseStatistics {
    pub fn new() -> Self {
        Self {
            tokens: 0,
            created_leaves: 0,
            reused_leaves: 0,
            compounds: 0,
            max_depth: 0,
            duration: Duration::ZERO,
        }
    }

    pub fn increment_tokens(&mut self) {
        self.tokens += 1;
    }

    pub fn increment_created_leaves(&mut self) {
        self.created_leaves += 1;
    }

    pub fn increment_reused_leaves(&mut self) {
        self.reused_leaves += 1;
    }

    pub fn increment_compounds(&mut self) {
        self.compounds += 1;
    }

    pub fn register_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn finish(&mut self, start_time: Instant) {
        self.duration = start_time.elapsed();
    }

    pub fn tokens(&self) -> usize {
        self.tokens
    }

    pub fn created_leaves(&self) -> usize {
        self.created_leaves
    }

    pub fn reused_leaves(&self) -> usize {
        self.reused_leaves
    }

    pub fn compounds(&self) -> usize {
        self.compounds
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn log(&self) {
        info!(
            tokens = self.tokens,
            created_leaves = self.created_leaves,
            reused_leaves = self.reused_leaves,
            compounds = self.compounds,
            max_depth = self.max_depth,
            parse_duration = self.duration.as_secs_f64()
        );
    }
}

impl Default for ParseStatistics {
    fn default() -> Self {
        Self::new()
    }
}
