//! Named strategies handed to the evaluation driver.
//!
//! A [`Registry`] is built once and never mutated; callers iterate it in
//! order or look strategies up by name.

use crate::blocked::transpose_blocked;
use crate::error::{Result, TransposeError};
use crate::matrix::naive::transpose_naive;
use crate::matrix::tiled::transpose_cache_aware;
use crate::matrix::{Load, Store};
use crate::oblivious::transpose_oblivious;

/// Entry point every registered strategy exposes.
pub type TransposeFn = fn(usize, usize, &dyn Load, &mut dyn Store);

pub const SUBMISSION_NAME: &str = "Transpose submission";
pub const BASELINE_NAME: &str = "Simple row-wise scan transpose";
pub const OBLIVIOUS_NAME: &str = "Cache-oblivious transpose";
pub const CACHE_AWARE_NAME: &str = "Cache-aware blocked transpose";

/// A name paired with a transpose entry point.
#[derive(Clone, Copy)]
pub struct Strategy {
    name: &'static str,
    entry: TransposeFn,
}

impl Strategy {
    pub const fn new(name: &'static str, entry: TransposeFn) -> Self {
        Self { name, entry }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Transposes the N×M matrix `a` into `b`.
    pub fn run(&self, m: usize, n: usize, a: &dyn Load, b: &mut dyn Store) {
        (self.entry)(m, n, a, b);
    }

    /// Same as [`run`](Self::run) on plain slices.
    pub fn apply(&self, m: usize, n: usize, a: &[i32], mut b: &mut [i32]) {
        self.run(m, n, &a, &mut b);
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

fn blocked_entry(m: usize, n: usize, a: &dyn Load, b: &mut dyn Store) {
    transpose_blocked(m, n, a, b);
}

fn naive_entry(m: usize, n: usize, a: &dyn Load, b: &mut dyn Store) {
    transpose_naive(m, n, a, b);
}

fn oblivious_entry(m: usize, n: usize, a: &dyn Load, b: &mut dyn Store) {
    transpose_oblivious(m, n, a, b);
}

fn cache_aware_entry(m: usize, n: usize, a: &dyn Load, b: &mut dyn Store) {
    transpose_cache_aware(m, n, a, b);
}

/// Ordered, immutable list of strategies.
#[derive(Debug, Clone)]
pub struct Registry {
    strategies: Vec<Strategy>,
}

impl Registry {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    /// Submission first, then the baseline and the alternatives.
    pub fn standard() -> Self {
        Self::new(vec![
            Strategy::new(SUBMISSION_NAME, blocked_entry),
            Strategy::new(BASELINE_NAME, naive_entry),
            Strategy::new(OBLIVIOUS_NAME, oblivious_entry),
            Strategy::new(CACHE_AWARE_NAME, cache_aware_entry),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.iter()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn get(&self, name: &str) -> Result<&Strategy> {
        self.strategies
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| TransposeError::UnknownStrategy(name.to_string()))
    }

    pub fn submission(&self) -> Result<&Strategy> {
        self.get(SUBMISSION_NAME)
    }

    pub fn baseline(&self) -> Result<&Strategy> {
        self.get(BASELINE_NAME)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Strategy;
    type IntoIter = std::slice::Iter<'a, Strategy>;

    fn into_iter(self) -> Self::IntoIter {
        self.strategies.iter()
    }
}
