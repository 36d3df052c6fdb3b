//! Evaluation driver: runs every registered strategy on a set of shapes
//! under the cache simulator and checks each result with the oracle.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::error::{check_extents, Result, TransposeError};
use crate::matrix::oracle::is_transpose;
use crate::registry::{Registry, Strategy};
use crate::sim::{simulate, CacheStats};

/// Log filter the runner uses when `RUST_LOG` is unset. `info` so that
/// each evaluation is reported.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a comma-separated shape list.
pub const SHAPES_ENV: &str = "TRANSPOSE_SHAPES";

/// An M×N transpose: A has N rows of M columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub m: usize,
    pub n: usize,
}

impl Shape {
    pub const fn new(m: usize, n: usize) -> Self {
        Self { m, n }
    }

    pub fn len(&self) -> usize {
        self.m * self.n
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element count, rejecting zero sides and shapes whose elements can't
    /// all get distinct sequential `i32` values.
    pub fn checked_len(&self) -> Result<usize> {
        let Shape { m, n } = *self;
        if m == 0 || n == 0 {
            return Err(TransposeError::ZeroDimension { m, n });
        }
        m.checked_mul(n)
            .filter(|&len| len <= i32::MAX as usize)
            .ok_or(TransposeError::TooLarge { m, n })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.m, self.n)
    }
}

impl FromStr for Shape {
    type Err = TransposeError;

    /// Parses `"61x67"` (or `"61×67"`) as M = 61, N = 67.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TransposeError::InvalidShape(s.to_string());
        let (m, n) = s
            .trim()
            .split_once(['x', 'X', '×'])
            .ok_or_else(invalid)?;
        let m: usize = m.trim().parse().map_err(|_| invalid())?;
        let n: usize = n.trim().parse().map_err(|_| invalid())?;
        let shape = Shape::new(m, n);
        shape.checked_len()?;
        Ok(shape)
    }
}

/// Which shapes the driver evaluates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub shapes: Vec<Shape>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            shapes: vec![Shape::new(32, 32), Shape::new(64, 64), Shape::new(61, 67)],
        }
    }
}

impl HarnessConfig {
    /// Defaults, overridden by [`SHAPES_ENV`] when it is set.
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var(SHAPES_ENV).ok())
    }

    /// Defaults when `value` is `None`, otherwise the parsed shape list.
    pub fn from_var(value: Option<String>) -> Result<Self> {
        match value {
            Some(list) => Ok(Self {
                shapes: parse_shapes(&list)?,
            }),
            None => Ok(Self::default()),
        }
    }
}

/// Parses `"32x32,64x64"`. Blank entries are skipped; an empty list is
/// rejected.
pub fn parse_shapes(list: &str) -> Result<Vec<Shape>> {
    let shapes = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Shape::from_str)
        .collect::<Result<Vec<_>>>()?;
    if shapes.is_empty() {
        return Err(TransposeError::InvalidShape(list.to_string()));
    }
    Ok(shapes)
}

/// Outcome of one strategy on one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub strategy: &'static str,
    pub shape: Shape,
    pub correct: bool,
    pub stats: CacheStats,
}

/// A filled with 0, 1, 2, ... in row-major order.
pub fn sequential_matrix(shape: Shape) -> Vec<i32> {
    (0..shape.len()).map(|v| v as i32).collect()
}

/// Runs one strategy on sequential input under a cold simulated cache.
pub fn evaluate_one(strategy: &Strategy, shape: Shape) -> Result<Evaluation> {
    let Shape { m, n } = shape;
    let len = shape.checked_len()?;
    let a = sequential_matrix(shape);
    let mut b = vec![0; len];
    check_extents(m, n, a.len(), b.len())?;

    let stats = simulate(strategy, m, n, &a, &mut b);
    let correct = is_transpose(m, n, &a[..], &b[..]);

    let evaluation = Evaluation {
        strategy: strategy.name(),
        shape,
        correct,
        stats,
    };
    if correct {
        info!(
            strategy = strategy.name(),
            %shape,
            hits = stats.hits,
            misses = stats.misses,
            evictions = stats.evictions,
            "evaluated"
        );
    } else {
        warn!(strategy = strategy.name(), %shape, "result is not the transpose of the input");
    }
    Ok(evaluation)
}

/// Evaluates every strategy on every configured shape, shape-major.
pub fn evaluate(registry: &Registry, config: &HarnessConfig) -> Result<Vec<Evaluation>> {
    debug!(
        strategies = registry.len(),
        shapes = config.shapes.len(),
        "starting evaluation"
    );
    let mut results = Vec::with_capacity(registry.len() * config.shapes.len());
    for &shape in &config.shapes {
        for strategy in registry {
            results.push(evaluate_one(strategy, shape)?);
        }
    }
    Ok(results)
}
