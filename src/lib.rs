//! Matrix transpose tuned for a tiny direct-mapped cache.
//!
//! Getting B = A^T right is trivial; getting it right with few misses on a
//! 1 KiB, 32-byte-line, direct-mapped cache is the point of this crate.
//! Everything is tuned against that one cache, and [`sim`] models it so
//! the miss counts can be checked.
//!
//! ## Usage
//!
//! ```
//! use transpose::transpose;
//!
//! // A is N×M = 67×61, B comes out 61×67
//! let (m, n) = (61, 67);
//! let a: Vec<i32> = (0..m * n).map(|v| v as i32).collect();
//! let mut b = vec![0; m * n];
//!
//! transpose(m, n, &a, &mut b).unwrap();
//! assert!(transpose::is_transpose(m, n, &a[..], &b[..]));
//! ```
//!
//! To compare strategies under the simulated cache:
//!
//! ```
//! use transpose::registry::Registry;
//! use transpose::sim::simulate;
//!
//! let a: Vec<i32> = (0..64 * 64).collect();
//! let mut b = vec![0; 64 * 64];
//!
//! let registry = Registry::standard();
//! let blocked = simulate(registry.submission().unwrap(), 64, 64, &a, &mut b);
//! let naive = simulate(registry.baseline().unwrap(), 64, 64, &a, &mut b);
//! assert!(blocked.misses * 3 < naive.misses);
//! ```
//!
//! ## What's inside
//!
//! - Row-wise baseline and a correctness oracle
//! - Blocked transpose with a shape → tuning table (8×8 line staging for
//!   32×32, 4×4 quadrant swap for 64×64, 16×16 direct tiles otherwise)
//! - Cache-oblivious recursive transpose
//! - A registry of named strategies and a simulator-backed evaluation driver

pub mod blocked;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod oblivious;
pub mod registry;
pub mod sim;

pub use blocked::transpose_blocked;
pub use error::{Result, TransposeError};
pub use matrix::naive::transpose_naive;
pub use matrix::oracle::is_transpose;
pub use matrix::{Load, Store};
pub use oblivious::transpose_oblivious;

/// Transpose: B = A^T, with A N×M and B M×N, both row-major.
///
/// Checks the buffer sizes, then runs the blocked transpose. The
/// unchecked strategies are available through [`registry`] or directly.
///
/// # Errors
///
/// [`TransposeError::ZeroDimension`] if `m` or `n` is zero,
/// [`TransposeError::LengthMismatch`] if either slice isn't `m * n` long.
pub fn transpose(m: usize, n: usize, a: &[i32], b: &mut [i32]) -> Result<()> {
    error::check_extents(m, n, a.len(), b.len())?;
    transpose_blocked(m, n, a, b);
    Ok(())
}
