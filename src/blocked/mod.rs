//! Cache-blocked transpose.
//!
//! One tiled driver, parameterised by a [`Tuning`] record picked from the
//! matrix shape. The tuning decides the tile side and how values move
//! from A to B inside a tile:
//! - `Direct`: element-by-element copy (generic fallback)
//! - `RowBuffered`: read a whole line of A into a stack buffer, then write it
//!   out to B, so A and B never ping-pong on a shared set (32×32)
//! - `QuadrantSwap`: split 8×8 tiles into 4×4 quadrants and park the
//!   upper-right quadrant in B until its lines are hot again (64×64)

pub mod engine;
pub mod tuning;

pub use engine::{transpose_blocked, transpose_with, LINE_INTS};
pub use tuning::{tuning_for, Staging, Tuning, FALLBACK_TUNING};
