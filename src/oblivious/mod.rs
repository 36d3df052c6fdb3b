//! Cache-oblivious transpose.
//!
//! Recursively halves the larger side of the current sub-rectangle until it
//! fits the base case, then copies directly. Nothing here depends on the
//! cache size or line size except the base-case footprint.

use crate::matrix::{Load, Store};

/// Base case: at most this many rows of A...
pub const BASE_ROWS: usize = 2;
/// ...and at most this many columns. 2×4 = 8 integers = one 32-byte line.
pub const BASE_COLS: usize = 4;

/// A sub-rectangle of A and where its transpose lands in B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub a_row: usize,
    pub a_col: usize,
    pub b_row: usize,
    pub b_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Region {
    /// The whole of an N-row, M-column A.
    pub fn full(m: usize, n: usize) -> Self {
        Self {
            a_row: 0,
            a_col: 0,
            b_row: 0,
            b_col: 0,
            rows: n,
            cols: m,
        }
    }

    /// True once both sides are within the base thresholds.
    pub fn is_base(&self) -> bool {
        self.rows <= BASE_ROWS && self.cols <= BASE_COLS
    }

    /// Halves the larger side (rows on a tie). The second half gets the
    /// extra row or column when the side is odd.
    pub fn split(&self) -> (Region, Region) {
        if self.rows >= self.cols {
            let mid = self.rows / 2;
            let first = Region { rows: mid, ..*self };
            let second = Region {
                a_row: self.a_row + mid,
                b_col: self.b_col + mid,
                rows: self.rows - mid,
                ..*self
            };
            (first, second)
        } else {
            let mid = self.cols / 2;
            let first = Region { cols: mid, ..*self };
            let second = Region {
                a_col: self.a_col + mid,
                b_row: self.b_row + mid,
                cols: self.cols - mid,
                ..*self
            };
            (first, second)
        }
    }

    /// Recursion depth below this region.
    pub fn depth(&self) -> usize {
        let mut region = *self;
        let mut depth = 0;
        while !region.is_base() {
            // the second half is never smaller than the first
            region = region.split().1;
            depth += 1;
        }
        depth
    }
}

/// Cache-oblivious transpose: B = A^T by recursive halving.
pub fn transpose_oblivious<A, B>(m: usize, n: usize, a: &A, b: &mut B)
where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    transpose_region(m, n, a, b, Region::full(m, n));
}

/// Transposes one region of A into B. `m` and `n` are the full matrix
/// extents, used only as row strides.
pub fn transpose_region<A, B>(m: usize, n: usize, a: &A, b: &mut B, region: Region)
where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    if region.is_base() {
        for i in 0..region.rows {
            for j in 0..region.cols {
                let value = a.load((region.a_row + i) * m + region.a_col + j);
                b.store((region.b_row + j) * n + region.b_col + i, value);
            }
        }
        return;
    }

    let (first, second) = region.split();
    transpose_region(m, n, a, b, first);
    transpose_region(m, n, a, b, second);
}
