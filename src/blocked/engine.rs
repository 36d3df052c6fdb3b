//! Tiled driver and the per-tile staging kernels.

use std::ops::Range;

use super::tuning::{tuning_for, Staging, Tuning};
use crate::matrix::tiled::copy_tile;
use crate::matrix::{Load, Store};

/// Integers per 32-byte cache line. Sizes the stack staging buffer.
pub const LINE_INTS: usize = 8;

const HALF: usize = LINE_INTS / 2;

/// Blocked transpose: B = A^T using the tuning for this shape.
///
/// Correct for any `m, n`; only the miss count depends on the shape.
pub fn transpose_blocked<A, B>(m: usize, n: usize, a: &A, b: &mut B)
where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    transpose_with(tuning_for(m, n), m, n, a, b);
}

/// Runs the tiled sweep with an explicit tuning.
///
/// Tiles are visited row-major over A. Edge tiles are clamped with `min`,
/// and a `QuadrantSwap` tile that isn't a full 8×8 is handled row-buffered.
/// A zero tile side is treated as 1.
pub fn transpose_with<A, B>(tuning: Tuning, m: usize, n: usize, a: &A, b: &mut B)
where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    let tile = tuning.tile.max(1);

    for ii in (0..n).step_by(tile) {
        let i_end = (ii + tile).min(n);
        for jj in (0..m).step_by(tile) {
            let j_end = (jj + tile).min(m);

            match tuning.staging {
                Staging::Direct => copy_tile(m, n, a, b, ii..i_end, jj..j_end),
                Staging::RowBuffered => row_buffered_tile(m, n, a, b, ii..i_end, jj..j_end),
                Staging::QuadrantSwap => {
                    if i_end - ii == LINE_INTS && j_end - jj == LINE_INTS {
                        quadrant_swap_tile(m, n, a, b, ii, jj);
                    } else {
                        row_buffered_tile(m, n, a, b, ii..i_end, jj..j_end);
                    }
                }
            }
        }
    }
}

// Each row of the tile is read from A in line-sized chunks into the stack
// buffer, then scattered down a column of B. On the diagonal the A line
// and the B line being written share a set; finishing the reads first
// means A's line is evicted once instead of once per element.
fn row_buffered_tile<A, B>(
    m: usize,
    n: usize,
    a: &A,
    b: &mut B,
    rows: Range<usize>,
    cols: Range<usize>,
) where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    let mut stage = [0i32; LINE_INTS];

    for i in rows {
        for j0 in cols.clone().step_by(LINE_INTS) {
            let width = (cols.end - j0).min(LINE_INTS);
            let chunk = &mut stage[..width];

            for (k, slot) in chunk.iter_mut().enumerate() {
                *slot = a.load(i * m + j0 + k);
            }
            for (k, &value) in chunk.iter().enumerate() {
                b.store((j0 + k) * n + i, value);
            }
        }
    }
}

// Full 8×8 tile at A[i..i+8][j..j+8], as four 4×4 quadrants:
//
//     A = | A00 A01 |      B = A^T = | A00^T A10^T |
//         | A10 A11 |                | A01^T A11^T |
//
// Pass 1 reads the top four rows of A one line at a time. A00^T goes to
// its final place; A01^T is parked in B's upper-right, whose lines are
// already resident.
// Pass 2 walks B's top four rows. For each it pulls the parked A01^T row
// out, drops in the matching A10^T row, and writes the parked values plus
// the A11^T row into the lower half of B. Every B line is then touched in
// one burst, so the tile costs roughly one miss per line instead of one
// per element.
#[allow(clippy::needless_range_loop)]
fn quadrant_swap_tile<A, B>(m: usize, n: usize, a: &A, b: &mut B, i: usize, j: usize)
where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    let mut stage = [0i32; LINE_INTS];
    let mut parked = [0i32; HALF];

    for k in i..i + HALF {
        for (c, slot) in stage.iter_mut().enumerate() {
            *slot = a.load(k * m + j + c);
        }
        for c in 0..HALF {
            b.store((j + c) * n + k, stage[c]);
        }
        for c in 0..HALF {
            b.store((j + c) * n + k + HALF, stage[HALF + c]);
        }
    }

    for k in j..j + HALF {
        let (lower_left, lower_right) = stage.split_at_mut(HALF);
        for r in 0..HALF {
            lower_left[r] = a.load((i + HALF + r) * m + k);
        }
        for r in 0..HALF {
            lower_right[r] = a.load((i + HALF + r) * m + k + HALF);
        }
        for (r, slot) in parked.iter_mut().enumerate() {
            *slot = b.load(k * n + i + HALF + r);
        }

        for r in 0..HALF {
            b.store(k * n + i + HALF + r, lower_left[r]);
        }
        for r in 0..HALF {
            b.store((k + HALF) * n + i + r, parked[r]);
        }
        for r in 0..HALF {
            b.store((k + HALF) * n + i + HALF + r, lower_right[r]);
        }
    }
}
