use super::{Load, Store};

/// Tile side [`transpose_cache_aware`] uses for shapes it has no entry for.
pub const DEFAULT_TILE: usize = 8;

// (M, N) → tile side. 64×64 drops to 4 so that a tile's B rows stay
// clear of the rows four below them.
const CACHE_AWARE_TILES: &[((usize, usize), usize)] = &[((32, 32), 8), ((64, 64), 4), ((61, 67), 8)];

/// Direct tiled transpose with a caller-chosen tile side.
///
/// Sweeps `tile`×`tile` blocks of A in row-major order and copies each
/// element straight into B. Edge tiles are clamped with `min`, so any
/// shape works. No staging: reads of A and writes of B interleave
/// element by element.
///
/// # Panics
///
/// Panics if `tile` is zero.
pub fn transpose_tiled<A, B>(m: usize, n: usize, a: &A, b: &mut B, tile: usize)
where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    assert!(tile > 0, "tile side must be non-zero");

    for ii in (0..n).step_by(tile) {
        let i_end = (ii + tile).min(n);
        for jj in (0..m).step_by(tile) {
            let j_end = (jj + tile).min(m);
            copy_tile(m, n, a, b, ii..i_end, jj..j_end);
        }
    }
}

/// Tile side picked by [`transpose_cache_aware`] for an M×N transpose.
pub fn cache_aware_tile(m: usize, n: usize) -> usize {
    CACHE_AWARE_TILES
        .iter()
        .find(|(shape, _)| *shape == (m, n))
        .map_or(DEFAULT_TILE, |&(_, tile)| tile)
}

/// Direct tile sweep with the tile side keyed by shape.
///
/// No staging, just a smaller tile where rows alias: 4×4 on 64×64,
/// 8×8 everywhere else.
pub fn transpose_cache_aware<A, B>(m: usize, n: usize, a: &A, b: &mut B)
where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    transpose_tiled(m, n, a, b, cache_aware_tile(m, n));
}

/// Copies one clamped tile of A into B, element by element.
#[inline]
pub(crate) fn copy_tile<A, B>(
    m: usize,
    n: usize,
    a: &A,
    b: &mut B,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
) where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    for i in rows {
        for j in cols.clone() {
            b.store(j * n + i, a.load(i * m + j));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::oracle::is_transpose;

    #[test]
    fn cache_aware_tiles_by_shape() {
        assert_eq!(cache_aware_tile(32, 32), 8);
        assert_eq!(cache_aware_tile(64, 64), 4);
        assert_eq!(cache_aware_tile(61, 67), 8);
        assert_eq!(cache_aware_tile(67, 61), DEFAULT_TILE);
    }

    #[test]
    fn cache_aware_is_correct_on_ragged_shapes() {
        for (m, n) in [(1, 1), (64, 64), (61, 67), (5, 9)] {
            let a: Vec<i32> = (0..(m * n) as i32).collect();
            let mut b = vec![0; m * n];
            transpose_cache_aware(m, n, &a[..], &mut b[..]);
            assert!(is_transpose(m, n, &a[..], &b[..]), "{}x{}", m, n);
        }
    }
}
