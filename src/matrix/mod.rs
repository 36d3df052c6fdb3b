//! Element access and the reference transposes.
//!
//! Every strategy is written against [`Load`] and [`Store`] rather than raw
//! slices. On plain `[i32]` buffers they compile down to indexing; the cache
//! simulator in [`crate::sim`] implements them to record each access.
//!
//! Matrices are row-major. A is N×M (N rows, M columns), B is M×N, and
//! `A[i][j]` lives at `i * m + j`.

pub mod naive;
pub mod oracle;
pub mod tiled;

/// Read access to a flat row-major buffer.
pub trait Load {
    fn load(&self, idx: usize) -> i32;
}

/// Write access. Destinations are also readable: the 64×64 staging reads
/// back values it parked in B earlier in the same tile.
pub trait Store: Load {
    fn store(&mut self, idx: usize, value: i32);
}

impl Load for [i32] {
    #[inline(always)]
    fn load(&self, idx: usize) -> i32 {
        self[idx]
    }
}

impl Store for [i32] {
    #[inline(always)]
    fn store(&mut self, idx: usize, value: i32) {
        self[idx] = value;
    }
}

impl Load for Vec<i32> {
    #[inline(always)]
    fn load(&self, idx: usize) -> i32 {
        self[idx]
    }
}

impl Store for Vec<i32> {
    #[inline(always)]
    fn store(&mut self, idx: usize, value: i32) {
        self[idx] = value;
    }
}

impl<T: Load + ?Sized> Load for &T {
    #[inline(always)]
    fn load(&self, idx: usize) -> i32 {
        (**self).load(idx)
    }
}

impl<T: Load + ?Sized> Load for &mut T {
    #[inline(always)]
    fn load(&self, idx: usize) -> i32 {
        (**self).load(idx)
    }
}

impl<T: Store + ?Sized> Store for &mut T {
    #[inline(always)]
    fn store(&mut self, idx: usize, value: i32) {
        (**self).store(idx, value);
    }
}
