//! Miss-counting cache simulator.
//!
//! Models the 1 KiB direct-mapped cache the blocked strategies are tuned
//! for, and lays A and B out the way two back-to-back static arrays would
//! sit: B starts on a capacity boundary, so `A[i][j]` and `B[i][j]` map to
//! the same set whenever the two matrices have the same width.

pub mod cache;
pub mod traced;

use std::cell::RefCell;

pub use cache::{AccessOutcome, CacheGeometry, CacheStats, DirectMappedCache};
pub use traced::Traced;

use crate::registry::Strategy;

/// Simulated base addresses of A and B for an A of `a_len` elements.
pub fn layout(a_len: usize) -> (usize, usize) {
    let capacity = CacheGeometry::MODELED.capacity();
    let a_bytes = a_len * std::mem::size_of::<i32>();
    (0, a_bytes.div_ceil(capacity).max(1) * capacity)
}

/// Runs `f` against traced views of `a` and `b` sharing one cold cache.
pub fn trace<F>(a: &[i32], b: &mut [i32], f: F) -> CacheStats
where
    F: FnOnce(&Traced<'_, &[i32]>, &mut Traced<'_, &mut [i32]>),
{
    let cache = RefCell::new(DirectMappedCache::new());
    let (base_a, base_b) = layout(a.len());

    let traced_a = Traced::new(a, base_a, &cache);
    let mut traced_b = Traced::new(b, base_b, &cache);
    f(&traced_a, &mut traced_b);

    cache.into_inner().stats()
}

/// Runs a registered strategy under the simulator.
pub fn simulate(strategy: &Strategy, m: usize, n: usize, a: &[i32], b: &mut [i32]) -> CacheStats {
    trace(a, b, |ta, tb| strategy.run(m, n, ta, tb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Load, Store};

    #[test]
    fn b_starts_on_a_capacity_boundary() {
        assert_eq!(layout(1), (0, 1024));
        assert_eq!(layout(256), (0, 1024));
        assert_eq!(layout(257), (0, 2048));
        assert_eq!(layout(64 * 64), (0, 16 * 1024));
        // 67×61 rounds up past 16348 bytes
        assert_eq!(layout(61 * 67), (0, 16 * 1024));
    }

    #[test]
    fn trace_counts_every_access() {
        let a = vec![1, 2, 3, 4];
        let mut b = vec![0; 4];
        let stats = trace(&a, &mut b, |ta, tb| {
            for idx in 0..4 {
                tb.store(idx, ta.load(idx));
            }
        });
        assert_eq!(stats.accesses(), 8);
        assert_eq!(b, a);
    }
}
