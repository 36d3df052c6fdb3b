use super::{Load, Store};

/// Baseline transpose: B = A^T with a plain row-wise scan of A.
///
/// Reads A sequentially but writes B with stride `n`, so on the modelled
/// cache nearly every write to B misses. Use this as a correctness
/// reference and as the floor the tuned strategies are measured against.
///
/// # Arguments
///
/// * `m` - Columns of A, rows of B
/// * `n` - Rows of A, columns of B
/// * `a` - Source matrix (n × m), row-major
/// * `b` - Destination matrix (m × n), row-major
///
/// # Example
///
/// ```
/// use transpose::matrix::naive::transpose_naive;
///
/// let a = vec![1, 2, 3,   // 2×3 matrix
///              4, 5, 6];
/// let mut b = vec![0; 6]; // will be 3×2
///
/// transpose_naive(3, 2, &a[..], &mut b[..]);
///
/// assert_eq!(b, vec![1, 4,
///                    2, 5,
///                    3, 6]);
/// ```
pub fn transpose_naive<A, B>(m: usize, n: usize, a: &A, b: &mut B)
where
    A: Load + ?Sized,
    B: Store + ?Sized,
{
    for i in 0..n {
        for j in 0..m {
            let tmp = a.load(i * m + j);
            b.store(j * n + i, tmp);
        }
    }
}
