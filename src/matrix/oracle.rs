use super::Load;

/// Checks that B is the transpose of A: `A[i][j] == B[j][i]` for every
/// `i < n`, `j < m`.
///
/// Stops at the first mismatch. Never panics on well-sized buffers and
/// uses no extra memory.
pub fn is_transpose<A, B>(m: usize, n: usize, a: &A, b: &B) -> bool
where
    A: Load + ?Sized,
    B: Load + ?Sized,
{
    for i in 0..n {
        for j in 0..m {
            if a.load(i * m + j) != b.load(j * n + i) {
                return false;
            }
        }
    }
    true
}

/// Locates the first element where B disagrees with A^T, as `(i, j)` in A.
///
/// Same scan order as [`is_transpose`]; handy for assertion messages.
pub fn first_mismatch<A, B>(m: usize, n: usize, a: &A, b: &B) -> Option<(usize, usize)>
where
    A: Load + ?Sized,
    B: Load + ?Sized,
{
    (0..n)
        .flat_map(|i| (0..m).map(move |j| (i, j)))
        .find(|&(i, j)| a.load(i * m + j) != b.load(j * n + i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_correct_transpose() {
        // 2×3 source
        let a = vec![1, 2, 3, 4, 5, 6];
        let b = vec![1, 4, 2, 5, 3, 6];
        assert!(is_transpose(3, 2, &a[..], &b[..]));
        assert_eq!(first_mismatch(3, 2, &a[..], &b[..]), None);
    }

    #[test]
    fn rejects_a_copy_of_a_non_square_source() {
        let a = vec![1, 2, 3, 4, 5, 6];
        let b = a.clone();
        assert!(!is_transpose(3, 2, &a[..], &b[..]));
        assert_eq!(first_mismatch(3, 2, &a[..], &b[..]), Some((0, 1)));
    }

    #[test]
    fn single_element_compares_directly() {
        assert!(is_transpose(1, 1, &[7][..], &[7][..]));
        assert!(!is_transpose(1, 1, &[7][..], &[8][..]));
    }
}
