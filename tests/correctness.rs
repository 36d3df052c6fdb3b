use transpose::blocked::{transpose_with, Staging, Tuning};
use transpose::matrix::naive::transpose_naive;
use transpose::matrix::oracle::{first_mismatch, is_transpose};
use transpose::registry::Registry;
use transpose::{transpose, transpose_blocked, transpose_oblivious, TransposeError};

fn assert_transposed(m: usize, n: usize, a: &[i32], b: &[i32], name: &str) {
    assert_eq!(a.len(), m * n, "{}: A length mismatch", name);
    assert_eq!(b.len(), m * n, "{}: B length mismatch", name);
    if let Some((i, j)) = first_mismatch(m, n, a, b) {
        panic!(
            "{}: mismatch at A[{}][{}]: expected {}, got B[{}][{}] = {}",
            name,
            i,
            j,
            a[i * m + j],
            j,
            i,
            b[j * n + i]
        );
    }
}

fn filled(m: usize, n: usize) -> Vec<i32> {
    (0..m * n).map(|v| (v as i32).wrapping_mul(7919).wrapping_sub(1000)).collect()
}

fn check_all_strategies(m: usize, n: usize) {
    let a = filled(m, n);
    for strategy in &Registry::standard() {
        let mut b = vec![i32::MIN; m * n];
        strategy.apply(m, n, &a, &mut b);
        assert_transposed(m, n, &a, &b, &format!("{} {}x{}", strategy.name(), m, n));
    }
}

// ============================================================
// Named shapes
// ============================================================

#[test]
fn test_32x32() {
    check_all_strategies(32, 32);
}

#[test]
fn test_64x64() {
    check_all_strategies(64, 64);
}

#[test]
fn test_61x67() {
    check_all_strategies(61, 67);
}

#[test]
fn test_67x61() {
    check_all_strategies(67, 61);
}

#[test]
fn test_32x32_sample_values() {
    let (m, n) = (32, 32);
    let a: Vec<i32> = (0..(m * n) as i32).collect();
    let mut b = vec![0; m * n];

    transpose(m, n, &a, &mut b).unwrap();

    assert!(is_transpose(m, n, &a[..], &b[..]));
    // B[j][i] == A[i][j] == i*32 + j
    assert_eq!(b[5 * n + 3], 3 * 32 + 5);
    assert_eq!(b[5 * n + 3], 101);
    assert_eq!(b[0], 0);
    assert_eq!(b[31 * n], 31);
    assert_eq!(b[31 * n + 31], 31 * 32 + 31);
    assert_eq!(b[n + 30], 30 * 32 + 1);
}

// ============================================================
// Degenerate shapes
// ============================================================

#[test]
fn test_degenerate_shapes() {
    let shapes = [(1, 1), (1, 1000), (1000, 1), (1, 2), (2, 1), (1, 67), (61, 1)];
    for (m, n) in shapes {
        check_all_strategies(m, n);
    }
}

// ============================================================
// Tile boundary tests
// ============================================================

#[test]
fn test_tile_boundaries() {
    let sizes = [3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 33, 63, 65];
    for m in sizes {
        for n in sizes {
            check_all_strategies(m, n);
        }
    }
}

#[test]
fn test_tuned_stagings_off_their_home_shape() {
    // The staging kernels must stay correct whatever shape they're given.
    let tunings = [
        Tuning::new(8, Staging::RowBuffered),
        Tuning::new(8, Staging::QuadrantSwap),
        Tuning::new(4, Staging::QuadrantSwap),
        Tuning::new(32, Staging::RowBuffered),
    ];
    for tuning in tunings {
        for (m, n) in [(32, 32), (64, 64), (61, 67), (24, 40), (13, 8)] {
            let a = filled(m, n);
            let mut b = vec![0; m * n];
            transpose_with(tuning, m, n, &a[..], &mut b[..]);
            assert_transposed(m, n, &a, &b, &format!("{:?} {}x{}", tuning, m, n));
        }
    }
}

// ============================================================
// Involution
// ============================================================

#[test]
fn test_transpose_twice_is_identity() {
    for (m, n) in [(32, 32), (64, 64), (61, 67), (1, 9), (9, 1)] {
        let a = filled(m, n);
        let mut b = vec![0; m * n];
        let mut c = vec![0; m * n];

        transpose_blocked(m, n, &a[..], &mut b[..]);
        transpose_oblivious(n, m, &b[..], &mut c[..]);
        assert_eq!(a, c, "blocked then oblivious {}x{}", m, n);

        transpose_naive(m, n, &a[..], &mut b[..]);
        transpose_blocked(n, m, &b[..], &mut c[..]);
        assert_eq!(a, c, "naive then blocked {}x{}", m, n);
    }
}

// ============================================================
// Strategies agree with each other
// ============================================================

#[test]
fn test_strategies_agree_with_baseline() {
    for (m, n) in [(32, 32), (64, 64), (61, 67), (100, 3)] {
        let a = filled(m, n);
        let mut expected = vec![0; m * n];
        transpose_naive(m, n, &a[..], &mut expected[..]);

        for strategy in &Registry::standard() {
            let mut b = vec![0; m * n];
            strategy.apply(m, n, &a, &mut b);
            assert_eq!(expected, b, "{} {}x{}", strategy.name(), m, n);
        }
    }
}

// ============================================================
// Checked front door
// ============================================================

#[test]
fn test_checked_transpose_rejects_bad_extents() {
    let a = vec![0; 12];
    let mut b = vec![0; 12];

    assert_eq!(
        transpose(0, 12, &a, &mut b),
        Err(TransposeError::ZeroDimension { m: 0, n: 12 })
    );
    assert_eq!(
        transpose(5, 3, &a, &mut b),
        Err(TransposeError::LengthMismatch {
            which: "A",
            expected: 15,
            got: 12
        })
    );

    let mut short = vec![0; 11];
    assert_eq!(
        transpose(4, 3, &a, &mut short),
        Err(TransposeError::LengthMismatch {
            which: "B",
            expected: 12,
            got: 11
        })
    );
    assert!(transpose(4, 3, &a, &mut b).is_ok());
}

#[test]
fn test_oracle_catches_a_single_wrong_element() {
    let (m, n) = (61, 67);
    let a = filled(m, n);
    let mut b = vec![0; m * n];
    transpose_blocked(m, n, &a[..], &mut b[..]);

    b[40 * n + 50] ^= 1;
    assert!(!is_transpose(m, n, &a[..], &b[..]));
    assert_eq!(first_mismatch(m, n, &a[..], &b[..]), Some((50, 40)));
}
