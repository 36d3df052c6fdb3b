use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransposeError {
    #[error("matrix dimensions must be non-zero, got {m}x{n}")]
    ZeroDimension { m: usize, n: usize },
    #[error("{which}: expected {expected} elements, got {got}")]
    LengthMismatch {
        which: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("no strategy registered under {0:?}")]
    UnknownStrategy(String),
    #[error("{m}x{n} has more elements than sequential i32 values can fill")]
    TooLarge { m: usize, n: usize },
    #[error("invalid shape {0:?}, expected MxN")]
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, TransposeError>;

/// Validates that `a` holds an N×M matrix and `b` an M×N one.
pub fn check_extents(m: usize, n: usize, a_len: usize, b_len: usize) -> Result<()> {
    if m == 0 || n == 0 {
        return Err(TransposeError::ZeroDimension { m, n });
    }
    let expected = m * n;
    if a_len != expected {
        return Err(TransposeError::LengthMismatch {
            which: "A",
            expected,
            got: a_len,
        });
    }
    if b_len != expected {
        return Err(TransposeError::LengthMismatch {
            which: "B",
            expected,
            got: b_len,
        });
    }
    Ok(())
}
