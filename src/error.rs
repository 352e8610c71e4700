use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by matrix construction, row operations and elimination.
///
/// A column without a pivot is not an error: the pivot locator returns `None`
/// and the engine moves on to the next column.
#[derive(Debug, Error)]
pub enum EchelonError {
    /// Zero rows, or rows with zero columns.
    #[error("matrix has no rows or no columns")]
    EmptyMatrix,

    /// Rows of unequal length, or operands of mismatched length.
    #[error("invalid dimensions: expected {expected}, found {found}")]
    InvalidDimensions { expected: usize, found: usize },

    /// A row index outside the matrix (0-based).
    #[error("row {row} out of range for a matrix with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("matrix is singular")]
    Singular,

    #[error("integer overflow")]
    Overflow,

    /// A zero tolerance that is NaN or infinite.
    #[error("invalid tolerance {0}: must be a finite number")]
    InvalidTolerance(f64),

    #[error("invalid operation {0:?}")]
    InvalidOperation(String),

    /// A token that could not be read as a number (1-based line).
    #[error("line {line}: invalid number {token:?}")]
    Parse { line: usize, token: String },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console i/o failed")]
    Console(#[from] io::Error),
}

pub type Result<T, E = EchelonError> = std::result::Result<T, E>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EchelonError::InvalidDimensions {
                expected: 3,
                found: 2
            }
            .to_string(),
            "invalid dimensions: expected 3, found 2"
        );
        assert_eq!(
            EchelonError::RowOutOfRange { row: 4, rows: 2 }.to_string(),
            "row 4 out of range for a matrix with 2 rows"
        );
        assert_eq!(
            EchelonError::Parse {
                line: 2,
                token: "x1".into()
            }
            .to_string(),
            "line 2: invalid number \"x1\""
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = EchelonError::Io {
            path: PathBuf::from("Gaussian.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read Gaussian.txt");
        assert!(err.source().is_some());
    }
}
