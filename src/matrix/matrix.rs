use crate::error::{EchelonError, Result};

/// Shape and element access shared by the dense matrix types.
pub trait Matrix<T>
where
    Self: Sized,
{
    /// Build from a list of rows; empty input and ragged rows are rejected.
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn identity(n: usize) -> Result<Self>;
    fn transpose(&self) -> Self;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;
}

/// Column count of `lines` if it is a non-empty rectangle.
pub(crate) fn check_rectangular<T>(lines: &[Vec<T>]) -> Result<usize> {
    let cols = lines.first().map(|l| l.len()).unwrap_or(0);
    if cols == 0 {
        return Err(EchelonError::EmptyMatrix);
    }

    match lines.iter().find(|l| l.len() != cols) {
        Some(ragged) => Err(EchelonError::InvalidDimensions {
            expected: cols,
            found: ragged.len(),
        }),
        None => Ok(cols),
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
