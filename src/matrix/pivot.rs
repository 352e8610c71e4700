use crate::config::EliminationConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::{MatrixReal, RealElement};

/// Position and value of the entry chosen to clear a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

/// Partial pivoting: the row at or below `start_row` with the largest `|a[r][column]|`.
///
/// The first row reaching the maximum wins. Returns `None` when every candidate
/// is zero, i.e. `column` has no pivot below `start_row`, and when `column` is
/// outside the matrix.
pub fn find_pivot<T: RealElement>(
    matrix: &MatrixReal<T>,
    column: usize,
    start_row: usize,
    config: &EliminationConfig<T>,
) -> Option<Pivot<T>> {
    if column >= matrix.cols() {
        return None;
    }

    let mut best: Option<Pivot<T>> = None;
    let mut best_abs = T::zero();

    for row in start_row..matrix.rows() {
        let value = matrix.at(row, column);
        let magnitude = value.abs();

        if magnitude > best_abs && !config.is_zero(value) {
            best_abs = magnitude;
            best = Some(Pivot {
                row,
                col: column,
                value,
            });
        }
    }

    best
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
