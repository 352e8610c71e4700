use crate::config::EliminationConfig;
use crate::error::Result;
use crate::matrix::echelon::leading_column;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::{MatrixReal, RealElement};
use crate::matrix::pivot::{find_pivot, Pivot};
use crate::matrix::row_ops::{add_scaled_row, normalize_row};

/// Pivots used by an elimination pass, top row first. Each `value` is the entry
/// before it was normalized to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct EliminationReport<T> {
    pub pivots: Vec<Pivot<T>>,
}

impl<T> EliminationReport<T> {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn pivot_columns(&self) -> Vec<usize> {
        self.pivots.iter().map(|p| p.col).collect()
    }
}

/// Gauss-Jordan sweep with partial pivoting, in place.
///
/// Every pivot is normalized to 1 and cleared from all other rows. Columns
/// without a pivot are skipped and the same row is retried on the next column;
/// the pass ends when the columns run out, leaving the remaining rows zero.
pub fn to_row_echelon<T: RealElement>(
    matrix: &mut MatrixReal<T>,
    config: &EliminationConfig<T>,
) -> Result<EliminationReport<T>> {
    matrix.validate()?;

    let rows = matrix.rows();
    let cols = matrix.cols();
    let mut pivots = vec![];
    let mut lead = 0;

    for row in 0..rows {
        let pivot = loop {
            if lead >= cols {
                break None;
            }
            match find_pivot(matrix, lead, row, config) {
                Some(pivot) => break Some(pivot),
                None => {
                    log::debug!("column {} has no pivot from row {}", lead, row);
                    lead += 1;
                }
            }
        };

        let Some(pivot) = pivot else {
            break;
        };
        log::debug!(
            "pivot {} at ({}, {}) moved to row {}",
            pivot.value,
            pivot.row,
            lead,
            row
        );

        matrix.swap_rows(pivot.row, row)?;
        normalize_row(matrix.row_mut(row), pivot.value);

        let pivot_line = matrix.row(row).to_vec();
        for i in 0..rows {
            if i == row {
                continue;
            }
            let factor = matrix.at(i, lead);
            add_scaled_row(matrix.row_mut(i), &pivot_line, -factor)?;
        }

        pivots.push(Pivot {
            row,
            col: lead,
            value: pivot.value,
        });
        lead += 1;
    }

    Ok(EliminationReport { pivots })
}

/// [`to_row_echelon`] followed by a second pass that rescales each row by its
/// leading entry, found again by scanning rather than taken from the sweep.
pub fn to_reduced_echelon<T: RealElement>(
    matrix: &mut MatrixReal<T>,
    config: &EliminationConfig<T>,
) -> Result<EliminationReport<T>> {
    let report = to_row_echelon(matrix, config)?;

    for row in 0..matrix.rows() {
        if let Some(col) = leading_column(matrix.row(row), config) {
            let leading = matrix.at(row, col);
            if leading != T::one() {
                normalize_row(matrix.row_mut(row), leading);
            }
        }
    }

    log::debug!(
        "reduced {}x{} matrix, rank {}",
        matrix.rows(),
        matrix.cols(),
        report.rank()
    );
    Ok(report)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
