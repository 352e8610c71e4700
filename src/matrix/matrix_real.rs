use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use num_traits::Float;

use crate::error::{EchelonError, Result};
use crate::matrix::matrix::{check_rectangular, Matrix};
use crate::matrix::row_ops;

pub trait RealElement:  // Avoid repeating all the traits
    Float
    + FromStr
    + fmt::Display
    + fmt::Debug
{
}

impl<T> RealElement for T where T: Float + FromStr + fmt::Display + fmt::Debug {}

/// Dense matrix of reals stored as a list of equal-length rows.
///
/// Always has at least one row and one column. Rows can be mutated and
/// swapped but never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixReal<T> {
    cols: usize,
    lines: Vec<Vec<T>>,
}

impl<T: RealElement> Matrix<T> for MatrixReal<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let cols = check_rectangular(&lines)?;
        Ok(MatrixReal { cols, lines })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.lines.clone()
    }

    fn identity(n: usize) -> Result<Self> {
        Self::from_list(
            (0..n)
                .map(|i| (0..n).map(|j| if i == j { T::one() } else { T::zero() }).collect())
                .collect(),
        )
    }

    fn transpose(&self) -> Self {
        MatrixReal {
            cols: self.lines.len(),
            lines: (0..self.cols)
                .map(|c| self.lines.iter().map(|line| line[c]).collect())
                .collect(),
        }
    }

    fn rows(&self) -> usize {
        self.lines.len()
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.lines[row][col]
    }
}

impl<T: RealElement> MatrixReal<T> {
    pub fn row(&self, row: usize) -> &[T] {
        &self.lines[row]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.lines.iter().map(|line| line.as_slice())
    }

    /// Multiply row `row` (0-based) by `scalar`.
    pub fn scale_row(&mut self, row: usize, scalar: T) -> Result<()> {
        self.check_row(row)?;
        log::trace!("R{} <- {} * R{}", row, scalar, row);
        row_ops::scale_row(&mut self.lines[row], scalar);
        Ok(())
    }

    /// `R[target] += scalar * R[source]` (0-based). `target == source` is
    /// allowed and scales the row by `1 + scalar`.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scalar: T) -> Result<()> {
        self.check_row(target)?;
        self.check_row(source)?;
        log::trace!("R{} <- R{} + {} * R{}", target, target, scalar, source);

        let source_line = self.lines[source].clone();
        row_ops::add_scaled_row(&mut self.lines[target], &source_line, scalar)
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        if a != b {
            log::trace!("R{} <-> R{}", a, b);
            self.lines.swap(a, b);
        }
        Ok(())
    }

    /// Re-check the shape invariant before a mutating pass.
    pub fn validate(&self) -> Result<()> {
        if check_rectangular(&self.lines)? != self.cols {
            return Err(EchelonError::InvalidDimensions {
                expected: self.cols,
                found: self.lines[0].len(),
            });
        }
        Ok(())
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.lines[row]
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.lines.len() {
            return Err(EchelonError::RowOutOfRange {
                row,
                rows: self.lines.len(),
            });
        }
        Ok(())
    }
}

/// One row per line, values separated by a space. `-0` prints as `0`.
impl<T: RealElement> fmt::Display for MatrixReal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            let text = line
                .iter()
                .map(|x| if x.is_zero() { T::zero() } else { *x })
                .join(" ");
            writeln!(f, "{}", text)?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
