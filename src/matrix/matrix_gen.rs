use num_traits::{CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, One, Zero};
use rayon::prelude::*;

use crate::error::{EchelonError, Result};
use crate::matrix::matrix::{check_rectangular, Matrix};
use itertools::Itertools;
use std::fmt;
use std::ops;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub trait GenElement:  // Avoid repeating all the traits
    Copy
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::iter::Sum<Self>
    + fmt::Display
    + fmt::Debug
    + Send
    + Sync
{
}

impl<T> GenElement for T where
    T: Copy
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + std::iter::Sum<T>
        + fmt::Display
        + fmt::Debug
        + Send
        + Sync
{
}

/// Dense row-major matrix over any ring-like element, used for plain
/// arithmetic (sums, products, transpose, 2x2 inverse).
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let cols = check_rectangular(&lines)?;

        Ok(MatrixGen {
            rows: lines.len(),
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(EchelonError::EmptyMatrix);
        }

        Ok(MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }

    fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

impl<T: GenElement> MatrixGen<T> {
    /// Read `rows * cols` values in row-major order.
    pub fn from_values(rows: usize, cols: usize, values: &[T]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(EchelonError::EmptyMatrix);
        }
        if values.len() != rows * cols {
            return Err(EchelonError::InvalidDimensions {
                expected: rows * cols,
                found: values.len(),
            });
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: values.to_vec(),
        })
    }

    pub fn scale(&self, scalar: T) -> MatrixGen<T> {
        MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|x| *x * scalar).collect(),
        }
    }

    pub fn determinant(&self) -> Result<T> {
        self.check_2x2()?;
        Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0))
    }

    /// Adjugate divided by the determinant. Integer elements truncate, and
    /// overflow panics the way `/` does (`i64::MIN / -1`); see
    /// [`MatrixGen::checked_inverse`].
    pub fn inverse(&self) -> Result<MatrixGen<T>> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(EchelonError::Singular);
        }

        let adjugate = [
            self.at(1, 1),
            -self.at(0, 1),
            -self.at(1, 0),
            self.at(0, 0),
        ];

        Ok(MatrixGen {
            rows: 2,
            cols: 2,
            cells: adjugate.iter().map(|x| *x / det).collect(),
        })
    }

    fn check_2x2(&self) -> Result<()> {
        if self.rows != 2 {
            return Err(EchelonError::InvalidDimensions {
                expected: 2,
                found: self.rows,
            });
        }
        if self.cols != 2 {
            return Err(EchelonError::InvalidDimensions {
                expected: 2,
                found: self.cols,
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, rhs: &MatrixGen<T>) -> Result<()> {
        if self.rows != rhs.rows {
            return Err(EchelonError::InvalidDimensions {
                expected: self.rows,
                found: rhs.rows,
            });
        }
        if self.cols != rhs.cols {
            return Err(EchelonError::InvalidDimensions {
                expected: self.cols,
                found: rhs.cols,
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &MatrixGen<T>, op: impl Fn(T, T) -> T) -> Result<MatrixGen<T>> {
        self.check_same_shape(rhs)?;

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
        })
    }
}

impl<T> MatrixGen<T>
where
    T: GenElement + CheckedMul + CheckedSub + CheckedDiv + CheckedNeg,
{
    pub fn checked_determinant(&self) -> Result<T> {
        self.check_2x2()?;
        let main = self.at(0, 0).checked_mul(&self.at(1, 1));
        let anti = self.at(0, 1).checked_mul(&self.at(1, 0));
        match (main, anti) {
            (Some(main), Some(anti)) => main.checked_sub(&anti).ok_or(EchelonError::Overflow),
            _ => Err(EchelonError::Overflow),
        }
    }

    /// Integer inverse that reports overflow instead of panicking.
    pub fn checked_inverse(&self) -> Result<MatrixGen<T>> {
        let det = self.checked_determinant()?;
        if det == T::zero() {
            return Err(EchelonError::Singular);
        }

        let adjugate = [
            Some(self.at(1, 1)),
            self.at(0, 1).checked_neg(),
            self.at(1, 0).checked_neg(),
            Some(self.at(0, 0)),
        ];

        Ok(MatrixGen {
            rows: 2,
            cols: 2,
            cells: adjugate
                .iter()
                .map(|x| x.and_then(|x| x.checked_div(&det)).ok_or(EchelonError::Overflow))
                .collect::<Result<Vec<T>>>()?,
        })
    }
}

impl<T: GenElement> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn add(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: GenElement> ops::Sub<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn sub(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: GenElement> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>> {
        if self.cols != rhs.rows {
            return Err(EchelonError::InvalidDimensions {
                expected: self.cols,
                found: rhs.rows,
            });
        }

        let rot = rhs.transpose();
        let mut cells = vec![T::zero(); self.rows * rhs.cols];

        cells
            .par_chunks_mut(rhs.cols)
            .enumerate()
            .for_each(|(r, row)| {
                let lhs_row = &self.cells[r * self.cols..(r + 1) * self.cols];
                for (c, cell) in row.iter_mut().enumerate() {
                    let rhs_col = &rot.cells[c * rot.cols..(c + 1) * rot.cols];
                    *cell = lhs_row.iter().zip(rhs_col).map(|(a, b)| *a * *b).sum();
                }
            });

        Ok(MatrixGen {
            rows: self.rows,
            cols: rhs.cols,
            cells,
        })
    }
}

impl<T: GenElement> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.cols) {
            writeln!(f, "{}", line.iter().join(" "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn m(lines: Vec<Vec<i64>>) -> MatrixGen<i64> {
        MatrixGen::from_list(lines).unwrap()
    }

    #[test]
    fn test_matrix_generic() {
        let a = MatrixGen::<i64>::identity(2).unwrap();
        let b = m(vec![vec![2, 3], vec![4, 5]]);

        let c = (&a + &b).unwrap();
        assert_eq!(c.to_list(), vec![vec![3, 3], vec![4, 6]]);

        let c = (&b - &a).unwrap();
        assert_eq!(c.to_list(), vec![vec![1, 3], vec![4, 4]]);

        let a = m(vec![vec![6, -101], vec![1, -1]]);
        let c = (&a * &b).unwrap();
        assert_eq!(c.to_list(), vec![vec![-392, -487], vec![-2, -2]]);
        let c = (&b * &a).unwrap();
        assert_eq!(c.to_list(), vec![vec![15, -205], vec![29, -409]]);

        assert_eq!(b.scale(3).to_list(), vec![vec![6, 9], vec![12, 15]]);
    }

    #[test]
    fn test_rectangular_product_and_transpose() {
        let a = m(vec![vec![1, 2, 5, 77], vec![3, 4, 7, 11], vec![4, 8, 9, 1]]);

        assert_eq!(
            a.transpose().to_list(),
            vec![vec![1, 3, 4], vec![2, 4, 8], vec![5, 7, 9], vec![77, 11, 1]]
        );

        let x = m(vec![vec![-8], vec![7], vec![1], vec![0]]);
        assert_eq!((&a * &x).unwrap().to_list(), vec![vec![11], vec![11], vec![33]]);

        assert!(matches!(
            &a * &a,
            Err(EchelonError::InvalidDimensions {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            &a + &x,
            Err(EchelonError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_determinant_and_inverse() {
        let a = m(vec![vec![4, 7], vec![2, 6]]);
        assert_eq!(a.determinant().unwrap(), 10);

        let unimodular = m(vec![vec![2, 1], vec![1, 1]]);
        let inv = unimodular.inverse().unwrap();
        assert_eq!(inv.to_list(), vec![vec![1, -1], vec![-1, 2]]);
        assert_eq!(
            (&unimodular * &inv).unwrap(),
            MatrixGen::identity(2).unwrap()
        );

        // integer division truncates
        assert_eq!(a.inverse().unwrap().to_list(), vec![vec![0, 0], vec![0, 0]]);

        assert!(matches!(
            m(vec![vec![1, 2], vec![2, 4]]).inverse(),
            Err(EchelonError::Singular)
        ));
        assert!(matches!(
            MatrixGen::<i64>::identity(3).unwrap().determinant(),
            Err(EchelonError::InvalidDimensions {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_checked_inverse_reports_overflow() {
        // determinant -1, and the adjugate holds i64::MIN
        let a = m(vec![vec![0, 1], vec![1, i64::MIN]]);
        assert_eq!(a.checked_determinant().unwrap(), -1);
        assert!(matches!(a.checked_inverse(), Err(EchelonError::Overflow)));

        let a = m(vec![vec![i64::MIN, 0], vec![1, -1]]);
        assert!(matches!(a.checked_inverse(), Err(EchelonError::Overflow)));

        let b = m(vec![vec![1, i64::MIN], vec![0, 1]]);
        assert!(matches!(b.checked_inverse(), Err(EchelonError::Overflow)));

        let c = m(vec![vec![i64::MAX, 2], vec![2, i64::MAX]]);
        assert!(matches!(c.checked_determinant(), Err(EchelonError::Overflow)));

        let unimodular = m(vec![vec![2, 1], vec![1, 1]]);
        assert_eq!(unimodular.checked_inverse().unwrap(), unimodular.inverse().unwrap());
        assert!(matches!(
            m(vec![vec![1, 2], vec![2, 4]]).checked_inverse(),
            Err(EchelonError::Singular)
        ));
    }

    #[test]
    #[should_panic]
    fn test_unchecked_inverse_panics_on_overflow() {
        let _ = m(vec![vec![0, 1], vec![1, i64::MIN]]).inverse();
    }

    #[test]
    fn test_float_inverse() {
        let a = MatrixGen::from_list(vec![vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
        let inv = a.inverse().unwrap();
        let product = (&a * &inv).unwrap();
        for (x, y) in product.cells.iter().zip(MatrixGen::<f64>::identity(2).unwrap().cells) {
            approx::assert_abs_diff_eq!(*x, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_from_values_and_display() {
        let a = MatrixGen::from_values(2, 3, &[1, 2, 3, -4, 5, 6]).unwrap();
        assert_eq!(a.to_string(), "1 2 3\n-4 5 6\n");
        assert!(matches!(
            MatrixGen::from_values(2, 2, &[1, 2, 3]),
            Err(EchelonError::InvalidDimensions {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            MatrixGen::<i64>::identity(0),
            Err(EchelonError::EmptyMatrix)
        ));
    }
}
