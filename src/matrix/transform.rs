use itertools::Itertools;
use num_traits::Float;

use crate::error::{EchelonError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};

/// Memory order used to print a transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    RowMajor,
    ColumnMajor,
}

/// 4x4 homogeneous transformations of 3-D space. Angles are in radians and
/// rotations follow the right-hand rule.
impl<T: GenElement + Float> MatrixGen<T> {
    pub fn scaling(x: T, y: T, z: T) -> MatrixGen<T> {
        let (o, l) = (T::zero(), T::one());
        homogeneous([
            [x, o, o, o],
            [o, y, o, o],
            [o, o, z, o],
            [o, o, o, l],
        ])
    }

    pub fn translation(x: T, y: T, z: T) -> MatrixGen<T> {
        let (o, l) = (T::zero(), T::one());
        homogeneous([
            [l, o, o, x],
            [o, l, o, y],
            [o, o, l, z],
            [o, o, o, l],
        ])
    }

    pub fn rotation_x(angle: T) -> MatrixGen<T> {
        let (o, l) = (T::zero(), T::one());
        let (sin, cos) = angle.sin_cos();
        homogeneous([
            [l, o, o, o],
            [o, cos, -sin, o],
            [o, sin, cos, o],
            [o, o, o, l],
        ])
    }

    pub fn rotation_y(angle: T) -> MatrixGen<T> {
        let (o, l) = (T::zero(), T::one());
        let (sin, cos) = angle.sin_cos();
        homogeneous([
            [cos, o, sin, o],
            [o, l, o, o],
            [-sin, o, cos, o],
            [o, o, o, l],
        ])
    }

    pub fn rotation_z(angle: T) -> MatrixGen<T> {
        let (o, l) = (T::zero(), T::one());
        let (sin, cos) = angle.sin_cos();
        homogeneous([
            [cos, -sin, o, o],
            [sin, cos, o, o],
            [o, o, l, o],
            [o, o, o, l],
        ])
    }

    /// Product `t[0] * t[1] * ... * t[n-1]`: applied to a column vector, the
    /// last transformation acts first.
    pub fn compose(transforms: &[MatrixGen<T>]) -> Result<MatrixGen<T>> {
        let (first, rest) = transforms.split_first().ok_or(EchelonError::EmptyMatrix)?;
        rest.iter().try_fold(first.clone(), |acc, t| &acc * t)
    }

    /// Apply a 4x4 transformation to the point `(x, y, z, 1)`.
    pub fn transform_point(&self, point: [T; 3]) -> Result<[T; 3]> {
        let [x, y, z] = point;
        let column = MatrixGen::from_values(4, 1, &[x, y, z, T::one()])?;
        let moved = (self * &column)?;
        Ok([moved.cells[0], moved.cells[1], moved.cells[2]])
    }

    /// Tab separated, one line per row (`RowMajor`) or per column (`ColumnMajor`).
    pub fn render(&self, layout: Layout) -> String {
        let lines = match layout {
            Layout::RowMajor => self.to_list(),
            Layout::ColumnMajor => self.transpose().to_list(),
        };
        lines
            .iter()
            .map(|line| format!("{}\n", line.iter().join("\t")))
            .collect()
    }
}

fn homogeneous<T: GenElement>(lines: [[T; 4]; 4]) -> MatrixGen<T> {
    MatrixGen {
        rows: 4,
        cols: 4,
        cells: lines.into_iter().flatten().collect(),
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
