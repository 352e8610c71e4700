use crate::config::EliminationConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::{MatrixReal, RealElement};

/// Both echelon verdicts for one matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub row_echelon: bool,
    pub reduced_row_echelon: bool,
}

pub fn verdict<T: RealElement>(matrix: &MatrixReal<T>, config: &EliminationConfig<T>) -> Verdict {
    Verdict {
        row_echelon: is_row_echelon(matrix, config),
        reduced_row_echelon: is_reduced_row_echelon(matrix, config),
    }
}

/// Column of the first non-zero entry of `row`, scanning left to right.
pub fn leading_column<T: RealElement>(row: &[T], config: &EliminationConfig<T>) -> Option<usize> {
    row.iter().position(|x| !config.is_zero(*x))
}

/// Staircase check: each row's leading entry lies strictly right of the one
/// above it, and all-zero rows only appear at the bottom.
pub fn is_row_echelon<T: RealElement>(
    matrix: &MatrixReal<T>,
    config: &EliminationConfig<T>,
) -> bool {
    let mut last_pivot_col = None;
    let mut seen_zero_row = false;

    for line in matrix.iter_rows() {
        match leading_column(line, config) {
            Some(pivot_col) => {
                if seen_zero_row {
                    return false;
                }
                if let Some(last) = last_pivot_col {
                    if pivot_col <= last {
                        return false;
                    }
                }
                last_pivot_col = Some(pivot_col);
            }
            // No pivot means every entry is zero, including the last column,
            // so the row cannot encode an inconsistent equation.
            None => seen_zero_row = true,
        }
    }

    true
}

/// Row echelon form where every pivot is 1 and is the only non-zero entry of
/// its column.
pub fn is_reduced_row_echelon<T: RealElement>(
    matrix: &MatrixReal<T>,
    config: &EliminationConfig<T>,
) -> bool {
    if !is_row_echelon(matrix, config) {
        return false;
    }

    for (i, line) in matrix.iter_rows().enumerate() {
        let Some(pivot_col) = leading_column(line, config) else {
            continue;
        };

        if !config.is_zero(line[pivot_col] - T::one()) {
            return false;
        }

        for r in 0..matrix.rows() {
            if r != i && !config.is_zero(matrix.at(r, pivot_col)) {
                return false;
            }
        }
    }

    true
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn m(lines: Vec<Vec<f64>>) -> MatrixReal<f64> {
        MatrixReal::from_list(lines).unwrap()
    }

    #[test]
    fn test_leading_column() {
        let config = EliminationConfig::default();
        assert_eq!(leading_column(&[0.0, -0.0, 4.0, 1.0], &config), Some(2));
        assert_eq!(leading_column(&[0.0, 0.0], &config), None);
        let loose = EliminationConfig::with_tolerance(1e-10).unwrap();
        assert_eq!(leading_column(&[1e-14, 2.0], &loose), Some(1));
    }

    #[test]
    fn test_row_echelon() {
        let config = EliminationConfig::default();

        assert!(is_row_echelon(&m(vec![vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 0.0]]), &config));
        assert!(is_row_echelon(&m(vec![vec![2.0, 1.0, 3.0], vec![0.0, 0.0, 5.0]]), &config));
        assert!(is_row_echelon(&m(vec![vec![0.0, 0.0], vec![0.0, 0.0]]), &config));

        assert!(!is_row_echelon(&m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]), &config));
        assert!(!is_row_echelon(&m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]), &config));
        assert!(!is_row_echelon(
            &m(vec![vec![0.0, 0.0, 0.0], vec![0.0, 1.0, 2.0]]),
            &config
        ));
    }

    #[test]
    fn test_reduced_row_echelon() {
        let config = EliminationConfig::default();

        assert!(is_reduced_row_echelon(
            &m(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 3.0]]),
            &config
        ));
        assert!(is_reduced_row_echelon(
            &m(vec![vec![1.0, 2.0, 0.0], vec![0.0, 0.0, 1.0], vec![0.0, 0.0, 0.0]]),
            &config
        ));

        // echelon, but column 1 is not clean
        assert!(!is_reduced_row_echelon(
            &m(vec![vec![1.0, 2.0], vec![0.0, 1.0]]),
            &config
        ));
        // echelon, but the pivot is not 1
        assert!(!is_reduced_row_echelon(
            &m(vec![vec![2.0, 0.0], vec![0.0, 1.0]]),
            &config
        ));
        assert!(!is_reduced_row_echelon(
            &m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]),
            &config
        ));
    }

    #[test]
    fn test_verdict() {
        let config = EliminationConfig::default();
        assert_eq!(
            verdict(&m(vec![vec![1.0, 2.0], vec![0.0, 3.0]]), &config),
            Verdict {
                row_echelon: true,
                reduced_row_echelon: false
            }
        );
    }

    #[test]
    fn test_zero_row_above_a_pivot_and_non_unit_pivot_are_rejected() {
        let config = EliminationConfig::default();

        // a staircase that only tracks leading columns would accept both
        let zero_row_first = m(vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(
            verdict(&zero_row_first, &config),
            Verdict {
                row_echelon: false,
                reduced_row_echelon: false
            }
        );

        let pivot_two = m(vec![vec![2.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(
            verdict(&pivot_two, &config),
            Verdict {
                row_echelon: true,
                reduced_row_echelon: false
            }
        );
    }

    #[test]
    fn test_rounding_residue() {
        let a = m(vec![vec![1.0, 1e-15], vec![1e-17, 1.0]]);

        assert!(!is_row_echelon(&a, &EliminationConfig::default()));

        let loose = EliminationConfig::with_tolerance(1e-12).unwrap();
        assert!(is_row_echelon(&a, &loose));
        assert!(is_reduced_row_echelon(&a, &loose));
    }
}
