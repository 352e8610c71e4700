use std::iter::zip;

use num_traits::Float;

use crate::error::{EchelonError, Result};

/// Multiply every element of `row` by `scalar`.
///
/// A zero scalar is accepted and wipes the row.
pub fn scale_row<T: Float>(row: &mut [T], scalar: T) {
    row.iter_mut().for_each(|value| *value = *value * scalar);
}

/// `target[c] += scalar * source[c]` for every column `c`.
///
/// Both rows must have the same length, otherwise nothing is touched.
pub fn add_scaled_row<T: Float>(target: &mut [T], source: &[T], scalar: T) -> Result<()> {
    if target.len() != source.len() {
        return Err(EchelonError::InvalidDimensions {
            expected: target.len(),
            found: source.len(),
        });
    }

    zip(target.iter_mut(), source.iter()).for_each(|(t, s)| *t = *t + scalar * *s);
    Ok(())
}

// Dividing instead of multiplying by the reciprocal keeps `row[pivot] == 1`
// exact: x / x is always 1, x * (1 / x) is not (x = 49).
pub(crate) fn normalize_row<T: Float>(row: &mut [T], pivot: T) {
    row.iter_mut().for_each(|value| *value = *value / pivot);
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_row() {
        let mut row = [2.0, 4.0, 6.0];
        scale_row(&mut row, 0.5);
        assert_eq!(row, [1.0, 2.0, 3.0]);

        scale_row(&mut row, 0.0);
        assert!(row.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_add_scaled_row() {
        let mut target = [1.0, 2.0, 3.0];
        add_scaled_row(&mut target, &[1.0, 1.0, 1.0], -1.0).unwrap();
        assert_eq!(target, [0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_add_scaled_row_length_mismatch() {
        let mut target = [1.0, 2.0, 3.0];
        let err = add_scaled_row(&mut target, &[1.0, 1.0], 2.0).unwrap_err();
        assert!(matches!(
            err,
            EchelonError::InvalidDimensions {
                expected: 3,
                found: 2
            }
        ));
        assert_eq!(target, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_normalize_row_is_exact() {
        let mut row = [49.0, 7.0, 98.0];
        normalize_row(&mut row, 49.0);
        assert_eq!(row[0], 1.0);
        assert_eq!(row[2], 2.0);

        let mut row = [3.0f32, 1.0];
        normalize_row(&mut row, 3.0);
        assert_eq!(row[0], 1.0);
    }
}
