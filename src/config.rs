use num_traits::Float;

use crate::error::{EchelonError, Result};

/// Knobs of the elimination engine and the echelon verifier.
///
/// With the default tolerance of zero every "is this entry zero" decision is an
/// exact comparison against `0.0`. Rounding error can then leave a tiny
/// residue that counts as a pivot; a positive tolerance treats every entry with
/// `|v| <= tolerance` as zero instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationConfig<T> {
    pub tolerance: T,
}

impl<T: Float> EliminationConfig<T> {
    pub fn exact() -> Self {
        EliminationConfig {
            tolerance: T::zero(),
        }
    }

    /// The sign is ignored. NaN and infinite tolerances are rejected: with NaN
    /// no entry would ever count as zero.
    pub fn with_tolerance(tolerance: T) -> Result<Self> {
        if !tolerance.is_finite() {
            return Err(EchelonError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }

        Ok(EliminationConfig {
            tolerance: tolerance.abs(),
        })
    }

    #[inline(always)]
    pub fn is_zero(&self, value: T) -> bool {
        if self.tolerance == T::zero() {
            value == T::zero()
        } else {
            value.abs() <= self.tolerance
        }
    }
}

impl<T: Float> Default for EliminationConfig<T> {
    fn default() -> Self {
        Self::exact()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
