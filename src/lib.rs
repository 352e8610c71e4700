pub mod matrix {
    pub mod echelon;
    pub mod elimination;
    pub mod matrix;
    pub mod matrix_gen;
    pub mod matrix_real;
    pub mod pivot;
    pub mod row_ops;
    pub mod transform;
}

pub mod config;
pub mod error;
pub mod parse;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn echelon(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
