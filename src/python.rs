use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::config::EliminationConfig;
use crate::error::EchelonError;
use crate::matrix::echelon::{is_reduced_row_echelon, is_row_echelon};
use crate::matrix::elimination::{to_reduced_echelon, to_row_echelon};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;

impl From<EchelonError> for PyErr {
    fn from(error: EchelonError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

#[pyclass(name = "Matrix")]
#[derive(Debug, Clone)]
pub struct PyMatrix {
    inner: MatrixReal<f64>,
    config: EliminationConfig<f64>,
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    #[pyo3(signature = (lines, tolerance = 0.0))]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>, tolerance: f64) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: MatrixReal::from_list(lines)?,
            config: EliminationConfig::with_tolerance(tolerance)?,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn scale_row(&mut self, row: usize, scalar: f64) -> PyResult<()> {
        Ok(self.inner.scale_row(row, scalar)?)
    }

    pub fn add_scaled_row(&mut self, target: usize, source: usize, scalar: f64) -> PyResult<()> {
        Ok(self.inner.add_scaled_row(target, source, scalar)?)
    }

    /// Returns the pivot columns.
    pub fn to_row_echelon(&mut self) -> PyResult<Vec<usize>> {
        Ok(to_row_echelon(&mut self.inner, &self.config)?.pivot_columns())
    }

    /// Returns the pivot columns.
    pub fn to_reduced_echelon(&mut self) -> PyResult<Vec<usize>> {
        Ok(to_reduced_echelon(&mut self.inner, &self.config)?.pivot_columns())
    }

    pub fn is_row_echelon(&self) -> bool {
        is_row_echelon(&self.inner, &self.config)
    }

    pub fn is_reduced_row_echelon(&self) -> bool {
        is_reduced_row_echelon(&self.inner, &self.config)
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}
