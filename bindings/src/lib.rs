//! Python bindings for the triangle classifier

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Classify three side lengths, returning "equilateral", "isosceles" or
/// "scalene". Raises ValueError for sides that cannot form a triangle.
#[pyfunction]
fn classify(a: f64, b: f64, c: f64) -> PyResult<&'static str> {
    triangle_core::classify(a, b, c)
        .map(|kind| kind.as_str())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Whether the three sides form a non-degenerate triangle
#[pyfunction]
fn is_valid(a: f64, b: f64, c: f64) -> bool {
    triangle_core::validate(a, b, c).is_ok()
}

#[pymodule]
fn triangle_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid, m)?)?;
    Ok(())
}
