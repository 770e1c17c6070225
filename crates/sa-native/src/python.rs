//! PyO3 bindings for the `sa_native` extension module
//!
//! Only marshalling lives here: lists of floats in, lists of floats out, and
//! [`crate::ForecastError`] raised as `ValueError`. Importing the module has
//! no side effects; tracing output is enabled by calling `init_tracing()`.

use pyo3::prelude::*;

/// Repeat the last observation `horizon` times.
///
/// ```python
/// import sa_native
/// sa_native.predict_static([1.0, 2.0, 3.0], 3)  # [3.0, 3.0, 3.0]
/// ```
#[pyfunction(name = "predict_static")]
fn predict_static_py(data: Vec<f64>, horizon: i64) -> PyResult<Vec<f64>> {
    Ok(crate::predict_static(&data, horizon)?)
}

/// Return the observations unchanged.
///
/// ```python
/// import sa_native
/// sa_native.predict([1.0, 2.0, 3.0])  # [1.0, 2.0, 3.0]
/// ```
#[pyfunction(name = "predict")]
fn predict_py(data: Vec<f64>) -> PyResult<Vec<f64>> {
    Ok(crate::predict(&data)?)
}

/// Send forecast events as JSON lines to stderr. Returns False if the
/// process already has a tracing subscriber.
#[pyfunction(name = "init_tracing")]
fn init_tracing_py() -> bool {
    crate::observability::init_tracing()
}

#[pymodule]
fn sa_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(predict_static_py, m)?)?;
    m.add_function(wrap_pyfunction!(predict_py, m)?)?;
    m.add_function(wrap_pyfunction!(init_tracing_py, m)?)?;
    Ok(())
}
