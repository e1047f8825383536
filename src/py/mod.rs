use pyo3::prelude::*;

mod adjust;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(adjust::adjust_traverse, m)?)?;
    Ok(())
}
