//! PyO3 binding for adjust_traverse.

use ndarray::Array1;
use numpy::PyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::adjust::engine;
use crate::error::TraverseError;
use crate::leg::{RawLeg, RawValue};
use crate::options::{AdjustOptions, BearingInput};
use crate::report::AdjustmentReport;

/// Bowditch-adjust a closed traverse.
///
/// Args:
///     legs: Sequence of mappings with "length" and "bearing" keys. Values may be
///         numbers or numeric strings; bearings are degrees clockwise from north.
///     bearings: "as_given" (default) reports bearings as entered, "normalized"
///         folds them into [0, 360).
///
/// Returns:
///     Dict with keys:
///     - error_info: {magnitude, bearing}
///     - plot_data: {unadjusted_x, unadjusted_y, adjusted_x, adjusted_y, lengths} (numpy arrays)
///     - bowditch_data: {perimeter, cumulative_lengths, error_magnitude, precision_ratio}
///     - table_data: list of {line, orig_len, orig_brg, lat_corr, dep_corr, adj_len, adj_brg}
///
/// Raises:
///     ValueError: malformed legs or zero perimeter.
///     RuntimeError: any other failure.
#[pyfunction]
#[pyo3(signature = (legs, bearings="as_given"))]
pub fn adjust_traverse<'py>(
    py: Python<'py>,
    legs: Vec<Bound<'py, PyAny>>,
    bearings: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let bearings = BearingInput::from_name(bearings)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown bearing mode: '{bearings}'")))?;
    let options = AdjustOptions::default().with_bearings(bearings);

    let raw: Vec<RawLeg> = legs
        .iter()
        .map(|item| RawLeg {
            length: field(item, "length"),
            bearing: field(item, "bearing"),
        })
        .collect();

    let report = py
        .allow_threads(move || engine::adjust_traverse(&raw, &options))
        .map_err(to_py_err)?;

    report_dict(py, &report)
}

fn field(item: &Bound<'_, PyAny>, key: &str) -> Option<RawValue> {
    let value = item.get_item(key).ok()?;
    if value.is_none() {
        return None;
    }
    if let Ok(s) = value.extract::<String>() {
        return Some(RawValue::Text(s));
    }
    if let Ok(v) = value.extract::<f64>() {
        return Some(RawValue::Number(v));
    }
    let repr = value
        .repr()
        .map(|r| r.to_string())
        .unwrap_or_else(|_| "<unrepresentable>".to_string());
    Some(RawValue::Other(serde_json::Value::String(repr)))
}

fn to_py_err(e: TraverseError) -> PyErr {
    if e.kind().is_client_error() {
        PyValueError::new_err(e.to_string())
    } else {
        PyRuntimeError::new_err(e.to_string())
    }
}

fn array<'py>(py: Python<'py>, values: &[f64]) -> Bound<'py, PyArray1<f64>> {
    PyArray1::from_owned_array(py, Array1::from(values.to_vec()))
}

fn report_dict<'py>(py: Python<'py>, report: &AdjustmentReport) -> PyResult<Bound<'py, PyDict>> {
    let error_info = PyDict::new(py);
    error_info.set_item("magnitude", report.error_info.magnitude)?;
    error_info.set_item("bearing", report.error_info.bearing)?;

    let plot = &report.plot_data;
    let plot_data = PyDict::new(py);
    plot_data.set_item("unadjusted_x", array(py, &plot.unadjusted_x))?;
    plot_data.set_item("unadjusted_y", array(py, &plot.unadjusted_y))?;
    plot_data.set_item("adjusted_x", array(py, &plot.adjusted_x))?;
    plot_data.set_item("adjusted_y", array(py, &plot.adjusted_y))?;
    plot_data.set_item("lengths", array(py, &plot.lengths))?;

    let summary = &report.bowditch_data;
    let bowditch_data = PyDict::new(py);
    bowditch_data.set_item("perimeter", summary.perimeter)?;
    bowditch_data.set_item("cumulative_lengths", summary.cumulative_lengths.clone())?;
    bowditch_data.set_item("error_magnitude", summary.error_magnitude)?;
    bowditch_data.set_item("precision_ratio", summary.precision_ratio)?;

    let table_data = report
        .table_data
        .iter()
        .map(|row| -> PyResult<Bound<'py, PyDict>> {
            let dict = PyDict::new(py);
            dict.set_item("line", &row.line)?;
            dict.set_item("orig_len", row.orig_len)?;
            dict.set_item("orig_brg", row.orig_brg)?;
            dict.set_item("lat_corr", row.lat_corr)?;
            dict.set_item("dep_corr", row.dep_corr)?;
            dict.set_item("adj_len", row.adj_len)?;
            dict.set_item("adj_brg", row.adj_brg)?;
            Ok(dict)
        })
        .collect::<PyResult<Vec<_>>>()?;

    let result = PyDict::new(py);
    result.set_item("error_info", error_info)?;
    result.set_item("plot_data", plot_data)?;
    result.set_item("bowditch_data", bowditch_data)?;
    result.set_item("table_data", table_data)?;
    Ok(result)
}
