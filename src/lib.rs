//! Bowditch (compass rule) adjustment of closed survey traverses.
//!
//! Legs go in as length + bearing records; the closing error is distributed
//! in proportion to leg length and the adjusted legs and closed station
//! polygon come out.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod adjust;
pub mod azimuth;
pub mod error;
pub mod leg;
pub mod options;
pub mod report;
#[cfg(feature = "python")]
mod py;

pub use adjust::engine::{adjust, adjust_traverse, Adjustment};
pub use error::{ErrorKind, ParseError, TraverseError};
pub use leg::{Leg, RawLeg, RawValue};
pub use options::{AdjustOptions, BearingInput};
pub use report::{AdjustmentReport, DisplayReport};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
