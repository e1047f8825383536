//! Traverse adjustment pipeline.
//!
//! raw legs -> validated legs -> components -> closing error and unadjusted
//! stations -> corrections -> adjusted stations -> report.
//! Pure and synchronous; every call works only on its own input.

use tracing::{debug, debug_span};

use super::closure::ErrorVector;
use super::coordinates::Stations;
use super::correction::{self, Corrections};
use super::decompose::{self, DecomposedLeg};
use crate::error::TraverseError;
use crate::leg::{self, Leg, RawLeg};
use crate::options::AdjustOptions;
use crate::report::{self, AdjustmentReport};

/// Numeric outcome of a Bowditch adjustment, before report assembly.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjustment {
    pub legs: Vec<Leg>,
    pub parts: Vec<DecomposedLeg>,
    pub error: ErrorVector,
    pub corrections: Corrections,
    pub unadjusted: Stations,
    pub adjusted: Stations,
}

/// Adjust already-validated legs.
pub fn adjust(legs: Vec<Leg>) -> Result<Adjustment, TraverseError> {
    let parts = decompose::decompose(&legs);
    let error = ErrorVector::from_components(&parts);
    let unadjusted = Stations::unadjusted(&parts);

    let corrections = correction::distribute(&parts, &error)?;
    debug!(
        magnitude = error.magnitude,
        bearing = error.bearing,
        perimeter = corrections.perimeter,
        "closing error"
    );

    let adjusted = Stations::adjusted(&unadjusted, &corrections.station);

    Ok(Adjustment {
        legs,
        parts,
        error,
        corrections,
        unadjusted,
        adjusted,
    })
}

/// Validate raw leg records, adjust them, and assemble the report.
pub fn adjust_traverse(
    raw: &[RawLeg],
    options: &AdjustOptions,
) -> Result<AdjustmentReport, TraverseError> {
    let _span = debug_span!("adjust_traverse", legs = raw.len()).entered();

    let legs = leg::parse_legs(raw, options.bearings)?;
    let adjustment = adjust(legs)?;
    report::assemble(&adjustment)
}
