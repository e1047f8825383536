//! Result assembly: the per-leg table plus the summary and plot payloads.

pub mod display;
pub mod table;

use serde::Serialize;

use crate::adjust::engine::Adjustment;
use crate::error::TraverseError;

pub use display::DisplayReport;
pub use table::{AdjustedLeg, TableRow};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub magnitude: f64,
    pub bearing: f64,
}

/// Polygon coordinates for plotting, `legs + 1` per axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotData {
    pub unadjusted_x: Vec<f64>,
    pub unadjusted_y: Vec<f64>,
    pub adjusted_x: Vec<f64>,
    pub adjusted_y: Vec<f64>,
    pub lengths: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BowditchData {
    pub perimeter: f64,
    pub cumulative_lengths: Vec<f64>,
    pub error_magnitude: f64,
    /// N of a "1 : N" closure; absent for a perfectly closed traverse.
    pub precision_ratio: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdjustmentReport {
    pub error_info: ErrorInfo,
    pub plot_data: PlotData,
    pub bowditch_data: BowditchData,
    pub table_data: Vec<TableRow>,
}

impl AdjustmentReport {
    pub fn to_json(&self) -> Result<String, TraverseError> {
        serde_json::to_string(self).map_err(|e| TraverseError::UnexpectedComputation(e.to_string()))
    }

    fn non_finite_field(&self) -> Option<&'static str> {
        let all_finite = |v: &[f64]| v.iter().all(|x| x.is_finite());

        if !self.error_info.magnitude.is_finite() || !self.error_info.bearing.is_finite() {
            return Some("error_info");
        }
        if !self.bowditch_data.perimeter.is_finite()
            || !all_finite(&self.bowditch_data.cumulative_lengths)
        {
            return Some("bowditch_data");
        }
        let plot = &self.plot_data;
        if !all_finite(&plot.unadjusted_x)
            || !all_finite(&plot.unadjusted_y)
            || !all_finite(&plot.adjusted_x)
            || !all_finite(&plot.adjusted_y)
        {
            return Some("plot_data");
        }
        if !self.table_data.iter().all(TableRow::is_finite) {
            return Some("table_data");
        }
        None
    }
}

/// Build the report for a finished adjustment.
///
/// Fails with [`TraverseError::UnexpectedComputation`] if any reported value
/// is not finite, e.g. after floating-point overflow.
pub fn assemble(adj: &Adjustment) -> Result<AdjustmentReport, TraverseError> {
    let table_data: Vec<TableRow> = adj
        .legs
        .iter()
        .zip(&adj.parts)
        .zip(&adj.corrections.line)
        .map(|((leg, part), line)| TableRow::new(leg, line, &AdjustedLeg::new(part, line)))
        .collect();

    let report = AdjustmentReport {
        error_info: ErrorInfo {
            magnitude: adj.error.magnitude,
            bearing: adj.error.bearing,
        },
        plot_data: PlotData {
            unadjusted_x: adj.unadjusted.x.clone(),
            unadjusted_y: adj.unadjusted.y.clone(),
            adjusted_x: adj.adjusted.x.clone(),
            adjusted_y: adj.adjusted.y.clone(),
            lengths: adj.legs.iter().map(|l| l.length()).collect(),
        },
        bowditch_data: BowditchData {
            perimeter: adj.corrections.perimeter,
            cumulative_lengths: adj.corrections.cumulative_lengths.clone(),
            error_magnitude: adj.error.magnitude,
            precision_ratio: adj.error.precision_ratio(adj.corrections.perimeter),
        },
        table_data,
    };

    if let Some(field) = report.non_finite_field() {
        return Err(TraverseError::UnexpectedComputation(format!(
            "non-finite value in {field}"
        )));
    }

    Ok(report)
}
