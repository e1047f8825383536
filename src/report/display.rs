//! Fixed-precision string rendering of a report, for presentation layers
//! that show values rather than plot them.

use serde::Serialize;

use super::{AdjustmentReport, PlotData, TableRow};
use crate::options::AdjustOptions;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayErrorInfo {
    pub magnitude: String,
    pub bearing: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub line: String,
    pub orig_len: String,
    pub orig_brg: String,
    pub lat_corr: String,
    pub dep_corr: String,
    pub adj_len: String,
    pub adj_brg: String,
}

/// Report with every table and error value pre-formatted. Plot and summary
/// data stay numeric.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayReport {
    pub error_info: DisplayErrorInfo,
    pub plot_data: PlotData,
    pub bowditch_data: super::BowditchData,
    pub table_data: Vec<DisplayRow>,
}

impl DisplayRow {
    fn new(row: &TableRow, options: &AdjustOptions) -> Self {
        let len = options.length_decimals;
        let brg = options.bearing_decimals;
        Self {
            line: row.line.clone(),
            orig_len: format!("{:.len$}", row.orig_len),
            orig_brg: format!("{:.brg$}", row.orig_brg),
            lat_corr: format!("{:+.len$}", row.lat_corr),
            dep_corr: format!("{:+.len$}", row.dep_corr),
            adj_len: format!("{:.len$}", row.adj_len),
            adj_brg: format!("{:.brg$}", row.adj_brg),
        }
    }
}

impl DisplayReport {
    pub fn new(report: &AdjustmentReport, options: &AdjustOptions) -> Self {
        Self {
            error_info: DisplayErrorInfo {
                magnitude: format!(
                    "{:.prec$}",
                    report.error_info.magnitude,
                    prec = options.length_decimals
                ),
                bearing: format!(
                    "{:.prec$}",
                    report.error_info.bearing,
                    prec = options.error_bearing_decimals
                ),
            },
            plot_data: report.plot_data.clone(),
            bowditch_data: report.bowditch_data.clone(),
            table_data: report
                .table_data
                .iter()
                .map(|row| DisplayRow::new(row, options))
                .collect(),
        }
    }
}

impl AdjustmentReport {
    pub fn display(&self, options: &AdjustOptions) -> DisplayReport {
        DisplayReport::new(self, options)
    }
}
