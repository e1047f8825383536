//! Per-leg results table.

use serde::Serialize;

use crate::adjust::correction::Correction;
use crate::adjust::decompose::DecomposedLeg;
use crate::azimuth;
use crate::leg::Leg;

/// Leg geometry after its line correction is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjustedLeg {
    pub latitude: f64,
    pub departure: f64,
    pub length: f64,
    pub bearing: f64,
}

impl AdjustedLeg {
    pub fn new(part: &DecomposedLeg, line: &Correction) -> Self {
        let latitude = part.latitude + line.latitude;
        let departure = part.departure + line.departure;
        Self {
            latitude,
            departure,
            length: latitude.hypot(departure),
            bearing: azimuth::bearing_of(latitude, departure),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub line: String,
    pub orig_len: f64,
    pub orig_brg: f64,
    pub lat_corr: f64,
    pub dep_corr: f64,
    pub adj_len: f64,
    pub adj_brg: f64,
}

impl TableRow {
    pub fn new(leg: &Leg, line: &Correction, adjusted: &AdjustedLeg) -> Self {
        Self {
            line: leg.label().to_string(),
            orig_len: leg.length(),
            orig_brg: leg.bearing(),
            lat_corr: line.latitude,
            dep_corr: line.departure,
            adj_len: adjusted.length,
            adj_brg: adjusted.bearing,
        }
    }

    fn values(&self) -> [f64; 6] {
        [
            self.orig_len,
            self.orig_brg,
            self.lat_corr,
            self.dep_corr,
            self.adj_len,
            self.adj_brg,
        ]
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}
