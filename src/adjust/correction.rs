//! Bowditch (compass rule) correction distribution.
//!
//! The total correction is the negated closing error. It is distributed two
//! ways, computed independently of each other:
//!
//! * per leg, in proportion to `length / perimeter` (adjusted leg geometry);
//! * per station, in proportion to `cumulative_length / perimeter`
//!   (adjusted station coordinates).
//!
//! Station correction `i` equals the sum of the first `i` line corrections in
//! exact arithmetic. Keep the two passes separate: the line pass must close
//! the corrected components and the station pass must reach the full
//! correction at the last station.

use tracing::trace;

use super::closure::ErrorVector;
use super::decompose::DecomposedLeg;
use crate::error::TraverseError;

/// A (latitude, departure) correction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Correction {
    pub latitude: f64,
    pub departure: f64,
}

impl Correction {
    fn scaled(&self, fraction: f64) -> Self {
        Self {
            latitude: fraction * self.latitude,
            departure: fraction * self.departure,
        }
    }
}

/// Both distributions of the total correction over a traverse.
#[derive(Clone, Debug, PartialEq)]
pub struct Corrections {
    pub perimeter: f64,
    pub total: Correction,
    /// One per leg.
    pub line: Vec<Correction>,
    /// Cumulative length through each station, `0` first and `perimeter` last.
    pub cumulative_lengths: Vec<f64>,
    /// One per station (legs + 1).
    pub station: Vec<Correction>,
}

pub fn perimeter(parts: &[DecomposedLeg]) -> f64 {
    parts.iter().map(|p| p.length).sum()
}

/// Running leg length through each station.
pub fn cumulative_lengths(parts: &[DecomposedLeg], perimeter: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(parts.len() + 1);
    let mut running = 0.0;
    out.push(running);
    for p in parts {
        running += p.length;
        out.push(running);
    }
    // The last station carries the full correction whatever the summation order.
    if let Some(last) = out.last_mut() {
        *last = perimeter;
    }
    out
}

/// Apply the Bowditch rule.
///
/// Fails with [`TraverseError::ZeroPerimeter`] when the legs have no total
/// length, including the empty traverse.
pub fn distribute(
    parts: &[DecomposedLeg],
    error: &ErrorVector,
) -> Result<Corrections, TraverseError> {
    let perimeter = perimeter(parts);
    if perimeter == 0.0 {
        return Err(TraverseError::ZeroPerimeter);
    }

    let total = Correction {
        latitude: -error.latitude_sum,
        departure: -error.departure_sum,
    };

    let line: Vec<Correction> = parts
        .iter()
        .map(|p| total.scaled(p.length / perimeter))
        .collect();

    let cumulative_lengths = cumulative_lengths(parts, perimeter);
    let station: Vec<Correction> = cumulative_lengths
        .iter()
        .map(|&cum| total.scaled(cum / perimeter))
        .collect();

    for (i, c) in line.iter().enumerate() {
        trace!(leg = i, lat = c.latitude, dep = c.departure, "line correction");
    }

    Ok(Corrections {
        perimeter,
        total,
        line,
        cumulative_lengths,
        station,
    })
}
