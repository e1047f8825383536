//! Station coordinates of the traverse polygon.
//!
//! x accumulates departures and y accumulates latitudes, starting from the
//! origin at station 0.

use super::correction::Correction;
use super::decompose::DecomposedLeg;

/// Station coordinates, `legs + 1` entries in each axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stations {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Stations {
    /// Chain the raw leg components from the origin.
    pub fn unadjusted(parts: &[DecomposedLeg]) -> Self {
        let mut x = Vec::with_capacity(parts.len() + 1);
        let mut y = Vec::with_capacity(parts.len() + 1);
        let (mut cx, mut cy) = (0.0, 0.0);
        x.push(cx);
        y.push(cy);
        for p in parts {
            cx += p.departure;
            cy += p.latitude;
            x.push(cx);
            y.push(cy);
        }
        Self { x, y }
    }

    /// Shift each station by its correction, then pin the first and last
    /// stations to the unadjusted origin so the polygon closes exactly.
    pub fn adjusted(unadjusted: &Stations, station_corrections: &[Correction]) -> Self {
        debug_assert_eq!(unadjusted.len(), station_corrections.len());

        let mut x: Vec<f64> = unadjusted
            .x
            .iter()
            .zip(station_corrections)
            .map(|(&ux, c)| ux + c.departure)
            .collect();
        let mut y: Vec<f64> = unadjusted
            .y
            .iter()
            .zip(station_corrections)
            .map(|(&uy, c)| uy + c.latitude)
            .collect();

        if let (Some(&ox), Some(&oy)) = (unadjusted.x.first(), unadjusted.y.first()) {
            let n = x.len() - 1;
            x[0] = ox;
            y[0] = oy;
            x[n] = ox;
            y[n] = oy;
        }

        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// True when the first and last stations are bit-identical.
    pub fn is_closed(&self) -> bool {
        match (self.x.first(), self.x.last(), self.y.first(), self.y.last()) {
            (Some(x0), Some(xn), Some(y0), Some(yn)) => {
                x0.to_bits() == xn.to_bits() && y0.to_bits() == yn.to_bits()
            }
            _ => false,
        }
    }
}
