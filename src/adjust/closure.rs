//! Closing error of a traverse.

use super::decompose::DecomposedLeg;
use crate::azimuth;

/// Net misclosure: the vector sum of every leg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorVector {
    pub latitude_sum: f64,
    pub departure_sum: f64,
    pub magnitude: f64,
    /// Direction of the misclosure in [0, 360); 0 for a perfectly closed traverse.
    pub bearing: f64,
}

impl ErrorVector {
    pub fn from_components(parts: &[DecomposedLeg]) -> Self {
        let latitude_sum: f64 = parts.iter().map(|p| p.latitude).sum();
        let departure_sum: f64 = parts.iter().map(|p| p.departure).sum();
        let magnitude = latitude_sum.hypot(departure_sum);

        let bearing = if latitude_sum == 0.0 && departure_sum == 0.0 {
            0.0
        } else {
            azimuth::bearing_of(latitude_sum, departure_sum)
        };

        Self {
            latitude_sum,
            departure_sum,
            magnitude,
            bearing,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.latitude_sum == 0.0 && self.departure_sum == 0.0
    }

    /// Relative precision N of a "1 : N" closure, or `None` when there is no
    /// misclosure to compare against.
    pub fn precision_ratio(&self, perimeter: f64) -> Option<f64> {
        if self.magnitude > 0.0 {
            Some(perimeter / self.magnitude)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn part(latitude: f64, departure: f64) -> DecomposedLeg {
        DecomposedLeg {
            length: latitude.hypot(departure),
            bearing: 0.0,
            latitude,
            departure,
        }
    }

    #[test]
    fn test_exact_zero_has_zero_bearing() {
        let err = ErrorVector::from_components(&[part(3.0, 4.0), part(-3.0, -4.0)]);
        assert_eq!(err.magnitude, 0.0);
        assert_eq!(err.bearing, 0.0);
        assert!(err.is_closed());
        assert_eq!(err.precision_ratio(10.0), None);
    }

    #[test]
    fn test_magnitude_and_bearing() {
        let err = ErrorVector::from_components(&[part(3.0, 4.0), part(-6.0, -8.0)]);
        assert_relative_eq!(err.latitude_sum, -3.0);
        assert_relative_eq!(err.departure_sum, -4.0);
        assert_relative_eq!(err.magnitude, 5.0);
        assert_relative_eq!(err.bearing, 233.130_102_354_155_98, epsilon = 1e-9);
        assert!(!err.is_closed());
        assert_relative_eq!(err.precision_ratio(15.0).unwrap(), 3.0);
    }

    #[test]
    fn test_empty_traverse() {
        let err = ErrorVector::from_components(&[]);
        assert_eq!(err.magnitude, 0.0);
        assert_eq!(err.bearing, 0.0);
    }
}
