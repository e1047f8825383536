//! Leg decomposition into latitude (north) and departure (east) components.

use crate::azimuth;
use crate::leg::Leg;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecomposedLeg {
    pub length: f64,
    pub bearing: f64,
    pub latitude: f64,
    pub departure: f64,
}

impl DecomposedLeg {
    pub fn from_leg(leg: &Leg) -> Self {
        let (latitude, departure) = azimuth::components(leg.length(), leg.bearing());
        Self {
            length: leg.length(),
            bearing: leg.bearing(),
            latitude,
            departure,
        }
    }
}

pub fn decompose(legs: &[Leg]) -> Vec<DecomposedLeg> {
    legs.iter().map(DecomposedLeg::from_leg).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leg::{parse_legs, RawLeg};
    use crate::options::BearingInput;
    use approx::assert_relative_eq;

    #[test]
    fn test_signs_follow_quadrant() {
        let raw = vec![
            RawLeg::new(10.0, 30.0),
            RawLeg::new(10.0, 150.0),
            RawLeg::new(10.0, 210.0),
            RawLeg::new(10.0, 330.0),
        ];
        let legs = parse_legs(&raw, BearingInput::AsGiven).unwrap();
        let parts = decompose(&legs);

        let signs: Vec<(bool, bool)> = parts
            .iter()
            .map(|p| (p.latitude > 0.0, p.departure > 0.0))
            .collect();
        assert_eq!(
            signs,
            vec![(true, true), (false, true), (false, false), (true, false)]
        );

        for p in &parts {
            assert_relative_eq!(p.latitude.hypot(p.departure), p.length, epsilon = 1e-12);
        }
        assert_relative_eq!(parts[0].departure, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_keeps_original_values() {
        let legs = parse_legs(&[RawLeg::new(7.5, 400.0)], BearingInput::AsGiven).unwrap();
        let part = decompose(&legs)[0];
        assert_eq!(part.length, 7.5);
        assert_eq!(part.bearing, 400.0);
    }
}
