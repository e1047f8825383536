//! Leg records: loosely-typed input and the validated [`Leg`] value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::azimuth;
use crate::error::{LegField, ParseError};
use crate::options::BearingInput;

/// A leg field as it arrives from a caller: a number, a numeric string, or
/// something else entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawValue {
    fn to_f64(&self, index: usize, field: LegField) -> Result<f64, ParseError> {
        let value = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| ParseError::NotANumber {
                index,
                field,
                value: format!("{s:?}"),
            })?,
            Self::Other(v) => {
                return Err(ParseError::NotANumber {
                    index,
                    field,
                    value: v.to_string(),
                })
            }
        };
        if !value.is_finite() {
            return Err(ParseError::NonFinite {
                index,
                field,
                value,
            });
        }
        Ok(value)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// An unvalidated leg record. Missing fields deserialize as `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLeg {
    pub length: Option<RawValue>,
    pub bearing: Option<RawValue>,
}

impl RawLeg {
    pub fn new(length: impl Into<RawValue>, bearing: impl Into<RawValue>) -> Self {
        Self {
            length: Some(length.into()),
            bearing: Some(bearing.into()),
        }
    }
}

/// A validated traverse leg. Bearing is a clockwise-from-north azimuth in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    label: String,
    length: f64,
    bearing: f64,
}

impl Leg {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}°", self.label, self.length, self.bearing)
    }
}

/// Spreadsheet-style station name: 0 -> "A", 25 -> "Z", 26 -> "AA", 27 -> "AB".
pub fn station_name(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}

/// Label of the leg running from station `index` to station `index + 1`.
pub fn leg_label(index: usize) -> String {
    format!("{}-{}", station_name(index), station_name(index + 1))
}

/// Validate raw records into legs, preserving order.
///
/// Lengths may be zero (the perimeter check happens later) but not negative.
/// Non-finite values are rejected before they can reach the trigonometry.
pub fn parse_legs(raw: &[RawLeg], bearings: BearingInput) -> Result<Vec<Leg>, ParseError> {
    raw.iter()
        .enumerate()
        .map(|(index, rec)| parse_leg(index, rec, bearings))
        .collect()
}

fn parse_leg(index: usize, rec: &RawLeg, bearings: BearingInput) -> Result<Leg, ParseError> {
    let length = field(index, rec.length.as_ref(), LegField::Length)?;
    let bearing = field(index, rec.bearing.as_ref(), LegField::Bearing)?;

    if length < 0.0 {
        return Err(ParseError::NegativeLength {
            index,
            value: length,
        });
    }

    let bearing = match bearings {
        BearingInput::AsGiven => bearing,
        BearingInput::Normalized => azimuth::normalize_degrees(bearing),
    };

    Ok(Leg {
        label: leg_label(index),
        length,
        bearing,
    })
}

fn field(index: usize, value: Option<&RawValue>, field: LegField) -> Result<f64, ParseError> {
    value
        .ok_or(ParseError::MissingField { index, field })?
        .to_f64(index, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_labels() {
        assert_eq!(leg_label(0), "A-B");
        assert_eq!(leg_label(3), "D-E");
        assert_eq!(leg_label(24), "Y-Z");
        assert_eq!(leg_label(25), "Z-AA");
        assert_eq!(leg_label(26), "AA-AB");
        assert_eq!(station_name(51), "AZ");
        assert_eq!(station_name(52), "BA");
        assert_eq!(station_name(701), "ZZ");
        assert_eq!(station_name(702), "AAA");
    }

    #[test]
    fn test_parse_numbers_and_strings() {
        let raw = vec![RawLeg::new(100.0, 45.0), RawLeg::new(" 12.5 ", "-30")];
        let legs = parse_legs(&raw, BearingInput::AsGiven).unwrap();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].label(), "A-B");
        assert_relative_eq!(legs[1].length(), 12.5);
        assert_relative_eq!(legs[1].bearing(), -30.0);
    }

    #[test]
    fn test_normalized_bearings() {
        let raw = vec![RawLeg::new(10.0, -30.0), RawLeg::new(10.0, 725.0)];
        let legs = parse_legs(&raw, BearingInput::Normalized).unwrap();
        assert_relative_eq!(legs[0].bearing(), 330.0);
        assert_relative_eq!(legs[1].bearing(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_not_a_number() {
        let raw = vec![RawLeg::new(10.0, 0.0), RawLeg::new("ten", 0.0)];
        let err = parse_legs(&raw, BearingInput::AsGiven).unwrap_err();
        assert_eq!(
            err,
            ParseError::NotANumber {
                index: 1,
                field: LegField::Length,
                value: "\"ten\"".into(),
            }
        );
    }

    #[test]
    fn test_missing_and_other_values() {
        let raw = vec![RawLeg {
            length: Some(10.0.into()),
            bearing: None,
        }];
        assert!(matches!(
            parse_legs(&raw, BearingInput::AsGiven),
            Err(ParseError::MissingField {
                index: 0,
                field: LegField::Bearing
            })
        ));

        let raw = vec![RawLeg {
            length: Some(RawValue::Other(serde_json::Value::Bool(true))),
            bearing: Some(0.0.into()),
        }];
        assert!(matches!(
            parse_legs(&raw, BearingInput::AsGiven),
            Err(ParseError::NotANumber { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_and_negative() {
        let raw = vec![RawLeg::new("nan", 0.0)];
        assert!(matches!(
            parse_legs(&raw, BearingInput::AsGiven),
            Err(ParseError::NonFinite { .. })
        ));

        let raw = vec![RawLeg::new(10.0, f64::INFINITY)];
        assert!(matches!(
            parse_legs(&raw, BearingInput::AsGiven),
            Err(ParseError::NonFinite {
                field: LegField::Bearing,
                ..
            })
        ));

        let raw = vec![RawLeg::new(-5.0, 0.0)];
        assert!(matches!(
            parse_legs(&raw, BearingInput::AsGiven),
            Err(ParseError::NegativeLength { index: 0, .. })
        ));
    }

    #[test]
    fn test_zero_length_accepted() {
        let raw = vec![RawLeg::new(0.0, 0.0)];
        let legs = parse_legs(&raw, BearingInput::AsGiven).unwrap();
        assert_eq!(legs[0].length(), 0.0);
    }

    #[test]
    fn test_deserialize_json_records() {
        let raw: Vec<RawLeg> = serde_json::from_str(
            r#"[{"length": 100, "bearing": "90.5"}, {"length": "x"}, {"length": null, "bearing": [1]}]"#,
        )
        .unwrap();
        assert_eq!(raw[0], RawLeg::new(100.0, "90.5"));
        assert_eq!(raw[1].bearing, None);
        assert_eq!(raw[2].length, None);
        assert!(matches!(raw[2].bearing, Some(RawValue::Other(_))));
    }
}
