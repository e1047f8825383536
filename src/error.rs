use std::fmt;

use thiserror::Error;

/// Failure of a traverse adjustment.
///
/// Every variant aborts the whole computation; no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraverseError {
    #[error("Invalid leg input: {0}")]
    InputParse(#[from] ParseError),

    #[error("Perimeter is zero")]
    ZeroPerimeter,

    #[error("Unexpected computation error: {0}")]
    UnexpectedComputation(String),
}

impl TraverseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputParse(_) => ErrorKind::InputParse,
            Self::ZeroPerimeter => ErrorKind::ZeroPerimeter,
            Self::UnexpectedComputation(_) => ErrorKind::UnexpectedComputation,
        }
    }
}

/// Classification of a [`TraverseError`] for callers mapping failures onto
/// request outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InputParse,
    ZeroPerimeter,
    UnexpectedComputation,
}

impl ErrorKind {
    /// Stable name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputParse => "InputParseError",
            Self::ZeroPerimeter => "ZeroPerimeterError",
            Self::UnexpectedComputation => "UnexpectedComputationError",
        }
    }

    /// True when the failure was caused by the caller's input (a "bad request").
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InputParse | Self::ZeroPerimeter)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field of a raw leg record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegField {
    Length,
    Bearing,
}

impl fmt::Display for LegField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => f.write_str("length"),
            Self::Bearing => f.write_str("bearing"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("leg {index}: missing {field}")]
    MissingField { index: usize, field: LegField },

    #[error("leg {index}: {field} {value} is not a number")]
    NotANumber {
        index: usize,
        field: LegField,
        value: String,
    },

    #[error("leg {index}: {field} must be finite, got {value}")]
    NonFinite {
        index: usize,
        field: LegField,
        value: f64,
    },

    #[error("leg {index}: length must not be negative, got {value}")]
    NegativeLength { index: usize, value: f64 },
}
