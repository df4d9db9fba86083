use std::error::Error;
use std::fmt::{Display, Formatter};

/// Everything that can go wrong while turning a 4-digit code into a set of
/// surface coordinates. Each variant carries a short description of the
/// offending input.
#[derive(Debug, Clone, PartialEq)]
pub enum AirfoilError {
    InvalidCode(String),
    InvalidParameter(String),
    InvalidAxis(String),
    DegenerateGeometry(String),
}

impl Display for AirfoilError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AirfoilError::InvalidCode(msg) => write!(f, "invalid NACA code: {}", msg),
            AirfoilError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            AirfoilError::InvalidAxis(msg) => write!(f, "invalid normal axis: {}", msg),
            AirfoilError::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {}", msg),
        }
    }
}

impl Error for AirfoilError {}
