use thiserror::Error;

use crate::support::{constraint::ConstraintError, thermo::PropertyError};

use super::StatePoint;

/// A design that cannot be solved, detected before any refrigerant state is
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A design parameter is out of range.
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A water stream has no usable capacitance rate.
    ///
    /// This is reported when the water model returns a non-positive or
    /// non-finite specific heat or density for an otherwise valid design.
    #[error("invalid capacitance rate for {stream}: {source}")]
    CapacitanceRate {
        stream: StatePoint,
        #[source]
        source: ConstraintError,
    },
}

/// Errors that abort a chiller solve.
///
/// No partial results are produced when a solve fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChillerError {
    /// The design parameters are invalid.
    #[error("invalid configuration")]
    Configuration(#[from] ConfigurationError),

    /// A property query failed while resolving the named point.
    #[error("failed to resolve {point}")]
    PropertyResolution {
        point: StatePoint,
        #[source]
        source: PropertyError,
    },
}

impl ChillerError {
    /// Returns the point at which property resolution failed, if any.
    #[must_use]
    pub fn point(&self) -> Option<StatePoint> {
        match self {
            Self::Configuration(_) => None,
            Self::PropertyResolution { point, .. } => Some(*point),
        }
    }
}
