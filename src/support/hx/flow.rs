use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};
use uom::{ConstZero, si::f64::Power};

/// Direction and size of the heat a stream exchanges, seen from the stream.
///
/// Chilled water gives up heat in the evaporator, so its flow is
/// [`HeatFlow::Out`]. Condenser water picks up the rejected heat, so its flow
/// is [`HeatFlow::In`]. A stream whose temperature does not change carries
/// [`HeatFlow::None`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeatFlow {
    /// The stream gains heat.
    In(Constrained<Power, StrictlyPositive>),
    /// The stream loses heat.
    Out(Constrained<Power, StrictlyPositive>),
    None,
}

impl HeatFlow {
    /// Heat gained by the stream.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn incoming(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::In(Constrained::new(heat_rate)?))
    }

    /// Heat lost by the stream.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn outgoing(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::Out(Constrained::new(heat_rate)?))
    }

    /// Heat rate with the stream as the sign convention, positive when gained.
    #[must_use]
    pub fn signed(&self) -> Power {
        match self {
            Self::In(heat_rate) => heat_rate.into_inner(),
            Self::Out(heat_rate) => -heat_rate.into_inner(),
            Self::None => Power::ZERO,
        }
    }

    /// Heat rate regardless of direction.
    #[must_use]
    pub fn magnitude(&self) -> Power {
        match self {
            Self::In(heat_rate) | Self::Out(heat_rate) => heat_rate.into_inner(),
            Self::None => Power::ZERO,
        }
    }
}
