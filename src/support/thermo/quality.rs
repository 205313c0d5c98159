use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// Vapor quality of a saturated state.
///
/// Quality is the vapor mass fraction of a two-phase mixture:
/// zero is saturated liquid and one is saturated vapor.
///
/// # Example
///
/// ```
/// use twine_chiller::support::thermo::Quality;
/// use uom::si::ratio::ratio;
///
/// let wet = Quality::new(0.25).unwrap();
/// assert_eq!(wet.get::<ratio>(), 0.25);
///
/// assert_eq!(Quality::saturated_vapor().get::<ratio>(), 1.0);
/// assert!(Quality::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Quality(Constrained<Ratio, UnitInterval>);

impl Quality {
    /// Creates a [`Quality`] from a vapor mass fraction.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Creates a [`Quality`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// Saturated liquid (`x = 0`).
    #[must_use]
    pub fn saturated_liquid() -> Self {
        Self(UnitInterval::zero())
    }

    /// Saturated vapor (`x = 1`).
    #[must_use]
    pub fn saturated_vapor() -> Self {
        Self(UnitInterval::one())
    }
}

impl Deref for Quality {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
