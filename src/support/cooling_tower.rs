//! Empirical cooling tower performance.
//!
//! [`CoolingTower::return_temperature`] estimates the temperature of water
//! leaving a cooling tower (returning to the condenser) from the ambient
//! wet-bulb temperature and the temperature reduction the tower achieves.
//!
//! The estimate is a six-term quadratic surface fit:
//!
//! ```text
//! T = a + b·Twb + c·Tr + d·Twb² + e·Tr² + f·Tr·Twb
//! ```
//!
//! The coefficients were regressed with temperatures in degrees Fahrenheit, so
//! inputs are converted to °F before the polynomial is evaluated and the result
//! is converted back to a [`ThermodynamicTemperature`].
//!
//! The fit carries no explicit validity bounds. Extrapolating far outside
//! typical tower conditions (wet bulb of roughly 40–85 °F, reduction of a few
//! to about 25 °F) produces a number, not an error.
//!
//! # Example
//!
//! ```
//! use twine_chiller::support::cooling_tower::CoolingTower;
//! use uom::si::{
//!     f64::{TemperatureInterval, ThermodynamicTemperature},
//!     temperature_interval::degree_fahrenheit as delta_fahrenheit,
//!     thermodynamic_temperature::degree_fahrenheit,
//! };
//!
//! let wet_bulb = ThermodynamicTemperature::new::<degree_fahrenheit>(70.0);
//! let reduction = TemperatureInterval::new::<delta_fahrenheit>(10.0);
//!
//! let tower_return = CoolingTower::return_temperature(wet_bulb, reduction);
//! assert!((tower_return.get::<degree_fahrenheit>() - 79.372_08).abs() < 1e-6);
//! ```

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
    thermodynamic_temperature::degree_fahrenheit,
};

/// Cooling tower return temperature correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoolingTower;

impl CoolingTower {
    pub const A: f64 = 16.790_751;
    pub const B: f64 = 0.646_430_8;
    pub const C: f64 = 2.222_176_3;
    pub const D: f64 = 0.001_606_1;
    pub const E: f64 = -0.015_926_8;
    pub const F: f64 = -0.015_954;

    /// Returns the water temperature leaving the tower.
    ///
    /// `reduction` is the temperature drop across the tower (range), which is
    /// also the rise the water sees across the condenser.
    #[must_use]
    pub fn return_temperature(
        wet_bulb: ThermodynamicTemperature,
        reduction: TemperatureInterval,
    ) -> ThermodynamicTemperature {
        let twb = wet_bulb.get::<degree_fahrenheit>();
        let tr = reduction.get::<delta_fahrenheit>();

        let t = Self::A
            + Self::B * twb
            + Self::C * tr
            + Self::D * twb * twb
            + Self::E * tr * tr
            + Self::F * tr * twb;

        ThermodynamicTemperature::new::<degree_fahrenheit>(t)
    }
}
