//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, power).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_chiller::support::units::TemperatureDifference;
//!
//! let t1 = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let t2 = ThermodynamicTemperature::new::<kelvin>(250.0);
//! let delta_t = t1.minus(t2);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.
//!
//! ## Customary units
//!
//! Chiller ratings are usually given in tons of refrigeration and water flows
//! in gallons per minute. [`tons_of_refrigeration`] and [`gallons_per_minute`]
//! convert those into SI quantities using fixed literal factors:
//!
//! ```
//! use twine_chiller::support::units::{gallons_per_minute, tons_of_refrigeration};
//! use uom::si::{power::kilowatt, volume_rate::cubic_meter_per_second};
//!
//! let capacity = tons_of_refrigeration(2.0);
//! assert!((capacity.get::<kilowatt>() - 7.033_705_684_2).abs() < 1e-12);
//!
//! let flow = gallons_per_minute(1.0);
//! assert!((flow.get::<cubic_meter_per_second>() - 6.309e-5).abs() < 1e-18);
//! ```

mod conversions;
mod quantities;
mod temperature_difference;

pub use conversions::{
    CUBIC_METERS_PER_SECOND_PER_GPM, KILOWATTS_PER_TON, gallons_per_minute, tons_of_refrigeration,
};
pub use quantities::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant};
pub use temperature_difference::TemperatureDifference;
