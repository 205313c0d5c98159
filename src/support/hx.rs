//! Heat exchanger analysis toolkit.
//!
//! This module provides general-purpose utilities for closing heat exchanger
//! energy balances between a water stream and a second fluid.
//!
//! This toolkit provides:
//!
//! - **Core types**: [`CapacitanceRate`], [`Effectiveness`], [`HeatFlow`]
//! - **Stream modeling**: [`Stream`]
//! - **Balance closures**: [`balance::fixed_approach`],
//!   [`balance::effectiveness_approach`]
//!
//! # Example
//!
//! ```
//! use twine_chiller::support::constraint::ConstraintResult;
//! use twine_chiller::support::hx::{
//!     CapacitanceRate, Effectiveness, Stream, balance::effectiveness_approach,
//! };
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     thermal_conductance::kilowatt_per_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     // Chilled water cooled from 12 °C to 7 °C.
//!     let chilled_water = Stream::new_from_outlet_temperature(
//!         CapacitanceRate::new::<kilowatt_per_kelvin>(2.0)?,
//!         ThermodynamicTemperature::new::<degree_celsius>(12.0),
//!         ThermodynamicTemperature::new::<degree_celsius>(7.0),
//!     );
//!
//!     // The refrigerant must evaporate below the chilled water supply.
//!     let evaporating = effectiveness_approach(&chilled_water, Effectiveness::new(0.8)?);
//!     assert!((evaporating.get::<degree_celsius>() - 5.75).abs() < 1e-9);
//!
//!     Ok(())
//! }
//! ```

pub mod balance;
mod capacitance_rate;
mod effectiveness;
mod flow;
mod stream;

pub use capacitance_rate::CapacitanceRate;
pub use effectiveness::Effectiveness;
pub use flow::HeatFlow;
pub use stream::Stream;
