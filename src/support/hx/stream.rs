use std::cmp::Ordering;

use crate::support::units::TemperatureDifference;
use uom::si::f64::ThermodynamicTemperature;

use super::{CapacitanceRate, HeatFlow};

/// A water stream through one side of a heat exchanger, fully resolved.
///
/// The specific heat behind `capacitance_rate` is held constant from inlet to
/// outlet, so `Q = C·(T_out − T_in)` links the fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stream {
    pub capacitance_rate: CapacitanceRate,
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    pub heat_flow: HeatFlow,
}

impl Stream {
    /// Resolves the outlet temperature from a known duty.
    #[must_use]
    pub fn new_from_heat_flow(
        capacitance_rate: CapacitanceRate,
        inlet_temperature: ThermodynamicTemperature,
        heat_flow: HeatFlow,
    ) -> Self {
        Self {
            capacitance_rate,
            inlet_temperature,
            outlet_temperature: inlet_temperature + heat_flow.signed() / *capacitance_rate,
            heat_flow,
        }
    }

    /// Resolves the duty from known inlet and outlet temperatures.
    ///
    /// A warmer outlet gives [`HeatFlow::In`], a cooler one [`HeatFlow::Out`],
    /// and equal temperatures [`HeatFlow::None`].
    ///
    /// # Panics
    ///
    /// Panics if either temperature is `NaN`.
    #[must_use]
    pub fn new_from_outlet_temperature(
        capacitance_rate: CapacitanceRate,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
    ) -> Self {
        let heat_rate = *capacitance_rate * outlet_temperature.minus(inlet_temperature).abs();

        let heat_flow = match inlet_temperature
            .partial_cmp(&outlet_temperature)
            .expect("stream temperatures must be comparable")
        {
            Ordering::Less => HeatFlow::incoming(heat_rate),
            Ordering::Greater => HeatFlow::outgoing(heat_rate),
            Ordering::Equal => Ok(HeatFlow::None),
        }
        .expect("a positive capacitance rate across distinct temperatures gives a positive duty");

        Self {
            capacitance_rate,
            inlet_temperature,
            outlet_temperature,
            heat_flow,
        }
    }
}
