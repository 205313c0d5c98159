use tracing::debug;
use uom::si::{
    f64::{
        MassDensity, MassRate, Power, Pressure, SpecificHeatCapacity, TemperatureInterval,
        ThermodynamicTemperature, VolumeRate,
    },
    mass_rate::kilogram_per_second,
    power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    hx::{CapacitanceRate, Stream},
    thermo::PropertyError,
};

use super::{ChillerError, ConfigurationError, StatePoint, WaterThermoModel};

/// A resolved water loop through the evaporator or condenser.
///
/// Water properties are evaluated once, at the average of the stream's inlet
/// and outlet temperatures, and held constant through the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterStream {
    pub stream: Stream,
    pub average_temperature: ThermodynamicTemperature,
    pub specific_heat: SpecificHeatCapacity,
    pub density: MassDensity,
    pub mass_rate: MassRate,
}

impl WaterStream {
    /// Water-side heat rate, always non-negative.
    #[must_use]
    pub fn heat_rate(&self) -> Power {
        self.stream.heat_flow.magnitude()
    }

    /// Resolves chilled water cooled from `supply + drop` to `supply`.
    ///
    /// The mass flow is whatever carries `capacity` across the drop.
    pub(super) fn chilled<Fluid: Default>(
        water: &impl WaterThermoModel<Fluid>,
        supply: ThermodynamicTemperature,
        drop: TemperatureInterval,
        capacity: Power,
        pressure: Pressure,
    ) -> Result<Self, ChillerError> {
        let point = StatePoint::ChilledWater;
        let inlet = supply + drop;
        let average_temperature = supply + drop * 0.5;

        let (specific_heat, density) = properties(water, average_temperature, pressure)
            .map_err(|source| ChillerError::PropertyResolution { point, source })?;

        let mass_rate: MassRate = capacity / (specific_heat * drop);
        let capacitance_rate =
            CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat)
                .map_err(|source| ConfigurationError::CapacitanceRate {
                    stream: point,
                    source,
                })?;

        let resolved = Self {
            stream: Stream::new_from_outlet_temperature(capacitance_rate, inlet, supply),
            average_temperature,
            specific_heat,
            density,
            mass_rate,
        };
        resolved.log(point);
        Ok(resolved)
    }

    /// Resolves condenser water heated from the tower return temperature by
    /// the tower range.
    ///
    /// The mass flow follows from the volumetric flow at the average density.
    pub(super) fn condenser<Fluid: Default>(
        water: &impl WaterThermoModel<Fluid>,
        tower_return: ThermodynamicTemperature,
        range: TemperatureInterval,
        flow_rate: VolumeRate,
        pressure: Pressure,
    ) -> Result<Self, ChillerError> {
        let point = StatePoint::CondenserWater;
        let outlet = tower_return + range;
        let average_temperature = tower_return + range * 0.5;

        let (specific_heat, density) = properties(water, average_temperature, pressure)
            .map_err(|source| ChillerError::PropertyResolution { point, source })?;

        let mass_rate: MassRate = flow_rate * density;
        let capacitance_rate =
            CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat)
                .map_err(|source| ConfigurationError::CapacitanceRate {
                    stream: point,
                    source,
                })?;

        let resolved = Self {
            stream: Stream::new_from_outlet_temperature(capacitance_rate, tower_return, outlet),
            average_temperature,
            specific_heat,
            density,
            mass_rate,
        };
        resolved.log(point);
        Ok(resolved)
    }

    fn log(&self, point: StatePoint) {
        debug!(
            %point,
            inlet_k = self.stream.inlet_temperature.get::<kelvin>(),
            outlet_k = self.stream.outlet_temperature.get::<kelvin>(),
            mass_rate_kg_s = self.mass_rate.get::<kilogram_per_second>(),
            heat_rate_w = self.heat_rate().get::<watt>(),
            "resolved water stream"
        );
    }
}

fn properties<Fluid: Default>(
    water: &impl WaterThermoModel<Fluid>,
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
) -> Result<(SpecificHeatCapacity, MassDensity), PropertyError> {
    let specific_heat = water.specific_heat_at(Fluid::default(), temperature, pressure)?;
    let density = water.density_at(Fluid::default(), temperature, pressure)?;
    Ok((specific_heat, density))
}
