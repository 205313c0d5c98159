//! Results of a chiller solve.

use uom::si::f64::{MassRate, Power, Ratio, ThermodynamicTemperature};

use super::{CycleStates, WaterStream};

/// Refrigerant-side results shared by every solve strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleResults<Fluid> {
    pub states: CycleStates<Fluid>,
    pub refrigerant_mass_rate: MassRate,

    /// Heat absorbed by the refrigerant in the evaporator.
    pub evaporator_heat_rate: Power,

    /// Heat rejected by the refrigerant in the condenser, `m·(h2 − h3)`.
    pub condenser_heat_rate: Power,

    /// Isentropic compressor power, `m·(h2 − h1)`.
    pub compressor_power: Power,
}

impl<Fluid> CycleResults<Fluid> {
    /// Coefficient of performance, `Q_evap / W`.
    #[must_use]
    pub fn cop(&self) -> Ratio {
        self.evaporator_heat_rate / self.compressor_power
    }
}

/// Results of an effectiveness-based solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessResults<Fluid> {
    pub cycle: CycleResults<Fluid>,
    pub chilled_water: WaterStream,
    pub condenser_water: WaterStream,
}

/// Results of a fixed-approach solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedApproachResults<Fluid> {
    pub cycle: CycleResults<Fluid>,

    /// Water leaving the tower toward the condenser.
    pub tower_return_temperature: ThermodynamicTemperature,

    /// Water leaving the condenser toward the tower.
    pub tower_supply_temperature: ThermodynamicTemperature,
}

/// Results of a solve, by strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "strategy", rename_all = "snake_case")
)]
pub enum ChillerResults<Fluid> {
    Effectiveness(EffectivenessResults<Fluid>),
    FixedApproach(FixedApproachResults<Fluid>),
}

impl<Fluid> ChillerResults<Fluid> {
    /// Returns the refrigerant-side results.
    #[must_use]
    pub fn cycle(&self) -> &CycleResults<Fluid> {
        match self {
            Self::Effectiveness(results) => &results.cycle,
            Self::FixedApproach(results) => &results.cycle,
        }
    }
}
