//! Named cycle points and their resolved properties.

use std::fmt;

use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::{
    thermo::{PropertyError, Quality, State},
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::RefrigerantThermoModel;

/// A point in the chiller where a state is resolved.
///
/// Refrigerant points are numbered in flow order starting at the compressor
/// inlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StatePoint {
    /// State 1, saturated vapor leaving the evaporator.
    CompressorInlet,
    /// State 2, after isentropic compression.
    CompressorOutlet,
    /// State 3, saturated liquid leaving the condenser.
    CondenserOutlet,
    /// State 4, after expansion back to evaporator pressure.
    ///
    /// The effectiveness strategy throttles at constant enthalpy. The
    /// fixed-approach strategy expands at constant entropy.
    EvaporatorInlet,
    ChilledWater,
    CondenserWater,
}

impl StatePoint {
    /// Returns the refrigerant state number, or `None` for a water stream.
    #[must_use]
    pub fn index(self) -> Option<u8> {
        match self {
            Self::CompressorInlet => Some(1),
            Self::CompressorOutlet => Some(2),
            Self::CondenserOutlet => Some(3),
            Self::EvaporatorInlet => Some(4),
            Self::ChilledWater | Self::CondenserWater => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::CompressorInlet => "compressor inlet",
            Self::CompressorOutlet => "compressor outlet",
            Self::CondenserOutlet => "condenser outlet",
            Self::EvaporatorInlet => "evaporator inlet",
            Self::ChilledWater => "chilled water",
            Self::CondenserWater => "condenser water",
        }
    }
}

impl fmt::Display for StatePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            Some(index) => write!(f, "state {index} ({})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// A refrigerant state with the properties the cycle uses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedState<Fluid> {
    pub state: State<Fluid>,
    pub pressure: Pressure,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,

    /// Vapor quality, or `None` outside the vapor dome.
    pub quality: Option<Quality>,
}

impl<Fluid> ResolvedState<Fluid> {
    /// Evaluates the cycle properties of `state`.
    ///
    /// # Errors
    ///
    /// Returns the first [`PropertyError`] raised by the model.
    pub fn from_state(
        model: &impl RefrigerantThermoModel<Fluid>,
        state: State<Fluid>,
    ) -> Result<Self, PropertyError> {
        Ok(Self {
            pressure: model.pressure(&state)?,
            enthalpy: model.enthalpy(&state)?,
            entropy: model.entropy(&state)?,
            quality: model.quality(&state)?,
            state,
        })
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.state.temperature
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.state.density
    }
}

/// The four refrigerant states of the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleStates<Fluid> {
    /// State 1.
    pub compressor_inlet: ResolvedState<Fluid>,
    /// State 2.
    pub compressor_outlet: ResolvedState<Fluid>,
    /// State 3.
    pub condenser_outlet: ResolvedState<Fluid>,
    /// State 4.
    pub evaporator_inlet: ResolvedState<Fluid>,
}
