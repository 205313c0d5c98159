//! Design parameters for a single chiller solve.

use uom::si::{
    f64::{Power, Pressure, TemperatureInterval, ThermodynamicTemperature, VolumeRate},
    pressure::atmosphere,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
    thermodynamic_temperature::degree_fahrenheit,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
    hx::Effectiveness,
    units::{gallons_per_minute, tons_of_refrigeration},
};

use super::ConfigurationError;

/// Design inputs for the effectiveness-based cycle.
///
/// The evaporator and condenser saturation temperatures follow from water-side
/// energy balances and exchanger effectiveness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EffectivenessDesign {
    /// Ambient wet-bulb temperature at the cooling tower.
    pub wet_bulb_temperature: ThermodynamicTemperature,

    /// Chilled water temperature leaving the evaporator.
    pub supply_temperature: ThermodynamicTemperature,

    /// Temperature range across the cooling tower.
    ///
    /// Condenser water rises by the same amount across the condenser.
    pub condenser_temperature_reduction: TemperatureInterval,

    /// Chilled water temperature drop across the evaporator.
    pub chilled_water_temperature_drop: TemperatureInterval,

    /// Evaporator duty.
    pub cooling_capacity: Power,

    /// Volumetric condenser water flow through the cooling tower.
    pub cooling_tower_flow_rate: VolumeRate,

    pub evaporator_effectiveness: Effectiveness,
    pub condenser_effectiveness: Effectiveness,

    /// Pressure at which water properties are evaluated.
    pub water_pressure: Pressure,
}

impl Default for EffectivenessDesign {
    /// A one-ton chiller at 70 °F wet bulb supplying 40 °F water.
    fn default() -> Self {
        let effectiveness = Effectiveness::new(0.8).expect("0.8 is a valid effectiveness");

        Self {
            wet_bulb_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(70.0),
            supply_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(40.0),
            condenser_temperature_reduction: TemperatureInterval::new::<delta_fahrenheit>(10.0),
            chilled_water_temperature_drop: TemperatureInterval::new::<delta_fahrenheit>(10.0),
            cooling_capacity: tons_of_refrigeration(1.0),
            cooling_tower_flow_rate: gallons_per_minute(3.0),
            evaporator_effectiveness: effectiveness,
            condenser_effectiveness: effectiveness,
            water_pressure: Pressure::new::<atmosphere>(1.0),
        }
    }
}

impl EffectivenessDesign {
    /// Returns a copy with both exchanger effectiveness values replaced.
    #[must_use]
    pub fn with_effectiveness(self, evaporator: Effectiveness, condenser: Effectiveness) -> Self {
        Self {
            evaporator_effectiveness: evaporator,
            condenser_effectiveness: condenser,
            ..self
        }
    }

    /// Checks the design before any property is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidParameter`] naming the first
    /// parameter that is out of range.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check::<StrictlyPositive>("wet_bulb_temperature", self.wet_bulb_temperature.value)?;
        check::<StrictlyPositive>("supply_temperature", self.supply_temperature.value)?;
        check::<NonNegative>(
            "condenser_temperature_reduction",
            self.condenser_temperature_reduction.value,
        )?;
        check::<StrictlyPositive>(
            "chilled_water_temperature_drop",
            self.chilled_water_temperature_drop.value,
        )?;
        check::<StrictlyPositive>("cooling_capacity", self.cooling_capacity.value)?;
        check::<StrictlyPositive>("cooling_tower_flow_rate", self.cooling_tower_flow_rate.value)?;
        check::<StrictlyPositive>("water_pressure", self.water_pressure.value)?;
        Ok(())
    }
}

/// Design inputs for the fixed-approach cycle.
///
/// Saturation temperatures sit a fixed difference away from the chilled water
/// supply and the cooling tower water, and the refrigerant flow is given.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FixedApproachDesign {
    /// Ambient wet-bulb temperature at the cooling tower.
    pub wet_bulb_temperature: ThermodynamicTemperature,

    /// Chilled water temperature leaving the evaporator.
    pub supply_temperature: ThermodynamicTemperature,

    /// Temperature range across the cooling tower.
    pub condenser_temperature_reduction: TemperatureInterval,

    /// Evaporating temperature below the chilled water supply.
    pub evaporator_approach: TemperatureInterval,

    /// Condensing temperature above the tower return water.
    pub condenser_approach: TemperatureInterval,

    /// Volumetric refrigerant flow at the compressor inlet.
    ///
    /// This is the compressor's suction displacement. The mass flow is this
    /// times the density of the saturated vapor entering the compressor.
    pub refrigerant_flow_rate: VolumeRate,
}

impl Default for FixedApproachDesign {
    /// The same tower conditions as [`EffectivenessDesign::default`], with a
    /// suction displacement of 1.5 L/s, roughly one ton of cooling.
    fn default() -> Self {
        Self {
            wet_bulb_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(70.0),
            supply_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(40.0),
            condenser_temperature_reduction: TemperatureInterval::new::<delta_fahrenheit>(10.0),
            evaporator_approach: TemperatureInterval::new::<delta_fahrenheit>(10.0),
            condenser_approach: TemperatureInterval::new::<delta_fahrenheit>(10.0),
            refrigerant_flow_rate: VolumeRate::new::<cubic_meter_per_second>(1.5e-3),
        }
    }
}

impl FixedApproachDesign {
    /// Checks the design before any property is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidParameter`] naming the first
    /// parameter that is out of range.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check::<StrictlyPositive>("wet_bulb_temperature", self.wet_bulb_temperature.value)?;
        check::<StrictlyPositive>("supply_temperature", self.supply_temperature.value)?;
        check::<NonNegative>(
            "condenser_temperature_reduction",
            self.condenser_temperature_reduction.value,
        )?;
        check::<NonNegative>("evaporator_approach", self.evaporator_approach.value)?;
        check::<NonNegative>("condenser_approach", self.condenser_approach.value)?;
        check::<StrictlyPositive>("refrigerant_flow_rate", self.refrigerant_flow_rate.value)?;
        Ok(())
    }
}

/// Selects the solve strategy and carries its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "strategy", rename_all = "snake_case")
)]
pub enum DesignParameters {
    Effectiveness(EffectivenessDesign),
    FixedApproach(FixedApproachDesign),
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self::Effectiveness(EffectivenessDesign::default())
    }
}

impl DesignParameters {
    /// Checks the selected design.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if any parameter is out of range.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self {
            Self::Effectiveness(design) => design.validate(),
            Self::FixedApproach(design) => design.validate(),
        }
    }

    /// Short name of the strategy, as used in logs and serialized designs.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Effectiveness(_) => "effectiveness",
            Self::FixedApproach(_) => "fixed_approach",
        }
    }
}

impl From<EffectivenessDesign> for DesignParameters {
    fn from(design: EffectivenessDesign) -> Self {
        Self::Effectiveness(design)
    }
}

impl From<FixedApproachDesign> for DesignParameters {
    fn from(design: FixedApproachDesign) -> Self {
        Self::FixedApproach(design)
    }
}

/// Checks an SI base value against `C`, naming the parameter on failure.
fn check<C: Constraint<f64>>(parameter: &'static str, value: f64) -> Result<(), ConfigurationError> {
    C::check(&value).map_err(|source: ConstraintError| ConfigurationError::InvalidParameter {
        parameter,
        source,
    })
}
