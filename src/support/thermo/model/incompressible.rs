//! Incompressible liquid with constant specific heat and density.
//!
//! This is the water-loop backend for the chiller. Chilled and condenser
//! water only need `cp` and `ρ` at the loop's average temperature, and both
//! are treated as constants. Loop duties come from `ṁ·cp·ΔT`, so the model
//! carries no enthalpy or entropy reference.
//!
//! Pressure has no effect. A state built from `(T, p)` ignores `p`.
//!
//! Use [`super::CoolProp`] (with the `coolprop` feature) when water properties
//! should vary with temperature.

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{HasCp, StateFrom, ThermoModel},
    },
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IncompressibleParametersError {
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid density: {density:?}")]
    Density { density: MassDensity },
}

/// Constants an [`Incompressible`] model is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncompressibleParameters {
    pub cp: SpecificHeatCapacity,
    pub density: MassDensity,
}

impl IncompressibleParameters {
    #[must_use]
    pub fn new(cp: SpecificHeatCapacity, density: MassDensity) -> Self {
        Self { cp, density }
    }
}

/// Fluids with built-in [`Incompressible`] constants.
pub trait IncompressibleFluid {
    fn parameters() -> IncompressibleParameters;
}

/// Constant-property liquid model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incompressible<Fluid> {
    cp: SpecificHeatCapacity,
    density: MassDensity,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Incompressible<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: IncompressibleFluid> Incompressible<Fluid> {
    /// Creates a model from the constants `Fluid` provides.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if `cp` or density is not
    /// strictly positive.
    pub fn new() -> Result<Self, IncompressibleParametersError> {
        Self::from_parameters(Fluid::parameters())
    }
}

impl<Fluid> Incompressible<Fluid> {
    /// Creates a model from explicit constants.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if `cp` or density is not
    /// strictly positive.
    pub fn from_parameters(
        parameters: IncompressibleParameters,
    ) -> Result<Self, IncompressibleParametersError> {
        let IncompressibleParameters { cp, density } = parameters;

        if StrictlyPositive::check(&cp.value).is_err() {
            return Err(IncompressibleParametersError::Cp { cp });
        }
        if StrictlyPositive::check(&density.value).is_err() {
            return Err(IncompressibleParametersError::Density { density });
        }

        Ok(Self {
            cp,
            density,
            _marker: PhantomData,
        })
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }
}

impl<Fluid> HasCp for Incompressible<Fluid> {
    fn cp(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.cp)
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Pressure)> for Incompressible<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, _pressure): (Fluid, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Fluid>, Self::Error> {
        if !(temperature.value.is_finite() && temperature.value > 0.0) {
            return Err(PropertyError::InvalidState {
                context: format!("temperature must be positive, got {temperature:?}"),
            });
        }

        Ok(State::new(temperature, self.density, fluid))
    }
}
