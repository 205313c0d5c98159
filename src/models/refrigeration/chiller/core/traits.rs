//! Thermo model bounds required by the chiller solver.

use uom::si::f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::thermo::{
    PropertyError, StateFromQuery,
    capability::{HasCp, HasEnthalpy, HasEntropy, HasPressure, HasQuality, StateFrom, ThermoModel},
};

/// Required thermo model bounds for the refrigerant.
///
/// States are resolved through [`StateQuery`](crate::support::thermo::StateQuery),
/// then evaluated for pressure, enthalpy, entropy and quality.
pub trait RefrigerantThermoModel<Fluid>:
    StateFromQuery<Fluid> + HasPressure + HasEnthalpy + HasEntropy + HasQuality
{
}

impl<Fluid, T> RefrigerantThermoModel<Fluid> for T where
    T: StateFromQuery<Fluid> + HasPressure + HasEnthalpy + HasEntropy + HasQuality
{
}

/// Required thermo model bounds for chilled and condenser water.
pub trait WaterThermoModel<Fluid>:
    ThermoModel<Fluid = Fluid>
    + HasCp
    + StateFrom<(Fluid, ThermodynamicTemperature, Pressure), Error = PropertyError>
{
    /// Returns `cp` of `fluid` at the given temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state or `cp` cannot be evaluated.
    fn specific_heat_at(
        &self,
        fluid: Fluid,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        let state = self.state_from((fluid, temperature, pressure))?;
        self.cp(&state)
    }

    /// Returns the density of `fluid` at the given temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state cannot be evaluated.
    fn density_at(
        &self,
        fluid: Fluid,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MassDensity, PropertyError> {
        Ok(self.state_from((fluid, temperature, pressure))?.density)
    }
}

impl<Fluid, T> WaterThermoModel<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + HasCp
        + StateFrom<(Fluid, ThermodynamicTemperature, Pressure), Error = PropertyError>
{
}
