//! Ideal gas equation of state helpers.
//!
//! These functions implement the ideal gas equation of state:
//! `p = ρ·R·T`.
//!
//! They are shared by models that treat a vapor phase as an ideal gas
//! (e.g. the superheated region of [`ClausiusClapeyron`](super::ClausiusClapeyron)).

use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::units::SpecificGasConstant;

/// Computes pressure using the ideal gas equation of state.
#[must_use]
pub(crate) fn pressure(
    temperature: ThermodynamicTemperature,
    density: MassDensity,
    gas_constant: SpecificGasConstant,
) -> Pressure {
    density * gas_constant * temperature
}

/// Computes density using the ideal gas equation of state.
#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::kilopascal,
        specific_heat_capacity::joule_per_kilogram_kelvin, thermodynamic_temperature::kelvin,
    };

    fn r134a_gas_constant() -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(81.49)
    }

    #[test]
    fn refrigerant_vapor_density() {
        let t = ThermodynamicTemperature::new::<kelvin>(280.0);
        let p = Pressure::new::<kilopascal>(350.0);

        // 350 kPa / (81.49 J/kg·K · 280 K) ≈ 15.34 kg/m³
        let rho = density(t, p, r134a_gas_constant());
        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            350_000.0 / (81.49 * 280.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn pressure_density_roundtrip() {
        let t = ThermodynamicTemperature::new::<kelvin>(310.0);
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(40.0);
        let r = r134a_gas_constant();

        let p = pressure(t, rho, r);
        let rho_2 = density(t, p, r);

        assert_relative_eq!(
            rho_2.get::<kilogram_per_cubic_meter>(),
            rho.get::<kilogram_per_cubic_meter>()
        );
    }
}
