use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::kilopascal,
    specific_heat_capacity::{joule_per_kilogram_kelvin, kilojoule_per_kilogram_kelvin},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::model::clausius_clapeyron::{
        ClausiusClapeyronFluid, ClausiusClapeyronParameters, ClausiusClapeyronReference,
        SaturationAnchor,
    },
    units::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant},
};

/// Canonical identifier for R-134a (1,1,1,2-tetrafluoroethane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct R134a;

impl R134a {
    /// Molar mass in kg/mol.
    pub const MOLAR_MASS: f64 = 0.102_032;

    /// Compressibility of saturated vapor near chiller conditions.
    ///
    /// Scales the ideal gas constant so the vapor-pressure slope and suction
    /// density land close to real R-134a.
    pub const VAPOR_COMPRESSIBILITY: f64 = 0.8836;
}

impl ClausiusClapeyronFluid for R134a {
    /// Constants anchored at 0 °C, which is also the reference state
    /// (saturated liquid, h = 200 kJ/kg, s = 1 kJ/kg·K).
    ///
    /// The vapor `cp` is an effective value. It sets the latent heat slope
    /// `cp_v − c_l` to the real fluid's −0.89 kJ/kg·K, and keeps saturated
    /// vapor entropy falling with temperature up to about 56 °C.
    fn parameters() -> ClausiusClapeyronParameters {
        ClausiusClapeyronParameters {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
                Self::VAPOR_COMPRESSIBILITY * 8.314_462_618 / Self::MOLAR_MASS,
            ),
            latent_heat: SpecificEnthalpy::new::<kilojoule_per_kilogram>(198.6),
            liquid_cp: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(1.34),
            vapor_cp: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(0.45),
            liquid_density: MassDensity::new::<kilogram_per_cubic_meter>(1295.0),
            anchor: SaturationAnchor {
                temperature: ThermodynamicTemperature::new::<kelvin>(273.15),
                pressure: Pressure::new::<kilopascal>(292.8),
            },
            reference: ClausiusClapeyronReference {
                temperature: ThermodynamicTemperature::new::<kelvin>(273.15),
                enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(200.0),
                entropy: SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(1.0),
            },
        }
    }
}

#[cfg(feature = "coolprop")]
impl crate::support::thermo::model::coolprop::CoolPropFluid for R134a {
    const BACKEND: &'static str = "HEOS";
    const NAME: &'static str = "R134a";
}
