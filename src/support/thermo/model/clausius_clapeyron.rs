//! Two-phase model built on the Clausius–Clapeyron relation.
//!
//! `ClausiusClapeyron` is a compact saturation model for refrigerants.
//! It is accurate enough for cycle studies near typical chiller conditions
//! and needs no external property library.
//!
//! # Assumptions
//!
//! - Saturated liquid has constant density `ρ_l` and heat capacity `c_l`
//! - Vapor is an ideal gas (`p = ρ·R·T`) with constant `cp_v`
//! - Latent heat follows Kirchhoff's relation, `dh_fg/dT = cp_v − c_l`,
//!   from its value `h_fg₀` at a known saturation point (`T₀`, `p₀`)
//! - Liquid volume is neglected in the Clapeyron slope
//! - Subcooled liquid and supercritical states are not modeled
//!
//! Writing `h_fg(T) = a + b·T` with `b = cp_v − c_l`, the properties are:
//!
//! ```text
//! ln(p_sat/p₀) = [a·(1/T₀ − 1/T) + b·ln(T/T₀)] / R
//! h_f(T) = h_ref + c_l·(T − T_ref)           s_f(T) = s_ref + c_l·ln(T/T_ref)
//! h(T, x) = h_f(T) + x·h_fg(T)               s(T, x) = s_f(T) + x·h_fg(T)/T
//! h(T, p) = h_f(T) + h_fg(T)                 s(T, p) = s_f(T) + h_fg(T)/T − R·ln(p/p_sat(T))
//! ```
//!
//! The last line is the ideal-gas vapor: its enthalpy depends on temperature
//! alone, and it meets the saturated vapor exactly at `p = p_sat(T)`.
//!
//! Saturated vapor entropy falls with temperature while
//! `cp_v·T < h_fg(T)`, so isentropic compression from saturated vapor ends
//! superheated below that limit.
//!
//! # When To Use
//!
//! Use this model for fast, deterministic cycle calculations and tests.
//! If you need real-fluid accuracy, use [`super::CoolProp`] (when enabled) instead.
//!
//! # Reference State
//!
//! Enthalpy and entropy are reported relative to a saturated-liquid reference
//! state (`T_ref`, `h_ref`, `s_ref`).

mod saturation;

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, Quality, State,
        capability::{HasCp, HasEnthalpy, HasEntropy, HasPressure, HasQuality, StateFrom, ThermoModel},
    },
    units::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant},
};

use super::ideal_gas_eos;

/// Quality slack allowed when classifying a state as saturated.
const QUALITY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClausiusClapeyronParametersError {
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("invalid latent heat: {h_fg:?}")]
    LatentHeat { h_fg: SpecificEnthalpy },
    #[error("invalid specific heat: {cp:?}")]
    SpecificHeat { cp: SpecificHeatCapacity },
    #[error("invalid liquid density: {rho:?}")]
    LiquidDensity { rho: MassDensity },
    #[error("invalid saturation anchor: T={temperature:?}, p={pressure:?}")]
    SaturationAnchor {
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
}

/// A known point on the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationAnchor {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

/// Saturated-liquid reference state for enthalpy and entropy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClausiusClapeyronReference {
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
}

/// Constant parameters for the [`ClausiusClapeyron`] model.
///
/// These values are typically provided by a fluid's [`ClausiusClapeyronFluid`]
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClausiusClapeyronParameters {
    pub gas_constant: SpecificGasConstant,
    /// Latent heat at the anchor temperature.
    pub latent_heat: SpecificEnthalpy,
    pub liquid_cp: SpecificHeatCapacity,
    pub vapor_cp: SpecificHeatCapacity,
    pub liquid_density: MassDensity,
    pub anchor: SaturationAnchor,
    pub reference: ClausiusClapeyronReference,
}

/// Fluid constants required by the [`ClausiusClapeyron`] model.
pub trait ClausiusClapeyronFluid {
    /// Returns the constant parameters for use with [`ClausiusClapeyron`].
    fn parameters() -> ClausiusClapeyronParameters;
}

/// Saturation model with an ideal-gas superheated region.
///
/// All coefficients are stored in SI base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClausiusClapeyron<Fluid> {
    /// Gas constant, J/kg·K.
    r: f64,
    /// Latent heat at `t_0`, J/kg.
    h_fg: f64,
    /// Liquid heat capacity, J/kg·K.
    c_l: f64,
    /// Vapor heat capacity, J/kg·K.
    c_v: f64,
    /// Liquid specific volume, m³/kg.
    v_f: f64,
    /// Saturation anchor temperature, K.
    t_0: f64,
    /// Saturation anchor pressure, Pa.
    p_0: f64,
    /// Reference temperature, K.
    t_ref: f64,
    /// Reference enthalpy, J/kg.
    h_ref: f64,
    /// Reference entropy, J/kg·K.
    s_ref: f64,
    _marker: PhantomData<Fluid>,
}

/// Where a state sits relative to the vapor dome.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Saturated { quality: f64 },
    Superheated { pressure: f64 },
}

impl<Fluid> ThermoModel for ClausiusClapeyron<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid> ClausiusClapeyron<Fluid> {
    /// Creates a model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`ClausiusClapeyronParametersError`] if any constant is invalid.
    pub fn new() -> Result<Self, ClausiusClapeyronParametersError>
    where
        Fluid: ClausiusClapeyronFluid,
    {
        Self::from_parameters(Fluid::parameters())
    }

    /// Creates a model from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClausiusClapeyronParametersError`] if any constant is invalid,
    /// including a latent heat that would vanish between 0 K and the anchor.
    pub fn from_parameters(
        parameters: ClausiusClapeyronParameters,
    ) -> Result<Self, ClausiusClapeyronParametersError> {
        let r = parameters.gas_constant;
        if StrictlyPositive::check(&r.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(ClausiusClapeyronParametersError::GasConstant { r });
        }

        for cp in [parameters.liquid_cp, parameters.vapor_cp] {
            if StrictlyPositive::check(&cp.get::<joule_per_kilogram_kelvin>()).is_err() {
                return Err(ClausiusClapeyronParametersError::SpecificHeat { cp });
            }
        }

        let rho = parameters.liquid_density;
        if StrictlyPositive::check(&rho.get::<kilogram_per_cubic_meter>()).is_err() {
            return Err(ClausiusClapeyronParametersError::LiquidDensity { rho });
        }

        let anchor = parameters.anchor;
        if StrictlyPositive::check(&anchor.temperature.get::<kelvin>()).is_err()
            || StrictlyPositive::check(&anchor.pressure.get::<pascal>()).is_err()
        {
            return Err(ClausiusClapeyronParametersError::SaturationAnchor {
                temperature: anchor.temperature,
                pressure: anchor.pressure,
            });
        }

        // h_fg(T) = a + b·T must stay positive down to 0 K, so a > 0.
        let h_fg = parameters.latent_heat;
        let b = (parameters.vapor_cp - parameters.liquid_cp).get::<joule_per_kilogram_kelvin>();
        let a = h_fg.get::<joule_per_kilogram>() - b * anchor.temperature.get::<kelvin>();
        if StrictlyPositive::check(&h_fg.get::<joule_per_kilogram>()).is_err()
            || StrictlyPositive::check(&a).is_err()
        {
            return Err(ClausiusClapeyronParametersError::LatentHeat { h_fg });
        }

        let t_ref = parameters.reference.temperature;
        if StrictlyPositive::check(&t_ref.get::<kelvin>()).is_err() {
            return Err(ClausiusClapeyronParametersError::ReferenceTemperature { t_ref });
        }

        Ok(Self {
            r: r.get::<joule_per_kilogram_kelvin>(),
            h_fg: h_fg.get::<joule_per_kilogram>(),
            c_l: parameters.liquid_cp.get::<joule_per_kilogram_kelvin>(),
            c_v: parameters.vapor_cp.get::<joule_per_kilogram_kelvin>(),
            v_f: 1.0 / rho.get::<kilogram_per_cubic_meter>(),
            t_0: anchor.temperature.get::<kelvin>(),
            p_0: anchor.pressure.get::<pascal>(),
            t_ref: t_ref.get::<kelvin>(),
            h_ref: parameters.reference.enthalpy.get::<joule_per_kilogram>(),
            s_ref: parameters
                .reference
                .entropy
                .get::<joule_per_kilogram_kelvin>(),
            _marker: PhantomData,
        })
    }

    /// Returns the saturation pressure at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidState`] for a non-positive temperature
    /// and [`PropertyError::OutOfDomain`] where the latent heat has vanished.
    pub fn saturation_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        let t = positive(temperature.get::<kelvin>(), "temperature")?;
        Ok(Pressure::new::<pascal>(self.p_sat(t)?))
    }

    /// Returns the saturation temperature at `pressure`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidState`] for a non-positive pressure and
    /// [`PropertyError::OutOfDomain`] outside the model's saturation range.
    pub fn saturation_temperature(
        &self,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let p = positive(pressure.get::<pascal>(), "pressure")?;
        Ok(ThermodynamicTemperature::new::<kelvin>(self.t_sat(p)?))
    }

    /// Slope of the latent heat, `cp_v − c_l`.
    fn b(&self) -> f64 {
        self.c_v - self.c_l
    }

    /// Latent heat extrapolated to 0 K.
    fn a(&self) -> f64 {
        self.h_fg - self.b() * self.t_0
    }

    /// Temperature at which the latent heat vanishes.
    fn dome_ceiling(&self) -> f64 {
        if self.b() < 0.0 {
            -self.a() / self.b()
        } else {
            f64::INFINITY
        }
    }

    /// Latent heat from Kirchhoff's relation, unchecked.
    fn latent_heat(&self, t: f64) -> f64 {
        self.a() + self.b() * t
    }

    /// Latent heat, rejecting temperatures above the top of the dome.
    fn h_fg(&self, t: f64) -> Result<f64, PropertyError> {
        let h_fg = self.latent_heat(t);
        if h_fg > 0.0 {
            Ok(h_fg)
        } else {
            Err(PropertyError::OutOfDomain {
                context: format!("T = {t} K is above the model's critical limit"),
            })
        }
    }

    fn ln_p_sat(&self, t: f64) -> f64 {
        self.p_0.ln() + (self.a() * (1.0 / self.t_0 - 1.0 / t) + self.b() * (t / self.t_0).ln()) / self.r
    }

    fn p_sat(&self, t: f64) -> Result<f64, PropertyError> {
        self.h_fg(t)?;
        Ok(self.ln_p_sat(t).exp())
    }

    fn t_sat(&self, p: f64) -> Result<f64, PropertyError> {
        saturation::saturation_temperature(self, p)
    }

    fn h_f(&self, t: f64) -> f64 {
        self.h_ref + self.c_l * (t - self.t_ref)
    }

    fn s_f(&self, t: f64) -> f64 {
        self.s_ref + self.c_l * (t / self.t_ref).ln()
    }

    /// Ideal-gas vapor enthalpy, equal to saturated vapor enthalpy at `t`.
    fn vapor_enthalpy(&self, t: f64) -> f64 {
        self.h_f(t) + self.latent_heat(t)
    }

    /// Ideal-gas vapor entropy at `t` and `p`.
    fn vapor_entropy(&self, t: f64, p: f64) -> f64 {
        self.s_f(t) + self.latent_heat(t) / t - self.r * (p.ln() - self.ln_p_sat(t))
    }

    /// Saturated vapor specific volume, m³/kg.
    fn v_g(&self, t: f64) -> Result<f64, PropertyError> {
        let v_g = self.r * t / self.p_sat(t)?;
        if v_g > self.v_f {
            Ok(v_g)
        } else {
            Err(PropertyError::OutOfDomain {
                context: format!("T = {t} K is above the model's critical limit"),
            })
        }
    }

    fn phase(&self, state: &State<Fluid>) -> Result<Phase, PropertyError> {
        let t = positive(state.temperature.get::<kelvin>(), "temperature")?;
        let rho = positive(state.density.get::<kilogram_per_cubic_meter>(), "density")?;

        let v_g = self.v_g(t)?;
        let quality = (1.0 / rho - self.v_f) / (v_g - self.v_f);

        if quality > 1.0 + QUALITY_TOLERANCE {
            let p = ideal_gas_eos::pressure(state.temperature, state.density, self.gas_constant());
            Ok(Phase::Superheated {
                pressure: p.get::<pascal>(),
            })
        } else if quality < -QUALITY_TOLERANCE {
            Err(subcooled(t))
        } else {
            Ok(Phase::Saturated {
                quality: quality.clamp(0.0, 1.0),
            })
        }
    }

    /// Classifies a state of known saturation temperature by a quality-like ratio.
    ///
    /// Returns the quality if saturated, `None` if superheated.
    fn saturated_quality(t: f64, quality: f64) -> Result<Option<f64>, PropertyError> {
        if quality < -QUALITY_TOLERANCE {
            Err(subcooled(t))
        } else if quality <= 1.0 + QUALITY_TOLERANCE {
            Ok(Some(quality.clamp(0.0, 1.0)))
        } else {
            Ok(None)
        }
    }

    fn gas_constant(&self) -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(self.r)
    }

    fn saturated_state(&self, fluid: Fluid, t: f64, quality: f64) -> Result<State<Fluid>, PropertyError> {
        let v = self.v_f + quality * (self.v_g(t)? - self.v_f);
        Ok(State::new(
            ThermodynamicTemperature::new::<kelvin>(t),
            MassDensity::new::<kilogram_per_cubic_meter>(1.0 / v),
            fluid,
        ))
    }

    fn superheated_state(&self, fluid: Fluid, t: f64, p: f64) -> State<Fluid> {
        let temperature = ThermodynamicTemperature::new::<kelvin>(t);
        let density =
            ideal_gas_eos::density(temperature, Pressure::new::<pascal>(p), self.gas_constant());
        State::new(temperature, density, fluid)
    }
}

impl<Fluid> HasPressure for ClausiusClapeyron<Fluid> {
    /// Saturation pressure inside the dome, ideal gas pressure outside it.
    fn pressure(&self, state: &State<Fluid>) -> Result<Pressure, PropertyError> {
        match self.phase(state)? {
            Phase::Saturated { .. } => self.saturation_pressure(state.temperature),
            Phase::Superheated { pressure } => Ok(Pressure::new::<pascal>(pressure)),
        }
    }
}

impl<Fluid> HasEnthalpy for ClausiusClapeyron<Fluid> {
    fn enthalpy(&self, state: &State<Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let h = match self.phase(state)? {
            Phase::Saturated { quality } => self.h_f(t) + quality * self.h_fg(t)?,
            Phase::Superheated { .. } => self.vapor_enthalpy(t),
        };
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }
}

impl<Fluid> HasEntropy for ClausiusClapeyron<Fluid> {
    fn entropy(&self, state: &State<Fluid>) -> Result<SpecificEntropy, PropertyError> {
        let t = state.temperature.get::<kelvin>();
        let s = match self.phase(state)? {
            Phase::Saturated { quality } => self.s_f(t) + quality * self.h_fg(t)? / t,
            Phase::Superheated { pressure } => self.vapor_entropy(t, pressure),
        };
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }
}

impl<Fluid> HasQuality for ClausiusClapeyron<Fluid> {
    fn quality(&self, state: &State<Fluid>) -> Result<Option<Quality>, PropertyError> {
        match self.phase(state)? {
            Phase::Saturated { quality } => Quality::new(quality).map(Some).map_err(|error| {
                PropertyError::Calculation {
                    context: format!("quality {quality}: {error}"),
                }
            }),
            Phase::Superheated { .. } => Ok(None),
        }
    }
}

impl<Fluid> HasCp for ClausiusClapeyron<Fluid> {
    /// Returns the single-phase `cp`, which is undefined inside the dome.
    fn cp(&self, state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        let cp = match self.phase(state)? {
            Phase::Saturated { quality } if quality <= QUALITY_TOLERANCE => self.c_l,
            Phase::Saturated { quality } if quality >= 1.0 - QUALITY_TOLERANCE => self.c_v,
            Phase::Saturated { quality } => {
                return Err(PropertyError::Undefined {
                    context: format!("cp inside the vapor dome (x = {quality})"),
                });
            }
            Phase::Superheated { .. } => self.c_v,
        };
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, Quality)> for ClausiusClapeyron<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, quality): (Fluid, ThermodynamicTemperature, Quality),
    ) -> Result<State<Fluid>, Self::Error> {
        let t = positive(temperature.get::<kelvin>(), "temperature")?;
        self.saturated_state(fluid, t, quality.get::<ratio>())
    }
}

impl<Fluid> StateFrom<(Fluid, Pressure, Quality)> for ClausiusClapeyron<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, quality): (Fluid, Pressure, Quality),
    ) -> Result<State<Fluid>, Self::Error> {
        let p = positive(pressure.get::<pascal>(), "pressure")?;
        let t = self.t_sat(p)?;
        self.saturated_state(fluid, t, quality.get::<ratio>())
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, SpecificEnthalpy)>
    for ClausiusClapeyron<Fluid>
{
    type Error = PropertyError;

    /// Resolves saturated states only.
    ///
    /// Ideal-gas vapor enthalpy depends on temperature alone, so an enthalpy
    /// above saturated vapor fixes no pressure and is reported as
    /// [`PropertyError::Undefined`].
    fn state_from(
        &self,
        (fluid, temperature, enthalpy): (Fluid, ThermodynamicTemperature, SpecificEnthalpy),
    ) -> Result<State<Fluid>, Self::Error> {
        let t = positive(temperature.get::<kelvin>(), "temperature")?;
        let h = enthalpy.get::<joule_per_kilogram>();

        match Self::saturated_quality(t, (h - self.h_f(t)) / self.h_fg(t)?)? {
            Some(quality) => self.saturated_state(fluid, t, quality),
            None => Err(PropertyError::Undefined {
                context: format!(
                    "h = {h} J/kg exceeds saturated vapor at T = {t} K; \
                     ideal-gas vapor pressure is not fixed by (T, h)"
                ),
            }),
        }
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, SpecificEntropy)>
    for ClausiusClapeyron<Fluid>
{
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, entropy): (Fluid, ThermodynamicTemperature, SpecificEntropy),
    ) -> Result<State<Fluid>, Self::Error> {
        let t = positive(temperature.get::<kelvin>(), "temperature")?;
        let s = entropy.get::<joule_per_kilogram_kelvin>();
        let h_fg = self.h_fg(t)?;

        if let Some(quality) = Self::saturated_quality(t, (s - self.s_f(t)) * t / h_fg)? {
            return self.saturated_state(fluid, t, quality);
        }

        // s − s_g(T) = −R·ln(p/p_sat(T)) at fixed T.
        let s_g = self.s_f(t) + h_fg / t;
        let p = (self.ln_p_sat(t) - (s - s_g) / self.r).exp();
        Ok(self.superheated_state(fluid, t, p))
    }
}

impl<Fluid> StateFrom<(Fluid, Pressure, SpecificEntropy)> for ClausiusClapeyron<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (Fluid, Pressure, SpecificEntropy),
    ) -> Result<State<Fluid>, Self::Error> {
        let p = positive(pressure.get::<pascal>(), "pressure")?;
        let s = entropy.get::<joule_per_kilogram_kelvin>();
        let t_sat = self.t_sat(p)?;
        let h_fg = self.h_fg(t_sat)?;

        if let Some(quality) = Self::saturated_quality(t_sat, (s - self.s_f(t_sat)) * t_sat / h_fg)? {
            return self.saturated_state(fluid, t_sat, quality);
        }

        // s − s_g(T_sat) = cp_v·ln(T/T_sat) at fixed p.
        let s_g = self.s_f(t_sat) + h_fg / t_sat;
        let t = t_sat * ((s - s_g) / self.c_v).exp();
        Ok(self.superheated_state(fluid, t, p))
    }
}

fn positive(value: f64, name: &str) -> Result<f64, PropertyError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PropertyError::InvalidState {
            context: format!("{name} must be positive and finite, got {value}"),
        })
    }
}

fn subcooled(t: f64) -> PropertyError {
    PropertyError::OutOfDomain {
        context: format!("subcooled liquid at T = {t} K is not modeled"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, pressure::kilopascal,
        specific_heat_capacity::kilojoule_per_kilogram_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::fluid::R134a;

    fn model() -> ClausiusClapeyron<R134a> {
        ClausiusClapeyron::<R134a>::new().expect("R134a parameters must be physically valid")
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn saturated_vapor_entropy(
        thermo: &ClausiusClapeyron<R134a>,
        t: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let vapor = thermo.state_from((t, Quality::saturated_vapor()))?;
        thermo.entropy(&vapor)
    }

    #[test]
    fn anchor_is_on_the_saturation_curve() -> Result<(), PropertyError> {
        let thermo = model();
        let parameters = R134a::parameters();

        let p = thermo.saturation_pressure(parameters.anchor.temperature)?;
        assert_relative_eq!(
            p.get::<pascal>(),
            parameters.anchor.pressure.get::<pascal>(),
            max_relative = 1e-12
        );

        let t = thermo.saturation_temperature(parameters.anchor.pressure)?;
        assert_relative_eq!(
            t.get::<kelvin>(),
            parameters.anchor.temperature.get::<kelvin>(),
            max_relative = 1e-10
        );
        Ok(())
    }

    #[test]
    fn saturation_pressure_rises_with_temperature() -> Result<(), PropertyError> {
        let thermo = model();
        let cold = thermo.saturation_pressure(celsius(0.0))?;
        let warm = thermo.saturation_pressure(celsius(35.0))?;

        assert!(warm > cold);
        // Roughly 290 kPa at 0 °C and 850–890 kPa at 35 °C for R-134a.
        assert!((250.0..350.0).contains(&cold.get::<kilopascal>()));
        assert!((750.0..950.0).contains(&warm.get::<kilopascal>()));
        Ok(())
    }

    #[test]
    fn vapor_pressure_slope_follows_clapeyron() -> Result<(), PropertyError> {
        let thermo = model();
        let t = 290.0;
        let dt = 1e-3;

        let ln_p = |t: f64| -> Result<f64, PropertyError> {
            Ok(thermo
                .saturation_pressure(ThermodynamicTemperature::new::<kelvin>(t))?
                .get::<pascal>()
                .ln())
        };
        let slope = (ln_p(t + dt)? - ln_p(t - dt)?) / (2.0 * dt);

        let temperature = ThermodynamicTemperature::new::<kelvin>(t);
        let liquid = thermo.state_from((temperature, Quality::saturated_liquid()))?;
        let vapor = thermo.state_from((temperature, Quality::saturated_vapor()))?;
        let h_fg = (thermo.enthalpy(&vapor)? - thermo.enthalpy(&liquid)?).get::<joule_per_kilogram>();
        let r = R134a::parameters().gas_constant.get::<joule_per_kilogram_kelvin>();

        // d(ln p)/dT = h_fg / (R·T²)
        assert_relative_eq!(slope, h_fg / (r * t * t), max_relative = 1e-6);
        Ok(())
    }

    #[test]
    fn reference_state_is_saturated_liquid() -> Result<(), PropertyError> {
        let thermo = model();
        let state = thermo.state_from((celsius(0.0), Quality::saturated_liquid()))?;

        assert_relative_eq!(
            thermo.enthalpy(&state)?.get::<kilojoule_per_kilogram>(),
            200.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            thermo.entropy(&state)?.get::<kilojoule_per_kilogram_kelvin>(),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            1295.0,
            max_relative = 1e-12
        );
        let quality = thermo.quality(&state)?.expect("saturated liquid has a quality");
        assert_relative_eq!(quality.get::<ratio>(), 0.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn latent_heat_falls_with_temperature() -> Result<(), PropertyError> {
        let thermo = model();

        let latent = |t: ThermodynamicTemperature| -> Result<SpecificEnthalpy, PropertyError> {
            let liquid = thermo.state_from((t, Quality::saturated_liquid()))?;
            let vapor = thermo.state_from((t, Quality::saturated_vapor()))?;
            Ok(thermo.enthalpy(&vapor)? - thermo.enthalpy(&liquid)?)
        };

        // h_fg(T) = 198.6 + (0.45 − 1.34)·(T − 0 °C) kJ/kg
        let at_10 = latent(celsius(10.0))?;
        let at_30 = latent(celsius(30.0))?;
        assert_relative_eq!(at_10.get::<kilojoule_per_kilogram>(), 189.7, epsilon = 1e-6);
        assert_relative_eq!(at_30.get::<kilojoule_per_kilogram>(), 171.9, epsilon = 1e-6);

        let t = celsius(10.0);
        let liquid = thermo.state_from((t, Quality::saturated_liquid()))?;
        let vapor = thermo.state_from((t, Quality::saturated_vapor()))?;
        let s_fg = thermo.entropy(&vapor)? - thermo.entropy(&liquid)?;
        assert_relative_eq!(
            s_fg.get::<joule_per_kilogram_kelvin>(),
            at_10.get::<joule_per_kilogram>() / t.get::<kelvin>(),
            max_relative = 1e-9
        );

        let quality = thermo.quality(&vapor)?.expect("saturated vapor has a quality");
        assert_relative_eq!(quality.get::<ratio>(), 1.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn saturated_vapor_entropy_falls_across_chiller_range() -> Result<(), PropertyError> {
        let thermo = model();

        let entropies = [-10.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0]
            .into_iter()
            .map(|t| saturated_vapor_entropy(&thermo, celsius(t)))
            .collect::<Result<Vec<_>, _>>()?;

        assert!(entropies.windows(2).all(|pair| pair[1] < pair[0]));
        Ok(())
    }

    #[test]
    fn two_phase_mixture_from_temperature_and_enthalpy() -> Result<(), PropertyError> {
        let thermo = model();
        let t = celsius(5.0);

        let liquid_35 = thermo.state_from((celsius(35.0), Quality::saturated_liquid()))?;
        let h = thermo.enthalpy(&liquid_35)?;

        let throttled = thermo.state_from((t, h))?;
        let quality = thermo.quality(&throttled)?.expect("throttled state is two-phase");

        // x = c_l·ΔT / h_fg(5 °C) = 1340 · 30 / 194150
        assert_relative_eq!(
            quality.get::<ratio>(),
            1340.0 * 30.0 / 194_150.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(thermo.enthalpy(&throttled)?.value, h.value, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn isentropic_compression_from_saturated_vapor_ends_superheated() -> Result<(), PropertyError> {
        let thermo = model();

        let suction = thermo.state_from((celsius(5.0), Quality::saturated_vapor()))?;
        let p_cond = thermo.saturation_pressure(celsius(35.0))?;

        let discharge = thermo.state_from((p_cond, thermo.entropy(&suction)?))?;

        assert_eq!(thermo.quality(&discharge)?, None);
        assert!(discharge.temperature > celsius(35.0));
        assert!(thermo.enthalpy(&discharge)? > thermo.enthalpy(&suction)?);
        assert_relative_eq!(
            thermo.pressure(&discharge)?.get::<pascal>(),
            p_cond.get::<pascal>(),
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn superheated_pressure_entropy_roundtrip() -> Result<(), PropertyError> {
        let thermo = model();
        let p = Pressure::new::<kilopascal>(800.0);

        let saturated = thermo.state_from((p, Quality::saturated_vapor()))?;
        let s = thermo.entropy(&saturated)?
            + SpecificEntropy::new::<joule_per_kilogram_kelvin>(50.0);

        let superheated = thermo.state_from((p, s))?;
        assert!(superheated.temperature > saturated.temperature);
        assert_eq!(thermo.quality(&superheated)?, None);
        assert_relative_eq!(
            thermo.pressure(&superheated)?.get::<kilopascal>(),
            800.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(thermo.entropy(&superheated)?.value, s.value, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn superheated_temperature_entropy_roundtrip() -> Result<(), PropertyError> {
        let thermo = model();
        let p = Pressure::new::<kilopascal>(700.0);

        let saturated = thermo.state_from((p, Quality::saturated_vapor()))?;
        let s = thermo.entropy(&saturated)?
            + SpecificEntropy::new::<joule_per_kilogram_kelvin>(80.0);
        let target = thermo.state_from((p, s))?;

        let recovered = thermo.state_from((target.temperature, s))?;
        assert_relative_eq!(
            thermo.pressure(&recovered)?.get::<kilopascal>(),
            700.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            recovered.density.value,
            target.density.value,
            max_relative = 1e-9
        );
        Ok(())
    }

    #[test]
    fn superheated_enthalpy_depends_on_temperature_alone() -> Result<(), PropertyError> {
        let thermo = model();
        let t = celsius(45.0);

        let s_g = saturated_vapor_entropy(&thermo, t)?;
        let dense = thermo.state_from((t, s_g + SpecificEntropy::new::<joule_per_kilogram_kelvin>(20.0)))?;
        let sparse = thermo.state_from((t, s_g + SpecificEntropy::new::<joule_per_kilogram_kelvin>(60.0)))?;

        assert!(thermo.pressure(&sparse)? < thermo.pressure(&dense)?);
        assert_relative_eq!(
            thermo.enthalpy(&sparse)?.value,
            thermo.enthalpy(&dense)?.value,
            max_relative = 1e-12
        );
        assert_relative_eq!(thermo.cp(&dense)?.value, 450.0);

        // Any enthalpy above saturated vapor leaves the pressure unfixed.
        let h = thermo.enthalpy(&dense)? + SpecificEnthalpy::new::<kilojoule_per_kilogram>(5.0);
        assert!(matches!(
            thermo.state_from((t, h)),
            Err(PropertyError::Undefined { .. })
        ));
        Ok(())
    }

    #[test]
    fn subcooled_liquid_is_out_of_domain() {
        let thermo = model();
        let t = celsius(20.0);
        let h_f = SpecificEnthalpy::new::<kilojoule_per_kilogram>(200.0 + 1.34 * 20.0);
        let colder = h_f - SpecificEnthalpy::new::<kilojoule_per_kilogram>(5.0);

        assert!(matches!(
            thermo.state_from((t, colder)),
            Err(PropertyError::OutOfDomain { .. })
        ));

        let compressed = State::new(
            t,
            MassDensity::new::<kilogram_per_cubic_meter>(1400.0),
            R134a,
        );
        assert!(matches!(
            thermo.pressure(&compressed),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn cp_is_undefined_inside_the_dome() -> Result<(), PropertyError> {
        let thermo = model();
        let mixture = thermo.state_from((celsius(0.0), Quality::new(0.5).unwrap()))?;

        assert!(matches!(
            thermo.cp(&mixture),
            Err(PropertyError::Undefined { .. })
        ));

        let liquid = thermo.state_from((celsius(0.0), Quality::saturated_liquid()))?;
        assert_relative_eq!(thermo.cp(&liquid)?.value, 1340.0);
        Ok(())
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let thermo = model();

        assert!(matches!(
            thermo.state_from((
                ThermodynamicTemperature::new::<kelvin>(-1.0),
                Quality::saturated_vapor()
            )),
            Err(PropertyError::InvalidState { .. })
        ));
        assert!(matches!(
            thermo.state_from((Pressure::new::<pascal>(0.0), Quality::saturated_vapor())),
            Err(PropertyError::InvalidState { .. })
        ));
        assert!(matches!(
            thermo.state_from((Pressure::new::<kilopascal>(1.0e6), Quality::saturated_vapor())),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            thermo.saturation_pressure(ThermodynamicTemperature::new::<kelvin>(600.0)),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn rejects_latent_heat_that_vanishes_below_the_anchor() {
        let mut parameters = R134a::parameters();
        parameters.vapor_cp = SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(3.0);

        assert!(matches!(
            ClausiusClapeyron::<R134a>::from_parameters(parameters),
            Err(ClausiusClapeyronParametersError::LatentHeat { .. })
        ));
    }

    proptest! {
        #[test]
        fn chiller_compression_leaves_the_dome(
            evaporating in -10.0..15.0_f64,
            lift in 15.0..40.0_f64,
        ) {
            let thermo = model();
            let condensing = celsius(evaporating + lift);

            let s_1 = saturated_vapor_entropy(&thermo, celsius(evaporating)).unwrap();
            let p_2 = thermo.saturation_pressure(condensing).unwrap();
            let discharge = thermo.state_from((p_2, s_1)).unwrap();

            prop_assert_eq!(thermo.quality(&discharge).unwrap(), None);
            prop_assert!(discharge.temperature > condensing);
            prop_assert!(
                (thermo.entropy(&discharge).unwrap().value - s_1.value).abs() < 1e-9 * s_1.value
            );
        }
    }
}
