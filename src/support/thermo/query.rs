use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::units::{SpecificEnthalpy, SpecificEntropy};

use super::{
    PropertyError, Quality, State,
    capability::{StateFrom, ThermoModel},
};

/// Models that can resolve every property pair a [`StateQuery`] accepts.
///
/// This is a bundled bound with a blanket implementation, so any model
/// implementing the listed [`StateFrom`] inputs gets it for free.
pub trait StateFromQuery<Fluid>:
    ThermoModel<Fluid = Fluid>
    + StateFrom<(Fluid, ThermodynamicTemperature, Quality), Error = PropertyError>
    + StateFrom<(Fluid, Pressure, Quality), Error = PropertyError>
    + StateFrom<(Fluid, ThermodynamicTemperature, SpecificEntropy), Error = PropertyError>
    + StateFrom<(Fluid, ThermodynamicTemperature, SpecificEnthalpy), Error = PropertyError>
    + StateFrom<(Fluid, Pressure, SpecificEntropy), Error = PropertyError>
{
}

impl<Fluid, T> StateFromQuery<Fluid> for T where
    T: ThermoModel<Fluid = Fluid>
        + StateFrom<(Fluid, ThermodynamicTemperature, Quality), Error = PropertyError>
        + StateFrom<(Fluid, Pressure, Quality), Error = PropertyError>
        + StateFrom<(Fluid, ThermodynamicTemperature, SpecificEntropy), Error = PropertyError>
        + StateFrom<(Fluid, ThermodynamicTemperature, SpecificEnthalpy), Error = PropertyError>
        + StateFrom<(Fluid, Pressure, SpecificEntropy), Error = PropertyError>
{
}

/// A partial set of intensive properties describing a state to resolve.
///
/// [`StateFrom`] fixes the input combination at compile time. `StateQuery` is
/// the runtime counterpart: set exactly two properties, then
/// [`resolve`](Self::resolve) dispatches to the matching `StateFrom` input.
///
/// A quality together with either temperature or pressure places the state
/// on the saturation boundary.
///
/// # Example
///
/// ```
/// use twine_chiller::support::thermo::{
///     PropertyError, Quality, StateQuery,
///     fluid::R134a,
///     model::ClausiusClapeyron,
/// };
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
///
/// let model = ClausiusClapeyron::<R134a>::new().unwrap();
///
/// let state = StateQuery::new()
///     .with_temperature(ThermodynamicTemperature::new::<degree_celsius>(5.0))
///     .with_quality(Quality::saturated_vapor())
///     .resolve(&model, R134a)
///     .unwrap();
/// assert!(state.density.value > 0.0);
///
/// let missing = StateQuery::new()
///     .with_quality(Quality::saturated_vapor())
///     .resolve(&model, R134a);
/// assert_eq!(missing, Err(PropertyError::Underdetermined { given: 1 }));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateQuery {
    pub temperature: Option<ThermodynamicTemperature>,
    pub pressure: Option<Pressure>,
    pub enthalpy: Option<SpecificEnthalpy>,
    pub entropy: Option<SpecificEntropy>,
    pub quality: Option<Quality>,
}

impl StateQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature: Some(temperature),
            ..self
        }
    }

    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self {
            pressure: Some(pressure),
            ..self
        }
    }

    #[must_use]
    pub fn with_enthalpy(self, enthalpy: SpecificEnthalpy) -> Self {
        Self {
            enthalpy: Some(enthalpy),
            ..self
        }
    }

    #[must_use]
    pub fn with_entropy(self, entropy: SpecificEntropy) -> Self {
        Self {
            entropy: Some(entropy),
            ..self
        }
    }

    #[must_use]
    pub fn with_quality(self, quality: Quality) -> Self {
        Self {
            quality: Some(quality),
            ..self
        }
    }

    /// Number of properties set on this query.
    #[must_use]
    pub fn given(&self) -> usize {
        [
            self.temperature.is_some(),
            self.pressure.is_some(),
            self.enthalpy.is_some(),
            self.entropy.is_some(),
            self.quality.is_some(),
        ]
        .into_iter()
        .filter(|&set| set)
        .count()
    }

    /// Resolves the query into a full state of `fluid`.
    ///
    /// # Errors
    ///
    /// - [`PropertyError::Underdetermined`] if fewer than two properties are set.
    /// - [`PropertyError::Overdetermined`] if more than two properties are set.
    /// - [`PropertyError::Unsupported`] if the pair has no matching input.
    /// - Any error returned by the model for the matching input.
    pub fn resolve<Fluid, M>(&self, model: &M, fluid: Fluid) -> Result<State<Fluid>, PropertyError>
    where
        M: StateFromQuery<Fluid>,
    {
        let given = self.given();
        if given < 2 {
            return Err(PropertyError::Underdetermined { given });
        }
        if given > 2 {
            return Err(PropertyError::Overdetermined { given });
        }

        match *self {
            Self {
                temperature: Some(t),
                quality: Some(x),
                ..
            } => model.state_from((fluid, t, x)),
            Self {
                pressure: Some(p),
                quality: Some(x),
                ..
            } => model.state_from((fluid, p, x)),
            Self {
                temperature: Some(t),
                entropy: Some(s),
                ..
            } => model.state_from((fluid, t, s)),
            Self {
                temperature: Some(t),
                enthalpy: Some(h),
                ..
            } => model.state_from((fluid, t, h)),
            Self {
                pressure: Some(p),
                entropy: Some(s),
                ..
            } => model.state_from((fluid, p, s)),
            Self {
                temperature: Some(_),
                pressure: Some(_),
                ..
            } => Err(PropertyError::Unsupported {
                pair: "temperature and pressure",
            }),
            Self {
                pressure: Some(_),
                enthalpy: Some(_),
                ..
            } => Err(PropertyError::Unsupported {
                pair: "pressure and enthalpy",
            }),
            Self {
                enthalpy: Some(_),
                entropy: Some(_),
                ..
            } => Err(PropertyError::Unsupported {
                pair: "enthalpy and entropy",
            }),
            _ => Err(PropertyError::Unsupported {
                pair: "quality with enthalpy or entropy",
            }),
        }
    }
}
