use uom::si::f64::{MassDensity, ThermodynamicTemperature};

/// The thermodynamic state of a fluid.
///
/// Temperature and density fix the state of a pure fluid everywhere,
/// including inside the vapor dome where temperature and pressure do not.
/// Models derive every other property from these two.
///
/// `Fluid` is usually a marker such as [`R134a`](super::fluid::R134a) or
/// [`Water`](super::fluid::Water).
///
/// # Example
///
/// ```
/// use twine_chiller::support::thermo::{State, fluid::R134a};
/// use uom::si::{
///     f64::{ThermodynamicTemperature, MassDensity},
///     thermodynamic_temperature::kelvin,
///     mass_density::kilogram_per_cubic_meter,
/// };
///
/// let state = State::new(
///     ThermodynamicTemperature::new::<kelvin>(280.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(17.0),
///     R134a,
/// );
/// assert_eq!(state.fluid, R134a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature, density, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, density: MassDensity, fluid: Fluid) -> Self {
        Self {
            temperature,
            density,
            fluid,
        }
    }
}
