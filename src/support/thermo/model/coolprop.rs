//! CoolProp-backed fluid property model.
//!
//! Provides real-fluid properties for both the refrigerant and water loops of
//! a chiller. Every state is stored as temperature and density, so each
//! property query updates the backend from `DMassT` before reading outputs.

mod error;

use std::{
    marker::PhantomData,
    sync::{Mutex, MutexGuard},
};

use rfluids::{
    io::{FluidInputPair, FluidParam, FluidTrivialParam},
    native::AbstractState,
};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, MolarMass, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        PropertyError, Quality, State,
        capability::{
            HasCp, HasEnthalpy, HasEntropy, HasPressure, HasQuality, StateFrom, ThermoModel,
        },
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

pub use error::CoolPropError;

/// Trait used to mark fluids as usable with the [`CoolProp`] model.
///
/// Implementors provide the backend and fluid identifiers needed to construct a
/// `CoolProp` `AbstractState`.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub trait CoolPropFluid: Default + Send + Sync + 'static {
    const BACKEND: &'static str;
    const NAME: &'static str;
}

/// A fluid property model backed by `CoolProp`.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub struct CoolProp<F: CoolPropFluid> {
    state: Mutex<AbstractState>,
    _f: PhantomData<F>,
}

impl<F: CoolPropFluid> ThermoModel for CoolProp<F> {
    type Fluid = F;
}

impl<F: CoolPropFluid> CoolProp<F> {
    /// Construct a new CoolProp-backed model instance.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if the underlying `AbstractState` cannot be
    /// created for the given `F::BACKEND` and `F::NAME`.
    pub fn new() -> Result<Self, CoolPropError> {
        let state = AbstractState::new(F::BACKEND, F::NAME)?;
        Ok(Self {
            state: Mutex::new(state),
            _f: PhantomData,
        })
    }

    /// Returns the molar mass of the fluid.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if the call fails.
    pub fn molar_mass(&self) -> Result<MolarMass, CoolPropError> {
        let abstract_state = self.state.lock()?;
        let molar_mass = abstract_state.keyed_output(FluidTrivialParam::MolarMass)?;
        Ok(MolarMass::new::<kilogram_per_mole>(molar_mass))
    }

    /// Locks the underlying `AbstractState` and updates it from `state`.
    fn lock_with_state(
        &self,
        state: &State<F>,
    ) -> Result<MutexGuard<'_, AbstractState>, CoolPropError> {
        let mut abstract_state = self.state.lock()?;
        abstract_state.update(
            FluidInputPair::DMassT,
            state.density.get::<kilogram_per_cubic_meter>(),
            state.temperature.get::<kelvin>(),
        )?;
        Ok(abstract_state)
    }

    /// Updates the backend from an input pair and reads back `T` and `ρ`.
    fn resolve(
        &self,
        fluid: F,
        pair: FluidInputPair,
        first: f64,
        second: f64,
    ) -> Result<State<F>, CoolPropError> {
        let mut abstract_state = self.state.lock()?;
        abstract_state.update(pair, first, second)?;

        let temperature = abstract_state.keyed_output(FluidParam::T)?;
        let density = abstract_state.keyed_output(FluidParam::DMass)?;

        Ok(State {
            temperature: ThermodynamicTemperature::new::<kelvin>(temperature),
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            fluid,
        })
    }
}

impl<F: CoolPropFluid> HasPressure for CoolProp<F> {
    fn pressure(&self, state: &State<Self::Fluid>) -> Result<Pressure, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let pressure = abstract_state
            .keyed_output(FluidParam::P)
            .map_err(CoolPropError::Rfluids)?;
        Ok(Pressure::new::<pascal>(pressure))
    }
}

impl<F: CoolPropFluid> HasEnthalpy for CoolProp<F> {
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let enthalpy = abstract_state
            .keyed_output(FluidParam::HMass)
            .map_err(CoolPropError::Rfluids)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(enthalpy))
    }
}

impl<F: CoolPropFluid> HasEntropy for CoolProp<F> {
    fn entropy(&self, state: &State<Self::Fluid>) -> Result<SpecificEntropy, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let entropy = abstract_state
            .keyed_output(FluidParam::SMass)
            .map_err(CoolPropError::Rfluids)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(entropy))
    }
}

impl<F: CoolPropFluid> HasCp for CoolProp<F> {
    fn cp(&self, state: &State<Self::Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let cp = abstract_state
            .keyed_output(FluidParam::CpMass)
            .map_err(CoolPropError::Rfluids)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }
}

impl<F: CoolPropFluid> HasQuality for CoolProp<F> {
    /// CoolProp reports a quality outside `[0, 1]` for single-phase states.
    fn quality(&self, state: &State<Self::Fluid>) -> Result<Option<Quality>, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let quality = abstract_state
            .keyed_output(FluidParam::Q)
            .map_err(CoolPropError::Rfluids)?;
        Ok(Quality::new(quality).ok())
    }
}

impl<F: CoolPropFluid> StateFrom<(F, ThermodynamicTemperature, Pressure)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, pressure): (F, ThermodynamicTemperature, Pressure),
    ) -> Result<State<F>, Self::Error> {
        Ok(self.resolve(
            fluid,
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
        )?)
    }
}

impl<F: CoolPropFluid> StateFrom<(F, ThermodynamicTemperature, Quality)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, quality): (F, ThermodynamicTemperature, Quality),
    ) -> Result<State<F>, Self::Error> {
        Ok(self.resolve(
            fluid,
            FluidInputPair::QT,
            quality.get::<ratio>(),
            temperature.get::<kelvin>(),
        )?)
    }
}

impl<F: CoolPropFluid> StateFrom<(F, Pressure, Quality)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, quality): (F, Pressure, Quality),
    ) -> Result<State<F>, Self::Error> {
        Ok(self.resolve(
            fluid,
            FluidInputPair::PQ,
            pressure.get::<pascal>(),
            quality.get::<ratio>(),
        )?)
    }
}

impl<F: CoolPropFluid> StateFrom<(F, ThermodynamicTemperature, SpecificEnthalpy)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, enthalpy): (F, ThermodynamicTemperature, SpecificEnthalpy),
    ) -> Result<State<F>, Self::Error> {
        Ok(self.resolve(
            fluid,
            FluidInputPair::HMassT,
            enthalpy.get::<joule_per_kilogram>(),
            temperature.get::<kelvin>(),
        )?)
    }
}

impl<F: CoolPropFluid> StateFrom<(F, ThermodynamicTemperature, SpecificEntropy)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, temperature, entropy): (F, ThermodynamicTemperature, SpecificEntropy),
    ) -> Result<State<F>, Self::Error> {
        Ok(self.resolve(
            fluid,
            FluidInputPair::SMassT,
            entropy.get::<joule_per_kilogram_kelvin>(),
            temperature.get::<kelvin>(),
        )?)
    }
}

impl<F: CoolPropFluid> StateFrom<(F, Pressure, SpecificEntropy)> for CoolProp<F> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, pressure, entropy): (F, Pressure, SpecificEntropy),
    ) -> Result<State<F>, Self::Error> {
        Ok(self.resolve(
            fluid,
            FluidInputPair::PSMass,
            pressure.get::<pascal>(),
            entropy.get::<joule_per_kilogram_kelvin>(),
        )?)
    }
}

// Static assertion: CoolProp<F> must be Send + Sync for any CoolPropFluid.
// Thread-safety is provided by rfluids, which serializes all CoolProp FFI calls
// through a global mutex. Our local Mutex<AbstractState> provides interior
// mutability and keeps update/query call pairs atomic.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check<F: CoolPropFluid>() {
        assert_send_sync::<CoolProp<F>>();
    }
};
