use std::sync::atomic::{AtomicUsize, Ordering};

use uom::si::f64::{Pressure, SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::{
    thermo::{
        PropertyError, Quality, State,
        capability::{
            HasCp, HasEnthalpy, HasEntropy, HasPressure, HasQuality, StateFrom, ThermoModel,
        },
        fluid::{R134a, Water},
        model::{ClausiusClapeyron, Incompressible},
    },
    units::{SpecificEnthalpy, SpecificEntropy},
};

pub(super) fn refrigerant_model() -> ClausiusClapeyron<R134a> {
    ClausiusClapeyron::new().expect("R134a parameters are valid")
}

pub(super) fn water_model() -> Incompressible<Water> {
    Incompressible::new().expect("water parameters are valid")
}

/// Refrigerant model whose entropy-based state inversions always fail.
///
/// Saturated and isenthalpic states resolve normally, so a solve gets as far
/// as the compressor outlet before failing.
pub(super) struct FailingEntropy {
    inner: ClausiusClapeyron<R134a>,
}

impl FailingEntropy {
    pub(super) fn new() -> Self {
        Self {
            inner: refrigerant_model(),
        }
    }

    fn fail() -> PropertyError {
        PropertyError::OutOfDomain {
            context: "entropy inversion disabled".into(),
        }
    }
}

impl ThermoModel for FailingEntropy {
    type Fluid = R134a;
}

impl HasPressure for FailingEntropy {
    fn pressure(&self, state: &State<R134a>) -> Result<Pressure, PropertyError> {
        self.inner.pressure(state)
    }
}

impl HasEnthalpy for FailingEntropy {
    fn enthalpy(&self, state: &State<R134a>) -> Result<SpecificEnthalpy, PropertyError> {
        self.inner.enthalpy(state)
    }
}

impl HasEntropy for FailingEntropy {
    fn entropy(&self, state: &State<R134a>) -> Result<SpecificEntropy, PropertyError> {
        self.inner.entropy(state)
    }
}

impl HasQuality for FailingEntropy {
    fn quality(&self, state: &State<R134a>) -> Result<Option<Quality>, PropertyError> {
        self.inner.quality(state)
    }
}

impl StateFrom<(R134a, ThermodynamicTemperature, Quality)> for FailingEntropy {
    type Error = PropertyError;

    fn state_from(
        &self,
        input: (R134a, ThermodynamicTemperature, Quality),
    ) -> Result<State<R134a>, Self::Error> {
        self.inner.state_from(input)
    }
}

impl StateFrom<(R134a, Pressure, Quality)> for FailingEntropy {
    type Error = PropertyError;

    fn state_from(&self, input: (R134a, Pressure, Quality)) -> Result<State<R134a>, Self::Error> {
        self.inner.state_from(input)
    }
}

impl StateFrom<(R134a, ThermodynamicTemperature, SpecificEnthalpy)> for FailingEntropy {
    type Error = PropertyError;

    fn state_from(
        &self,
        input: (R134a, ThermodynamicTemperature, SpecificEnthalpy),
    ) -> Result<State<R134a>, Self::Error> {
        self.inner.state_from(input)
    }
}

impl StateFrom<(R134a, ThermodynamicTemperature, SpecificEntropy)> for FailingEntropy {
    type Error = PropertyError;

    fn state_from(
        &self,
        _input: (R134a, ThermodynamicTemperature, SpecificEntropy),
    ) -> Result<State<R134a>, Self::Error> {
        Err(Self::fail())
    }
}

impl StateFrom<(R134a, Pressure, SpecificEntropy)> for FailingEntropy {
    type Error = PropertyError;

    fn state_from(
        &self,
        _input: (R134a, Pressure, SpecificEntropy),
    ) -> Result<State<R134a>, Self::Error> {
        Err(Self::fail())
    }
}

/// Water model that counts how many states it resolves.
pub(super) struct CountingWater {
    inner: Incompressible<Water>,
    pub(super) calls: AtomicUsize,
}

impl CountingWater {
    pub(super) fn new() -> Self {
        Self {
            inner: water_model(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl ThermoModel for CountingWater {
    type Fluid = Water;
}

impl HasCp for CountingWater {
    fn cp(&self, state: &State<Water>) -> Result<SpecificHeatCapacity, PropertyError> {
        self.inner.cp(state)
    }
}

impl StateFrom<(Water, ThermodynamicTemperature, Pressure)> for CountingWater {
    type Error = PropertyError;

    fn state_from(
        &self,
        input: (Water, ThermodynamicTemperature, Pressure),
    ) -> Result<State<Water>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.state_from(input)
    }
}
