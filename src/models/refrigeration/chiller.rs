//! Single-stage vapor-compression chiller.
//!
//! [`ChillerModel`] adapts the cycle solver to [`twine_core::Model`]. It owns
//! the refrigerant and water property models and takes
//! [`DesignParameters`] as input, so one model instance can be evaluated for
//! many designs.
//!
//! # Example
//!
//! ```
//! use twine_chiller::{
//!     models::refrigeration::chiller::{ChillerModel, DesignParameters},
//!     support::thermo::{
//!         fluid::{R134a, Water},
//!         model::{ClausiusClapeyron, Incompressible},
//!     },
//! };
//! use twine_core::Model;
//! use uom::si::ratio::ratio;
//!
//! let model = ChillerModel::new(
//!     ClausiusClapeyron::<R134a>::new().unwrap(),
//!     Incompressible::<Water>::new().unwrap(),
//! );
//!
//! let results = model.call(&DesignParameters::default()).unwrap();
//! assert!(results.cycle().cop().get::<ratio>() > 1.0);
//! ```

mod core;

pub use self::core::{
    Chiller, ChillerError, ChillerResults, ConfigurationError, CycleResults, CycleStates,
    DesignParameters, EffectivenessDesign, EffectivenessResults, FixedApproachDesign,
    FixedApproachResults, RefrigerantThermoModel, ResolvedState, StatePoint,
    WaterStream, WaterThermoModel,
};

use twine_core::Model;

use crate::support::thermo::capability::ThermoModel;

/// A chiller with fixed property models.
#[derive(Debug, Clone)]
pub struct ChillerModel<Refrigerant, Water> {
    refrigerant: Refrigerant,
    water: Water,
}

impl<Refrigerant, Water> ChillerModel<Refrigerant, Water> {
    /// Creates a chiller from refrigerant and water property models.
    #[must_use]
    pub fn new(refrigerant: Refrigerant, water: Water) -> Self {
        Self { refrigerant, water }
    }

    #[must_use]
    pub fn refrigerant(&self) -> &Refrigerant {
        &self.refrigerant
    }

    #[must_use]
    pub fn water(&self) -> &Water {
        &self.water
    }

    /// Solves each design in parallel with this model's property models.
    ///
    /// See [`Chiller::sweep`].
    pub fn sweep<RF, WF>(
        &self,
        designs: &[DesignParameters],
    ) -> Vec<Result<ChillerResults<RF>, ChillerError>>
    where
        RF: Default + Send,
        WF: Default,
        Refrigerant: ThermoModel<Fluid = RF> + RefrigerantThermoModel<RF> + Sync,
        Water: ThermoModel<Fluid = WF> + WaterThermoModel<WF> + Sync,
    {
        Chiller::sweep(designs, &self.refrigerant, &self.water)
    }
}

impl<Refrigerant, Water, RF, WF> Model for ChillerModel<Refrigerant, Water>
where
    RF: Default,
    WF: Default,
    Refrigerant: ThermoModel<Fluid = RF> + RefrigerantThermoModel<RF>,
    Water: ThermoModel<Fluid = WF> + WaterThermoModel<WF>,
{
    type Input = DesignParameters;
    type Output = ChillerResults<RF>;
    type Error = ChillerError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Chiller::solve(input, &self.refrigerant, &self.water)
    }
}
