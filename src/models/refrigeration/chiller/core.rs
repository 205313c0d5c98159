//! Steady-state vapor-compression chiller cycle.
//!
//! The cycle has four refrigerant states, resolved in a fixed order from a
//! small set of design parameters and a pluggable property model:
//!
//! 1. compressor inlet, saturated vapor at the evaporating temperature
//! 2. compressor outlet, isentropic from state 1
//! 3. condenser outlet, saturated liquid at the condensing pressure
//! 4. evaporator inlet, after expansion from state 3
//!
//! Two strategies set the saturation temperatures. The effectiveness strategy
//! balances each exchanger against a resolved water stream and throttles
//! isenthalpically. The fixed-approach strategy offsets the water temperatures
//! by given approaches and expands isentropically.

mod design;
mod error;
mod point;
mod results;
mod solve;
mod traits;
mod water;

#[cfg(test)]
mod test_support;

pub use design::{DesignParameters, EffectivenessDesign, FixedApproachDesign};
pub use error::{ChillerError, ConfigurationError};
pub use point::{CycleStates, ResolvedState, StatePoint};
pub use results::{ChillerResults, CycleResults, EffectivenessResults, FixedApproachResults};
pub use traits::{RefrigerantThermoModel, WaterThermoModel};
pub use water::WaterStream;

use rayon::prelude::*;
use tracing::debug;

use solve::{solve_effectiveness, solve_fixed_approach};

/// Entry point for solving a chiller cycle.
///
/// Every solve validates its design before any property is evaluated, and
/// either returns complete results or fails with the point that could not be
/// resolved.
pub struct Chiller;

impl Chiller {
    /// Solves the strategy selected by `design`.
    ///
    /// The water model is only queried by the effectiveness strategy.
    ///
    /// # Errors
    ///
    /// Returns a [`ChillerError`] if the design is invalid or a state cannot
    /// be resolved.
    pub fn solve<RF, WF>(
        design: &DesignParameters,
        refrigerant: &impl RefrigerantThermoModel<RF>,
        water: &impl WaterThermoModel<WF>,
    ) -> Result<ChillerResults<RF>, ChillerError>
    where
        RF: Default,
        WF: Default,
    {
        match design {
            DesignParameters::Effectiveness(design) => {
                Self::solve_effectiveness(design, refrigerant, water)
                    .map(ChillerResults::Effectiveness)
            }
            DesignParameters::FixedApproach(design) => {
                Self::solve_fixed_approach(design, refrigerant).map(ChillerResults::FixedApproach)
            }
        }
    }

    /// Solves the effectiveness-based cycle.
    ///
    /// # Errors
    ///
    /// Returns a [`ChillerError`] if the design is invalid or a state cannot
    /// be resolved.
    pub fn solve_effectiveness<RF, WF>(
        design: &EffectivenessDesign,
        refrigerant: &impl RefrigerantThermoModel<RF>,
        water: &impl WaterThermoModel<WF>,
    ) -> Result<EffectivenessResults<RF>, ChillerError>
    where
        RF: Default,
        WF: Default,
    {
        solve_effectiveness(design, refrigerant, water)
    }

    /// Solves the fixed-approach cycle.
    ///
    /// # Errors
    ///
    /// Returns a [`ChillerError`] if the design is invalid or a state cannot
    /// be resolved.
    pub fn solve_fixed_approach<RF: Default>(
        design: &FixedApproachDesign,
        refrigerant: &impl RefrigerantThermoModel<RF>,
    ) -> Result<FixedApproachResults<RF>, ChillerError> {
        solve_fixed_approach(design, refrigerant)
    }

    /// Solves each design independently, in parallel.
    ///
    /// Results are returned in the order of `designs`. A failed design does
    /// not affect the others.
    pub fn sweep<RF, WF, R, W>(
        designs: &[DesignParameters],
        refrigerant: &R,
        water: &W,
    ) -> Vec<Result<ChillerResults<RF>, ChillerError>>
    where
        RF: Default + Send,
        WF: Default,
        R: RefrigerantThermoModel<RF> + Sync,
        W: WaterThermoModel<WF> + Sync,
    {
        debug!(designs = designs.len(), "sweeping chiller designs");

        designs
            .par_iter()
            .map(|design| Self::solve(design, refrigerant, water))
            .collect()
    }
}
