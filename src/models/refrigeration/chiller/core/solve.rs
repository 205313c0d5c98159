//! Cycle solve strategies and the steps they share.

mod effectiveness;
mod fixed_approach;

pub(super) use effectiveness::solve_effectiveness;
pub(super) use fixed_approach::solve_fixed_approach;

use tracing::debug;
use uom::{
    ConstZero,
    si::{
        available_energy::joule_per_kilogram,
        f64::{MassRate, Power},
        mass_rate::kilogram_per_second,
        power::watt,
        pressure::pascal,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    thermo::{PropertyError, StateQuery},
    units::SpecificEnthalpy,
};

use super::{
    ChillerError, CycleResults, CycleStates, ResolvedState, RefrigerantThermoModel, StatePoint,
};

/// Resolves one refrigerant point, tagging any failure with `point`.
fn resolve<Fluid: Default>(
    refrigerant: &impl RefrigerantThermoModel<Fluid>,
    point: StatePoint,
    query: StateQuery,
) -> Result<ResolvedState<Fluid>, ChillerError> {
    let resolved = query
        .resolve(refrigerant, Fluid::default())
        .and_then(|state| ResolvedState::from_state(refrigerant, state))
        .map_err(|source| ChillerError::PropertyResolution { point, source })?;

    debug!(
        %point,
        temperature_k = resolved.temperature().get::<kelvin>(),
        pressure_pa = resolved.pressure.get::<pascal>(),
        enthalpy_j_kg = resolved.enthalpy.get::<joule_per_kilogram>(),
        entropy_j_kg_k = resolved.entropy.get::<joule_per_kilogram_kelvin>(),
        quality = ?resolved.quality.map(|x| x.get::<ratio>()),
        "resolved refrigerant state"
    );

    Ok(resolved)
}

/// Returns `h1 − h4`, the heat absorbed per unit mass in the evaporator.
///
/// # Errors
///
/// Fails at the evaporator inlet if the refrigeration effect is not positive,
/// since no mass flow can then carry the evaporator duty.
fn refrigeration_effect<Fluid>(
    states: &CycleStates<Fluid>,
) -> Result<SpecificEnthalpy, ChillerError> {
    let effect = states.compressor_inlet.enthalpy - states.evaporator_inlet.enthalpy;
    if effect > SpecificEnthalpy::ZERO {
        Ok(effect)
    } else {
        Err(ChillerError::PropertyResolution {
            point: StatePoint::EvaporatorInlet,
            source: PropertyError::InvalidState {
                context: format!(
                    "evaporator inlet enthalpy is not below the compressor inlet (h1 - h4 = {} J/kg)",
                    effect.get::<joule_per_kilogram>()
                ),
            },
        })
    }
}

/// Derives duties and work from the resolved states and mass flow.
fn cycle_results<Fluid>(
    states: CycleStates<Fluid>,
    refrigerant_mass_rate: MassRate,
    evaporator_heat_rate: Power,
) -> CycleResults<Fluid> {
    let h1 = states.compressor_inlet.enthalpy;
    let h2 = states.compressor_outlet.enthalpy;
    let h3 = states.condenser_outlet.enthalpy;

    let results = CycleResults {
        states,
        refrigerant_mass_rate,
        evaporator_heat_rate,
        condenser_heat_rate: refrigerant_mass_rate * (h2 - h3),
        compressor_power: refrigerant_mass_rate * (h2 - h1),
    };

    debug!(
        mass_rate_kg_s = results.refrigerant_mass_rate.get::<kilogram_per_second>(),
        evaporator_w = results.evaporator_heat_rate.get::<watt>(),
        condenser_w = results.condenser_heat_rate.get::<watt>(),
        compressor_w = results.compressor_power.get::<watt>(),
        cop = results.cop().get::<ratio>(),
        "solved chiller cycle"
    );

    results
}
