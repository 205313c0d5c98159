use tracing::{debug, debug_span};
use uom::si::{f64::MassRate, thermodynamic_temperature::kelvin};

use crate::support::{
    cooling_tower::CoolingTower,
    hx::balance::{Side, fixed_approach},
    thermo::{Quality, StateQuery},
};

use super::{
    super::{
        ChillerError, CycleStates, FixedApproachDesign, FixedApproachResults,
        RefrigerantThermoModel, StatePoint,
    },
    cycle_results, refrigeration_effect, resolve,
};

/// Solves the cycle with fixed evaporator and condenser approach temperatures.
///
/// Compression and expansion are both isentropic. The refrigerant mass flow
/// comes from the given volumetric flow at the compressor inlet, so the
/// evaporator duty is an output.
pub(in crate::models::refrigeration::chiller::core) fn solve_fixed_approach<RF: Default>(
    design: &FixedApproachDesign,
    refrigerant: &impl RefrigerantThermoModel<RF>,
) -> Result<FixedApproachResults<RF>, ChillerError> {
    let _span = debug_span!("chiller", strategy = "fixed_approach").entered();

    design.validate()?;

    let tower_return_temperature = CoolingTower::return_temperature(
        design.wet_bulb_temperature,
        design.condenser_temperature_reduction,
    );
    let tower_supply_temperature =
        tower_return_temperature + design.condenser_temperature_reduction;

    let evaporating = fixed_approach(
        design.supply_temperature,
        design.evaporator_approach,
        Side::Cold,
    );
    let condensing = fixed_approach(
        tower_return_temperature,
        design.condenser_approach,
        Side::Hot,
    );

    debug!(
        tower_return_k = tower_return_temperature.get::<kelvin>(),
        evaporating_k = evaporating.get::<kelvin>(),
        condensing_k = condensing.get::<kelvin>(),
        "saturation temperatures"
    );

    let compressor_inlet = resolve(
        refrigerant,
        StatePoint::CompressorInlet,
        StateQuery::new()
            .with_temperature(evaporating)
            .with_quality(Quality::saturated_vapor()),
    )?;
    let condenser_outlet = resolve(
        refrigerant,
        StatePoint::CondenserOutlet,
        StateQuery::new()
            .with_temperature(condensing)
            .with_quality(Quality::saturated_liquid()),
    )?;
    let compressor_outlet = resolve(
        refrigerant,
        StatePoint::CompressorOutlet,
        StateQuery::new()
            .with_pressure(condenser_outlet.pressure)
            .with_entropy(compressor_inlet.entropy),
    )?;
    let evaporator_inlet = resolve(
        refrigerant,
        StatePoint::EvaporatorInlet,
        StateQuery::new()
            .with_pressure(compressor_inlet.pressure)
            .with_entropy(condenser_outlet.entropy),
    )?;

    let states = CycleStates {
        compressor_inlet,
        compressor_outlet,
        condenser_outlet,
        evaporator_inlet,
    };

    let effect = refrigeration_effect(&states)?;
    let mass_rate: MassRate = states.compressor_inlet.density() * design.refrigerant_flow_rate;

    Ok(FixedApproachResults {
        cycle: cycle_results(states, mass_rate, mass_rate * effect),
        tower_return_temperature,
        tower_supply_temperature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::TemperatureInterval, mass_rate::kilogram_per_second, power::watt,
        ratio::ratio, temperature_interval::degree_fahrenheit as delta_fahrenheit,
        thermodynamic_temperature::degree_fahrenheit,
    };

    use crate::models::refrigeration::chiller::core::{
        ConfigurationError,
        test_support::{FailingEntropy, refrigerant_model},
    };
    use crate::support::{constraint::ConstraintError, units::gallons_per_minute};

    #[test]
    fn reference_design_point() -> Result<(), ChillerError> {
        let design = FixedApproachDesign::default();
        let results = solve_fixed_approach(&design, &refrigerant_model())?;
        let cycle = &results.cycle;

        assert_relative_eq!(
            cycle.states.compressor_inlet.temperature().get::<degree_fahrenheit>(),
            30.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            cycle.states.condenser_outlet.temperature().get::<degree_fahrenheit>(),
            89.372_08,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            results.tower_return_temperature.get::<degree_fahrenheit>(),
            79.372_08,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            results.tower_supply_temperature.get::<degree_fahrenheit>(),
            89.372_08,
            epsilon = 1e-5
        );

        // ṁ = ρ1 · V̇ at the compressor suction.
        let mass_rate = cycle.states.compressor_inlet.density() * design.refrigerant_flow_rate;
        assert_relative_eq!(
            cycle.refrigerant_mass_rate.get::<kilogram_per_second>(),
            mass_rate.get::<kilogram_per_second>(),
            max_relative = 1e-12
        );

        // The default displacement is sized for roughly one ton.
        let tons = cycle.evaporator_heat_rate.get::<watt>() / 3_516.853;
        assert!((0.85..1.1).contains(&tons), "capacity {tons} ton");

        assert!(cycle.compressor_power.get::<watt>() > 0.0);
        assert!(cycle.cop().get::<ratio>() > 1.0);
        assert_eq!(cycle.states.compressor_outlet.quality, None);

        // Isentropic expansion drops h4 below h3, so the condenser rejects
        // less than Q_evap + W by the expansion work m·(h3 − h4).
        let expansion_work = cycle.refrigerant_mass_rate
            * (cycle.states.condenser_outlet.enthalpy - cycle.states.evaporator_inlet.enthalpy);
        assert!(expansion_work.get::<watt>() > 0.0);
        assert_relative_eq!(
            (cycle.condenser_heat_rate + expansion_work).get::<watt>(),
            (cycle.evaporator_heat_rate + cycle.compressor_power).get::<watt>(),
            max_relative = 1e-9
        );
        Ok(())
    }

    #[test]
    fn compression_and_expansion_are_isentropic() -> Result<(), ChillerError> {
        let results = solve_fixed_approach(&FixedApproachDesign::default(), &refrigerant_model())?;
        let states = &results.cycle.states;

        assert_relative_eq!(
            states.compressor_outlet.entropy.value,
            states.compressor_inlet.entropy.value,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            states.evaporator_inlet.entropy.value,
            states.condenser_outlet.entropy.value,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            states.compressor_outlet.pressure.value,
            states.condenser_outlet.pressure.value,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            states.evaporator_inlet.pressure.value,
            states.compressor_inlet.pressure.value,
            max_relative = 1e-9
        );

        // Isentropic expansion extracts work, so state 4 sits below state 3.
        assert!(states.evaporator_inlet.enthalpy < states.condenser_outlet.enthalpy);
        Ok(())
    }

    #[test]
    fn zero_evaporator_approach_evaporates_at_supply() -> Result<(), ChillerError> {
        let design = FixedApproachDesign {
            evaporator_approach: TemperatureInterval::new::<delta_fahrenheit>(0.0),
            ..FixedApproachDesign::default()
        };
        let results = solve_fixed_approach(&design, &refrigerant_model())?;

        assert_relative_eq!(
            results.cycle.states.compressor_inlet.temperature().get::<kelvin>(),
            design.supply_temperature.get::<kelvin>(),
            epsilon = 1e-9
        );
        Ok(())
    }

    #[test]
    fn zero_refrigerant_flow_is_rejected() {
        let design = FixedApproachDesign {
            refrigerant_flow_rate: gallons_per_minute(0.0),
            ..FixedApproachDesign::default()
        };

        assert_eq!(
            solve_fixed_approach(&design, &refrigerant_model()),
            Err(ChillerError::Configuration(
                ConfigurationError::InvalidParameter {
                    parameter: "refrigerant_flow_rate",
                    source: ConstraintError::Zero,
                }
            ))
        );
    }

    #[test]
    fn property_failure_names_the_state() {
        let error = solve_fixed_approach(&FixedApproachDesign::default(), &FailingEntropy::new())
            .expect_err("entropy inversion is rigged to fail");

        assert_eq!(error.point(), Some(StatePoint::CompressorOutlet));
    }
}
