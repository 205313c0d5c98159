use tracing::debug_span;
use uom::si::f64::MassRate;

use crate::support::{
    cooling_tower::CoolingTower,
    hx::balance::effectiveness_approach,
    thermo::{Quality, StateQuery},
};

use super::{
    super::{
        ChillerError, CycleStates, EffectivenessDesign, EffectivenessResults,
        RefrigerantThermoModel, StatePoint, WaterStream, WaterThermoModel,
    },
    cycle_results, refrigeration_effect, resolve,
};

/// Solves the cycle with effectiveness-based evaporator and condenser balances.
///
/// Saturation temperatures follow from the water streams:
/// `T4 = T_chw,in − Q/(ε_evap·C_chw)` and `T2 = T_cw,in + Q_cw/(ε_cond·C_cw)`.
/// The refrigerant mass flow is then whatever carries the design capacity
/// across `h1 − h4`.
pub(in crate::models::refrigeration::chiller::core) fn solve_effectiveness<RF, WF>(
    design: &EffectivenessDesign,
    refrigerant: &impl RefrigerantThermoModel<RF>,
    water: &impl WaterThermoModel<WF>,
) -> Result<EffectivenessResults<RF>, ChillerError>
where
    RF: Default,
    WF: Default,
{
    let _span = debug_span!("chiller", strategy = "effectiveness").entered();

    design.validate()?;

    let tower_return = CoolingTower::return_temperature(
        design.wet_bulb_temperature,
        design.condenser_temperature_reduction,
    );

    let chilled_water = WaterStream::chilled(
        water,
        design.supply_temperature,
        design.chilled_water_temperature_drop,
        design.cooling_capacity,
        design.water_pressure,
    )?;
    let evaporating = effectiveness_approach(&chilled_water.stream, design.evaporator_effectiveness);

    let condenser_water = WaterStream::condenser(
        water,
        tower_return,
        design.condenser_temperature_reduction,
        design.cooling_tower_flow_rate,
        design.water_pressure,
    )?;
    let condensing = effectiveness_approach(&condenser_water.stream, design.condenser_effectiveness);

    let compressor_inlet = resolve(
        refrigerant,
        StatePoint::CompressorInlet,
        StateQuery::new()
            .with_temperature(evaporating)
            .with_quality(Quality::saturated_vapor()),
    )?;
    let compressor_outlet = resolve(
        refrigerant,
        StatePoint::CompressorOutlet,
        StateQuery::new()
            .with_temperature(condensing)
            .with_entropy(compressor_inlet.entropy),
    )?;
    let condenser_outlet = resolve(
        refrigerant,
        StatePoint::CondenserOutlet,
        StateQuery::new()
            .with_pressure(compressor_outlet.pressure)
            .with_quality(Quality::saturated_liquid()),
    )?;
    let evaporator_inlet = resolve(
        refrigerant,
        StatePoint::EvaporatorInlet,
        StateQuery::new()
            .with_temperature(evaporating)
            .with_enthalpy(condenser_outlet.enthalpy),
    )?;

    let states = CycleStates {
        compressor_inlet,
        compressor_outlet,
        condenser_outlet,
        evaporator_inlet,
    };

    let mass_rate: MassRate = design.cooling_capacity / refrigeration_effect(&states)?;

    Ok(EffectivenessResults {
        cycle: cycle_results(states, mass_rate, design.cooling_capacity),
        chilled_water,
        condenser_water,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::Ordering;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        f64::{Power, TemperatureInterval, ThermodynamicTemperature},
        power::{kilowatt, watt},
        ratio::ratio,
        temperature_interval::degree_fahrenheit as delta_fahrenheit,
        thermodynamic_temperature::{degree_fahrenheit, kelvin},
    };

    use crate::models::refrigeration::chiller::core::{
        ConfigurationError,
        test_support::{CountingWater, FailingEntropy, refrigerant_model, water_model},
    };
    use crate::support::{
        constraint::ConstraintError,
        hx::Effectiveness,
        units::{gallons_per_minute, tons_of_refrigeration},
    };

    #[test]
    fn reference_design_point() -> Result<(), ChillerError> {
        let design = EffectivenessDesign::default();
        let results = solve_effectiveness(&design, &refrigerant_model(), &water_model())?;
        let cycle = &results.cycle;

        assert_relative_eq!(cycle.evaporator_heat_rate.get::<kilowatt>(), 3.516_852_842_1);

        // 50 °F − 10 °F / 0.8 = 37.5 °F
        let t4 = cycle.states.evaporator_inlet.temperature();
        assert_relative_eq!(t4.get::<degree_fahrenheit>(), 37.5, epsilon = 1e-9);
        assert_relative_eq!(t4.get::<kelvin>(), 276.205_6, epsilon = 1e-4);
        assert_eq!(
            cycle.states.compressor_inlet.temperature(),
            cycle.states.evaporator_inlet.temperature()
        );

        // 79.37208 °F + 10 °F / 0.8
        let t2 = cycle.states.compressor_outlet.temperature();
        assert_relative_eq!(t2.get::<degree_fahrenheit>(), 91.872_08, epsilon = 1e-5);

        // Isentropic compression from saturated vapor leaves the dome.
        assert_eq!(cycle.states.compressor_outlet.quality, None);

        let work = cycle.compressor_power;
        assert!(work.get::<watt>() > 0.0);
        assert!(work < cycle.evaporator_heat_rate);

        // Heat is absorbed at T4 and rejected no colder than the condensing
        // temperature, which bounds the COP.
        let t3 = cycle.states.condenser_outlet.temperature();
        assert!(t3 < t2);
        let carnot = t4.get::<kelvin>() / (t3.get::<kelvin>() - t4.get::<kelvin>());
        let cop = cycle.cop().get::<ratio>();
        assert!(cop > 1.0 && cop < carnot);

        // Energy balance on the refrigerant: Q_cond = Q_evap + W.
        assert_relative_eq!(
            cycle.condenser_heat_rate.get::<watt>(),
            (cycle.evaporator_heat_rate + work).get::<watt>(),
            max_relative = 1e-9
        );

        // Water-side duties.
        assert_relative_eq!(
            results.chilled_water.heat_rate().get::<watt>(),
            3_516.852_842_1,
            max_relative = 1e-12
        );
        assert!(results.condenser_water.heat_rate().get::<watt>() > 0.0);
        Ok(())
    }

    #[test]
    fn cycle_closures_hold() -> Result<(), ChillerError> {
        let results = solve_effectiveness(
            &EffectivenessDesign::default(),
            &refrigerant_model(),
            &water_model(),
        )?;
        let states = &results.cycle.states;

        assert_relative_eq!(
            states.compressor_outlet.entropy.value,
            states.compressor_inlet.entropy.value,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            states.condenser_outlet.pressure.value,
            states.compressor_outlet.pressure.value,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            states.evaporator_inlet.enthalpy.value,
            states.condenser_outlet.enthalpy.value,
            max_relative = 1e-9
        );
        let quality = states
            .compressor_inlet
            .quality
            .expect("compressor inlet is saturated vapor");
        assert_relative_eq!(quality.get::<ratio>(), 1.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn repeated_solves_are_identical() -> Result<(), ChillerError> {
        let design = EffectivenessDesign::default();
        let refrigerant = refrigerant_model();
        let water = water_model();

        let first = solve_effectiveness(&design, &refrigerant, &water)?;
        let second = solve_effectiveness(&design, &refrigerant, &water)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn zero_tower_flow_fails_before_any_property_query() {
        let water = CountingWater::new();
        let design = EffectivenessDesign {
            cooling_tower_flow_rate: gallons_per_minute(0.0),
            ..EffectivenessDesign::default()
        };

        let result = solve_effectiveness(&design, &refrigerant_model(), &water);

        assert_eq!(
            result,
            Err(ChillerError::Configuration(
                ConfigurationError::InvalidParameter {
                    parameter: "cooling_tower_flow_rate",
                    source: ConstraintError::Zero,
                }
            ))
        );
        assert_eq!(water.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn zero_capacity_fails_before_any_property_query() {
        let water = CountingWater::new();
        let design = EffectivenessDesign {
            cooling_capacity: Power::new::<kilowatt>(0.0),
            ..EffectivenessDesign::default()
        };

        let result = solve_effectiveness(&design, &refrigerant_model(), &water);

        assert!(matches!(result, Err(ChillerError::Configuration(_))));
        assert_eq!(water.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn water_queries_are_counted() -> Result<(), ChillerError> {
        let water = CountingWater::new();
        solve_effectiveness(&EffectivenessDesign::default(), &refrigerant_model(), &water)?;

        // One state for cp and one for density, per stream.
        assert_eq!(water.calls.load(Ordering::SeqCst), 4);
        Ok(())
    }

    #[test]
    fn property_failure_names_the_state() {
        let result = solve_effectiveness(
            &EffectivenessDesign::default(),
            &FailingEntropy::new(),
            &water_model(),
        );

        let error = result.expect_err("entropy inversion is rigged to fail");
        assert_eq!(error.point(), Some(StatePoint::CompressorOutlet));
        assert!(matches!(
            error,
            ChillerError::PropertyResolution {
                source: crate::support::thermo::PropertyError::OutOfDomain { .. },
                ..
            }
        ));
    }

    #[test]
    fn ideal_exchangers_pin_saturation_to_water_outlets() -> Result<(), ChillerError> {
        let design = EffectivenessDesign::default()
            .with_effectiveness(Effectiveness::ideal(), Effectiveness::ideal());
        let results = solve_effectiveness(&design, &refrigerant_model(), &water_model())?;

        assert_relative_eq!(
            results.cycle.states.evaporator_inlet.temperature().get::<kelvin>(),
            results.chilled_water.stream.outlet_temperature.get::<kelvin>(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            results.cycle.states.compressor_outlet.temperature().get::<kelvin>(),
            results.condenser_water.stream.outlet_temperature.get::<kelvin>(),
            epsilon = 1e-9
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn compression_adds_and_evaporation_absorbs_energy(
            wet_bulb in 50.0..80.0_f64,
            supply in 38.0..48.0_f64,
            evaporator in 0.5..=1.0_f64,
            condenser in 0.5..=1.0_f64,
            tons in 0.5..5.0_f64,
            gpm in 1.0..10.0_f64,
        ) {
            let design = EffectivenessDesign {
                wet_bulb_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(wet_bulb),
                supply_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(supply),
                condenser_temperature_reduction: TemperatureInterval::new::<delta_fahrenheit>(10.0),
                cooling_capacity: tons_of_refrigeration(tons),
                cooling_tower_flow_rate: gallons_per_minute(gpm),
                ..EffectivenessDesign::default()
            }
            .with_effectiveness(
                Effectiveness::new(evaporator).unwrap(),
                Effectiveness::new(condenser).unwrap(),
            );

            let results = solve_effectiveness(&design, &refrigerant_model(), &water_model()).unwrap();
            let states = &results.cycle.states;

            prop_assert!(states.compressor_inlet.enthalpy > states.evaporator_inlet.enthalpy);
            prop_assert!(states.compressor_outlet.enthalpy > states.compressor_inlet.enthalpy);
            prop_assert_eq!(states.compressor_outlet.quality, None);
            prop_assert!(results.cycle.compressor_power < results.cycle.evaporator_heat_rate);
            prop_assert!(results.cycle.refrigerant_mass_rate.value > 0.0);
        }
    }
}
