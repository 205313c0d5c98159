//! Energy-balance closures for one side of a heat exchanger.
//!
//! Both closures return the temperature of the *other* fluid at the boundary
//! where it meets a known water stream, e.g. the refrigerant saturation
//! temperature in an evaporator or condenser.
//!
//! - [`fixed_approach`] offsets a known temperature by a fixed difference.
//! - [`effectiveness_approach`] offsets the stream inlet temperature by
//!   `Q / (ε · C)`, where `C` is the known stream's capacitance rate.
//!
//! The effectiveness closure treats the known stream as the minimum
//! capacitance stream. It is a one-sided approximation, not an NTU solve.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
};

use super::{Effectiveness, HeatFlow, Stream};

/// Which side of the exchanger the unknown temperature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The unknown side is colder than the known temperature.
    Cold,
    /// The unknown side is hotter than the known temperature.
    Hot,
}

/// Offsets a known boundary temperature by a fixed approach.
///
/// Returns `known - approach` for [`Side::Cold`] and `known + approach` for
/// [`Side::Hot`].
#[must_use]
pub fn fixed_approach(
    known: ThermodynamicTemperature,
    approach: TemperatureInterval,
    unknown: Side,
) -> ThermodynamicTemperature {
    match unknown {
        Side::Cold => known - approach,
        Side::Hot => known + approach,
    }
}

/// Returns the other-side temperature implied by a resolved stream and an
/// exchanger effectiveness.
///
/// The direction follows the stream's heat flow. A stream losing heat
/// ([`HeatFlow::Out`]) is cooled by a colder fluid, so the result lies below
/// its inlet temperature. A stream gaining heat ([`HeatFlow::In`]) is heated
/// by a hotter fluid, so the result lies above its inlet temperature.
///
/// With an [ideal](Effectiveness::ideal) exchanger the result equals the
/// stream's outlet temperature.
#[must_use]
pub fn effectiveness_approach(
    stream: &Stream,
    effectiveness: Effectiveness,
) -> ThermodynamicTemperature {
    let capacitance_rate = *stream.capacitance_rate * effectiveness.get::<ratio>();

    match stream.heat_flow {
        HeatFlow::Out(heat_rate) => fixed_approach(
            stream.inlet_temperature,
            heat_rate.into_inner() / capacitance_rate,
            Side::Cold,
        ),
        HeatFlow::In(heat_rate) => fixed_approach(
            stream.inlet_temperature,
            heat_rate.into_inner() / capacitance_rate,
            Side::Hot,
        ),
        HeatFlow::None => stream.inlet_temperature,
    }
}
