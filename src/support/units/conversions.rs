use uom::si::{
    f64::{Power, VolumeRate},
    power::kilowatt,
    volume_rate::cubic_meter_per_second,
};

/// Kilowatts per ton of refrigeration.
pub const KILOWATTS_PER_TON: f64 = 3.516_852_842_1;

/// Cubic meters per second per US gallon per minute.
///
/// This is the rounded factor used by the chiller design correlations,
/// not the exact definition of the gallon.
pub const CUBIC_METERS_PER_SECOND_PER_GPM: f64 = 6.309e-5;

/// Converts a cooling capacity in tons of refrigeration to a [`Power`].
#[must_use]
pub fn tons_of_refrigeration(tons: f64) -> Power {
    Power::new::<kilowatt>(tons * KILOWATTS_PER_TON)
}

/// Converts a volumetric flow rate in US gallons per minute to a [`VolumeRate`].
#[must_use]
pub fn gallons_per_minute(gpm: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_second>(gpm * CUBIC_METERS_PER_SECOND_PER_GPM)
}
