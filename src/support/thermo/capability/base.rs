/// Base trait for thermodynamic property models.
///
/// A model names the `Fluid` type it describes. Capability traits such as
/// [`HasPressure`](super::HasPressure) and [`StateFrom`](super::StateFrom)
/// build on this to describe what the model can compute.
pub trait ThermoModel {
    type Fluid;
}
