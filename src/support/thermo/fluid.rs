//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted, often via trait implementations (e.g., constants for idealized
//! models like [`ClausiusClapeyron`](super::model::ClausiusClapeyron) or backend
//! identifiers for external property libraries like `CoolProp`).
//!
//! Both fluids here are unit-like marker types, so models can construct states
//! without spelling the fluid value.

mod r134a;
mod water;

pub use r134a::R134a;
pub use water::Water;
