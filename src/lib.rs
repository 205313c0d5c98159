//! # Twine Chiller
//!
//! Vapor-compression chiller cycle models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The central model resolves the four refrigerant states of a single-stage
//! chiller (compressor inlet, compressor outlet, condenser outlet, evaporator
//! inlet) together with the chilled-water and cooling-tower water streams, then
//! derives refrigerant mass flow, heat duties, and compressor work.
//! Two closure strategies are available: a fixed approach temperature cycle and
//! an effectiveness-based heat exchanger cycle.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain (e.g., `refrigeration`),
//!    it moves to a domain-level support module
//! 3. **Crate-level**: If useful across multiple domains or potentially useful
//!    outside this crate, it moves to [`support`]
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific and domain-specific utility code remains private.
//!
//! ## Features
//!
//! - `coolprop`: Enables the [`CoolProp`](support::thermo::model::CoolProp)
//!   property backend.
//! - `serde`: Derives `Serialize`/`Deserialize` for design parameters and results.

pub mod models;
pub mod support;
