//! Thermodynamic and fluid property modeling for the Twine framework.

mod error;
mod quality;
mod query;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use quality::Quality;
pub use query::{StateFromQuery, StateQuery};
pub use state::State;
