//! Refrigeration system models.
//!
//! This module contains vapor-compression cycle models and the water loops
//! that reject and absorb their heat.

pub mod chiller;
