//! Thermodynamic property models.

pub mod clausius_clapeyron;
pub mod incompressible;

pub(crate) mod ideal_gas_eos;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

pub use clausius_clapeyron::ClausiusClapeyron;
pub use incompressible::Incompressible;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub use coolprop::CoolProp;
