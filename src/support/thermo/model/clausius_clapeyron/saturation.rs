//! Iterative inversion of the vapor-pressure curve.
//!
//! With a temperature-dependent latent heat the vapor-pressure relation
//! `ln(p/p₀) = [a·(1/T₀ − 1/T) + b·ln(T/T₀)] / R` has no closed-form inverse.
//! Bisection on `ln p_sat(T) − ln p` recovers `T_sat` from a pressure.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;

use crate::support::thermo::PropertyError;

use super::ClausiusClapeyron;

/// Lower end of the search bracket as a fraction of the anchor temperature.
const LOWER_FRACTION: f64 = 0.25;

/// Upper end of the search bracket when the latent heat never vanishes.
const UPPER_FACTOR: f64 = 4.0;

/// Solves `p_sat(T_sat) = p` for `T_sat`.
///
/// # Errors
///
/// Returns [`PropertyError::OutOfDomain`] if `p` lies outside the pressures
/// the bracket spans, and [`PropertyError::Calculation`] if bisection fails or
/// does not converge.
pub(super) fn saturation_temperature<Fluid>(
    thermo: &ClausiusClapeyron<Fluid>,
    p: f64,
) -> Result<f64, PropertyError> {
    let bracket = [
        LOWER_FRACTION * thermo.t_0,
        thermo.dome_ceiling().min(UPPER_FACTOR * thermo.t_0),
    ];

    let target = p.ln();
    let [low, high] = bracket.map(|t| thermo.ln_p_sat(t));
    if !(low..=high).contains(&target) {
        return Err(PropertyError::OutOfDomain {
            context: format!(
                "p = {p} Pa is outside the saturation range {:.3e}..{:.3e} Pa",
                low.exp(),
                high.exp()
            ),
        });
    }

    let model = VaporPressureModel { thermo };
    let problem = VaporPressureProblem { target };

    let config = bisection::Config {
        max_iters: 100,
        x_abs_tol: 1e-10,
        x_rel_tol: 0.0,
        residual_tol: 1e-14,
    };

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config,
        |_event: &bisection::Event<'_, _, _>| None::<bisection::Action>,
    )
    .map_err(|error| PropertyError::Calculation {
        context: format!("saturation temperature at p = {p} Pa: {error}"),
    })?;

    if solution.status != bisection::Status::Converged {
        return Err(PropertyError::Calculation {
            context: format!(
                "saturation temperature hit iteration limit: residual={}, iters={}",
                solution.residual, solution.iters
            ),
        });
    }

    Ok(solution.snapshot.output.temperature)
}

/// Vapor pressure (as its logarithm) keyed by temperature.
struct VaporPressureModel<'a, Fluid> {
    thermo: &'a ClausiusClapeyron<Fluid>,
}

#[derive(Debug, Clone, Copy)]
struct VaporPressureOutput {
    temperature: f64,
    ln_pressure: f64,
}

impl<Fluid> Model for VaporPressureModel<'_, Fluid> {
    type Input = f64;
    type Output = VaporPressureOutput;
    type Error = Infallible;

    fn call(&self, t: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(VaporPressureOutput {
            temperature: *t,
            ln_pressure: self.thermo.ln_p_sat(*t),
        })
    }
}

/// Computes the residual as `ln p_sat(T) − ln p`.
struct VaporPressureProblem {
    target: f64,
}

impl EquationProblem<1> for VaporPressureProblem {
    type Input = f64;
    type Output = VaporPressureOutput;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.ln_pressure - self.target])
    }
}
