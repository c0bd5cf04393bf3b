//! Cohen-Coon tuning rules.
//!
//! With `r = θ/τ`:
//!
//! | Kind | `Kc` | `τ_I` | `τ_D` |
//! |------|------|-------|-------|
//! | P    | `(1/K)(τ/θ)(1 + r/3)`   | -                       | -                |
//! | PI   | `(1/K)(τ/θ)(0.9 + r/12)` | `θ(30 + 3r)/(9 + 20r)` | -                |
//! | PID  | `(1/K)(τ/θ)(4/3 + r/4)`  | `θ(32 + 6r)/(13 + 8r)` | `θ·4/(11 + 2r)`  |
//!
//! Every kind shares the `τ/θ` factor in `Kc`, so `θ = 0` is a singularity of
//! the rules and is reported as [`TuningError::DivisionByZero`].

use cc_core::{Real, checked_div, ensure_finite};

use crate::error::{TuningError, TuningOutcome};
use crate::kind::ControllerKind;
use crate::model::ProcessModel;
use crate::result::TuningResult;

/// Intermediate terms shared by all three rules.
struct Terms {
    /// `(1/K)(τ/θ)`
    base_gain: Real,
    /// `θ/τ`
    r: Real,
    theta: Real,
}

impl Terms {
    fn new(model: &ProcessModel) -> TuningOutcome<Self> {
        model.ensure_finite()?;
        let r = model.delay_ratio()?;
        let inv_k = checked_div(1.0, model.gain).ok_or(TuningError::DivisionByZero {
            what: "1/K (process gain is zero)",
        })?;
        let tau_over_theta = checked_div(model.time_constant, model.dead_time).ok_or(
            TuningError::DivisionByZero {
                what: "τ/θ (time delay is zero)",
            },
        )?;
        Ok(Self {
            base_gain: inv_k * tau_over_theta,
            r,
            theta: model.dead_time,
        })
    }

    /// `θ·num/den`, failing on a zero denominator.
    fn scaled_ratio(&self, num: Real, den: Real, what: &'static str) -> TuningOutcome<Real> {
        let ratio = checked_div(num, den).ok_or(TuningError::DivisionByZero { what })?;
        Ok(self.theta * ratio)
    }
}

/// `Kc` for a P controller.
pub fn cohen_coon_p(model: &ProcessModel) -> TuningOutcome<Real> {
    let t = Terms::new(model)?;
    let kc = t.base_gain * (1.0 + t.r / 3.0);
    Ok(ensure_finite(kc, "controller gain Kc")?)
}

/// `(Kc, τ_I)` for a PI controller.
pub fn cohen_coon_pi(model: &ProcessModel) -> TuningOutcome<(Real, Real)> {
    let t = Terms::new(model)?;
    let kc = t.base_gain * (0.9 + t.r / 12.0);
    let tau_i = t.scaled_ratio(30.0 + 3.0 * t.r, 9.0 + 20.0 * t.r, "τ_I denominator 9 + 20r")?;
    Ok((
        ensure_finite(kc, "controller gain Kc")?,
        ensure_finite(tau_i, "integral time τ_I")?,
    ))
}

/// `(Kc, τ_I, τ_D)` for a PID controller.
pub fn cohen_coon_pid(model: &ProcessModel) -> TuningOutcome<(Real, Real, Real)> {
    let t = Terms::new(model)?;
    let kc = t.base_gain * (4.0 / 3.0 + t.r / 4.0);
    let tau_i = t.scaled_ratio(32.0 + 6.0 * t.r, 13.0 + 8.0 * t.r, "τ_I denominator 13 + 8r")?;
    let tau_d = t.scaled_ratio(4.0, 11.0 + 2.0 * t.r, "τ_D denominator 11 + 2r")?;
    Ok((
        ensure_finite(kc, "controller gain Kc")?,
        ensure_finite(tau_i, "integral time τ_I")?,
        ensure_finite(tau_d, "derivative time τ_D")?,
    ))
}

/// Compute Cohen-Coon tuning for `kind`.
///
/// Pure and deterministic. The model is not checked for physical
/// plausibility; negative parameters flow into the formulas unchanged.
///
/// # Errors
///
/// - [`TuningError::DivisionByZero`] when `K`, `τ` or `θ` is zero, or a rule
///   denominator vanishes
/// - [`TuningError::NonFinite`] for NaN/infinite inputs or an overflowing result
pub fn compute(kind: ControllerKind, model: &ProcessModel) -> TuningOutcome {
    tracing::debug!(
        kind = %kind,
        k = model.gain,
        tau = model.time_constant,
        theta = model.dead_time,
        "computing Cohen-Coon tuning"
    );
    let result = match kind {
        ControllerKind::P => TuningResult::p(cohen_coon_p(model)?),
        ControllerKind::PI => {
            let (kc, tau_i) = cohen_coon_pi(model)?;
            TuningResult::pi(kc, tau_i)
        }
        ControllerKind::PID => {
            let (kc, tau_i, tau_d) = cohen_coon_pid(model)?;
            TuningResult::pid(kc, tau_i, tau_d)
        }
    };
    Ok(result)
}

/// [`compute`] taking `K`, `τ`, `θ` directly.
pub fn compute_params(kind: ControllerKind, k: Real, tau: Real, theta: Real) -> TuningOutcome {
    compute(kind, &ProcessModel::new(k, tau, theta))
}
