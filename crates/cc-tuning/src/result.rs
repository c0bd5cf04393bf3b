//! Tuning result value object.

use cc_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::kind::ControllerKind;

/// Controller tuning produced by one computation.
///
/// `tau_i` is `None` for P, `tau_d` is `None` for P and PI. An absent field
/// means "not applicable" and is never conflated with a numeric zero.
/// Deserialization enforces the same field presence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTuningResult")]
pub struct TuningResult {
    pub controller_kind: ControllerKind,
    /// Controller gain `Kc`.
    pub kc: Real,
    /// Integral time `τ_I`.
    pub tau_i: Option<Real>,
    /// Derivative time `τ_D`.
    pub tau_d: Option<Real>,
}

impl TuningResult {
    pub fn p(kc: Real) -> Self {
        Self {
            controller_kind: ControllerKind::P,
            kc,
            tau_i: None,
            tau_d: None,
        }
    }

    pub fn pi(kc: Real, tau_i: Real) -> Self {
        Self {
            controller_kind: ControllerKind::PI,
            kc,
            tau_i: Some(tau_i),
            tau_d: None,
        }
    }

    pub fn pid(kc: Real, tau_i: Real, tau_d: Real) -> Self {
        Self {
            controller_kind: ControllerKind::PID,
            kc,
            tau_i: Some(tau_i),
            tau_d: Some(tau_d),
        }
    }
}

/// Wire form before field presence is checked against the kind.
#[derive(Deserialize)]
struct RawTuningResult {
    controller_kind: ControllerKind,
    kc: Real,
    #[serde(default)]
    tau_i: Option<Real>,
    #[serde(default)]
    tau_d: Option<Real>,
}

impl TryFrom<RawTuningResult> for TuningResult {
    type Error = TuningError;

    fn try_from(raw: RawTuningResult) -> Result<Self, Self::Error> {
        let kind = raw.controller_kind;
        match (raw.tau_i, raw.tau_d) {
            (None, None) if kind == ControllerKind::P => Ok(Self::p(raw.kc)),
            (Some(ti), None) if kind == ControllerKind::PI => Ok(Self::pi(raw.kc, ti)),
            (Some(ti), Some(td)) if kind == ControllerKind::PID => Ok(Self::pid(raw.kc, ti, td)),
            (tau_i, _) => {
                let what = if tau_i.is_some() != kind.has_integral() {
                    "integral time τ_I"
                } else {
                    "derivative time τ_D"
                };
                Err(TuningError::InconsistentResult { kind, what })
            }
        }
    }
}
