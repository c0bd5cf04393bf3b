//! First-Order-Plus-Time-Delay process model.

use cc_core::{Real, Time, checked_div, ensure_finite, seconds};
use crate::error::{TuningError, TuningOutcome};

/// Identified FOPTD approximation of a process step response.
///
/// The model is a plain value: constructors do not check physical
/// plausibility. Use [`ProcessModel::check_physical`] when a caller wants to
/// reject negative gains or times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessModel {
    /// Process gain `K` (output change per unit input change).
    pub gain: Real,
    /// Time constant `τ`.
    pub time_constant: Real,
    /// Time delay `θ` (dead time).
    pub dead_time: Real,
}

impl ProcessModel {
    /// Create a model from `K`, `τ` and `θ`.
    pub fn new(gain: Real, time_constant: Real, dead_time: Real) -> Self {
        Self {
            gain,
            time_constant,
            dead_time,
        }
    }

    /// Create a model from dimensioned times; `τ` and `θ` are stored in seconds.
    pub fn from_si(gain: Real, time_constant: Time, dead_time: Time) -> Self {
        Self::new(gain, seconds(time_constant), seconds(dead_time))
    }

    /// Dimensionless delay ratio `r = θ/τ`.
    pub fn delay_ratio(&self) -> TuningOutcome<Real> {
        checked_div(self.dead_time, self.time_constant).ok_or(TuningError::DivisionByZero {
            what: "delay ratio θ/τ (time constant is zero)",
        })
    }

    /// Reject NaN and infinite parameters.
    pub fn ensure_finite(&self) -> TuningOutcome<()> {
        ensure_finite(self.gain, "process gain K")?;
        ensure_finite(self.time_constant, "time constant τ")?;
        ensure_finite(self.dead_time, "time delay θ")?;
        Ok(())
    }

    /// Opt-in plausibility policy: `K >= 0`, `τ > 0`, `θ >= 0`.
    pub fn check_physical(&self) -> TuningOutcome<()> {
        self.ensure_finite()?;
        if self.gain < 0.0 {
            return Err(TuningError::NonPhysical {
                what: "process gain K",
                value: self.gain,
            });
        }
        if self.time_constant <= 0.0 {
            return Err(TuningError::NonPhysical {
                what: "time constant τ",
                value: self.time_constant,
            });
        }
        if self.dead_time < 0.0 {
            return Err(TuningError::NonPhysical {
                what: "time delay θ",
                value: self.dead_time,
            });
        }
        Ok(())
    }
}

impl Default for ProcessModel {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.1)
    }
}
