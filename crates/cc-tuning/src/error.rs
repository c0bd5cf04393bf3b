//! Error types for tuning calculations.

use cc_core::CoreError;
use thiserror::Error;

use crate::kind::ControllerKind;
use crate::result::TuningResult;

/// Result type returned by the tuning engine.
pub type TuningOutcome<T = TuningResult> = Result<T, TuningError>;

/// Errors that can occur while computing tuning parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    /// A denominator in one of the tuning formulas is exactly zero.
    #[error("Division by zero in {what}")]
    DivisionByZero { what: &'static str },

    /// Controller kind name outside {P, PI, PID}.
    #[error("Invalid controller kind: {name:?} (expected P, PI or PID)")]
    InvalidControllerKind { name: String },

    /// Input or computed value is NaN or infinite.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Result fields do not match the controller kind (e.g. a P result
    /// carrying `τ_I`).
    #[error("{kind} result has inconsistent {what}")]
    InconsistentResult {
        kind: ControllerKind,
        what: &'static str,
    },

    /// Physically meaningless process model. Only raised by the opt-in
    /// plausibility check, never by the engine itself.
    #[error("Non-physical process model: {what} = {value}")]
    NonPhysical { what: &'static str, value: f64 },
}

impl From<CoreError> for TuningError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => TuningError::NonFinite { what, value },
        }
    }
}
