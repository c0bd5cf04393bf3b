//! Cohen-Coon tuning engine for FOPTD process models.
//!
//! Maps a First-Order-Plus-Time-Delay model (process gain `K`, time constant
//! `τ`, time delay `θ`) to P, PI or PID tuning parameters (`Kc`, `τ_I`, `τ_D`).
//!
//! # Architecture
//!
//! - [`ProcessModel`] is the immutable input value
//! - [`ControllerKind`] is a closed enum selecting the rule set
//! - [`compute`] dispatches over the kind with an exhaustive match
//! - [`TuningResult`] carries `Option` fields for parameters a kind does not use
//! - [`ResultTable`] renders a result as the four row parameter table
//!
//! The engine is pure: no state, no I/O beyond a `tracing` debug event, and
//! every division is checked so a singular model is reported, never masked.

pub mod cohen_coon;
pub mod error;
pub mod kind;
pub mod model;
pub mod result;
pub mod table;

pub use cohen_coon::{cohen_coon_p, cohen_coon_pi, cohen_coon_pid, compute, compute_params};
pub use error::{TuningError, TuningOutcome};
pub use kind::ControllerKind;
pub use model::ProcessModel;
pub use result::TuningResult;
pub use table::{NOT_APPLICABLE, ResultTable, TableRow};
