//! cc-core: shared foundation for the Cohen-Coon tuning workspace.
//!
//! Contains:
//! - units (uom SI time/ratio types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
