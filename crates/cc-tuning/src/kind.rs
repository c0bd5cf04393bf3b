//! Controller kinds covered by the Cohen-Coon rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Feedback controller structure to tune.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ControllerKind {
    /// Proportional only.
    #[default]
    P,
    /// Proportional-Integral.
    PI,
    /// Proportional-Integral-Derivative.
    PID,
}

impl ControllerKind {
    pub const ALL: [ControllerKind; 3] = [
        ControllerKind::P,
        ControllerKind::PI,
        ControllerKind::PID,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControllerKind::P => "P",
            ControllerKind::PI => "PI",
            ControllerKind::PID => "PID",
        }
    }

    /// Whether the tuning includes an integral time.
    pub fn has_integral(self) -> bool {
        matches!(self, ControllerKind::PI | ControllerKind::PID)
    }

    /// Whether the tuning includes a derivative time.
    pub fn has_derivative(self) -> bool {
        matches!(self, ControllerKind::PID)
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControllerKind {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "P" => Ok(ControllerKind::P),
            "PI" => Ok(ControllerKind::PI),
            "PID" => Ok(ControllerKind::PID),
            _ => Err(TuningError::InvalidControllerKind {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ControllerKind {
    type Error = TuningError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ControllerKind> for String {
    fn from(kind: ControllerKind) -> Self {
        kind.as_str().to_string()
    }
}
