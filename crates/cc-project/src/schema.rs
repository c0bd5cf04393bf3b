//! Case file schema definitions.

use cc_tuning::{ControllerKind, ProcessModel};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub defaults: CaseDefaults,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

impl CaseFile {
    /// Template with a single case using the calculator defaults.
    pub fn template(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            defaults: CaseDefaults::default(),
            cases: vec![CaseDef::named("default")],
        }
    }

    /// Cases with defaults applied.
    pub fn resolved(&self) -> Vec<ResolvedCase> {
        self.cases
            .iter()
            .map(|case| case.resolve(&self.defaults))
            .collect()
    }
}

/// Values used for any field a case leaves out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CaseDefaults {
    #[serde(default = "default_gain")]
    pub gain: f64,
    #[serde(default = "default_time_constant")]
    pub time_constant: f64,
    #[serde(default = "default_dead_time")]
    pub dead_time: f64,
    #[serde(default)]
    pub controller: ControllerKind,
}

fn default_gain() -> f64 {
    ProcessModel::default().gain
}

fn default_time_constant() -> f64 {
    ProcessModel::default().time_constant
}

fn default_dead_time() -> f64 {
    ProcessModel::default().dead_time
}

impl Default for CaseDefaults {
    fn default() -> Self {
        let model = ProcessModel::default();
        Self {
            gain: model.gain,
            time_constant: model.time_constant,
            dead_time: model.dead_time,
            controller: ControllerKind::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_constant: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<ControllerKind>,
}

impl CaseDef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gain: None,
            time_constant: None,
            dead_time: None,
            controller: None,
        }
    }

    pub fn resolve(&self, defaults: &CaseDefaults) -> ResolvedCase {
        ResolvedCase {
            name: self.name.clone(),
            model: ProcessModel::new(
                self.gain.unwrap_or(defaults.gain),
                self.time_constant.unwrap_or(defaults.time_constant),
                self.dead_time.unwrap_or(defaults.dead_time),
            ),
            controller: self.controller.unwrap_or(defaults.controller),
        }
    }
}

/// A case with every field filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCase {
    pub name: String,
    pub model: ProcessModel,
    pub controller: ControllerKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_defaults_for_missing_fields() {
        let defaults = CaseDefaults {
            gain: 3.0,
            time_constant: 20.0,
            dead_time: 4.0,
            controller: ControllerKind::PI,
        };
        let case = CaseDef {
            dead_time: Some(2.0),
            ..CaseDef::named("loop")
        };

        let resolved = case.resolve(&defaults);
        assert_eq!(resolved.model, ProcessModel::new(3.0, 20.0, 2.0));
        assert_eq!(resolved.controller, ControllerKind::PI);
    }

    #[test]
    fn missing_defaults_section_uses_calculator_defaults() {
        let yaml = "version: 1\nname: minimal\ncases:\n  - name: a\n";
        let file: CaseFile = serde_yaml::from_str(yaml).unwrap();
        let resolved = file.resolved();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].model, ProcessModel::default());
        assert_eq!(resolved[0].controller, ControllerKind::P);
    }

    #[test]
    fn partial_defaults_section() {
        let yaml = "version: 1\nname: partial\ndefaults:\n  controller: pid\n";
        let file: CaseFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.defaults.controller, ControllerKind::PID);
        assert_eq!(file.defaults.gain, 1.0);
        assert_eq!(file.defaults.dead_time, 0.1);
    }

    #[test]
    fn unknown_controller_is_rejected() {
        let yaml = "version: 1\nname: bad\ncases:\n  - name: a\n    controller: PD\n";
        let err = serde_yaml::from_str::<CaseFile>(yaml).unwrap_err();
        assert!(err.to_string().contains("Invalid controller kind"));
    }
}
