//! Case file validation.
//!
//! Checks structure and numeric sanity only. Physical plausibility of the
//! process models is left to whoever runs the cases.

use crate::schema::{CaseDefaults, CaseFile, LATEST_VERSION};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate case name: {name}")]
    DuplicateName { name: String },

    #[error("Case #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case_file(file: &CaseFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    validate_defaults(&file.defaults)?;

    let mut names = HashSet::new();
    for (index, case) in file.cases.iter().enumerate() {
        if case.name.trim().is_empty() {
            return Err(ValidationError::EmptyName { index });
        }
        if !names.insert(case.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: case.name.clone(),
            });
        }
        let fields = [
            ("gain", case.gain),
            ("time_constant", case.time_constant),
            ("dead_time", case.dead_time),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                check_finite(&format!("cases.{}.{field}", case.name), v)?;
            }
        }
    }

    Ok(())
}

fn validate_defaults(defaults: &CaseDefaults) -> Result<(), ValidationError> {
    check_finite("defaults.gain", defaults.gain)?;
    check_finite("defaults.time_constant", defaults.time_constant)?;
    check_finite("defaults.dead_time", defaults.dead_time)?;
    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}
