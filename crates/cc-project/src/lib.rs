//! cc-project: tuning case files (YAML/JSON) and validation.

pub mod schema;
pub mod tune;
pub mod validate;

pub use schema::*;
pub use tune::{CaseOutcome, tune_cases};
pub use validate::{ValidationError, validate_case_file};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported case file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let cases: CaseFile = serde_yaml::from_str(&content)?;
    validate_case_file(&cases)?;
    tracing::debug!(path = %path.display(), cases = cases.cases.len(), "loaded case file");
    Ok(cases)
}

pub fn save_yaml(path: &Path, cases: &CaseFile) -> ProjectResult<()> {
    validate_case_file(cases)?;
    let content = serde_yaml::to_string(cases)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let cases: CaseFile = serde_json::from_str(&content)?;
    validate_case_file(&cases)?;
    tracing::debug!(path = %path.display(), cases = cases.cases.len(), "loaded case file");
    Ok(cases)
}

pub fn save_json(path: &Path, cases: &CaseFile) -> ProjectResult<()> {
    validate_case_file(cases)?;
    let content = serde_json::to_string_pretty(cases)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> ProjectResult<Format> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load a case file, picking the format from the extension.
pub fn load_path(path: &Path) -> ProjectResult<CaseFile> {
    match format_of(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

/// Save a case file, picking the format from the extension.
pub fn save_path(path: &Path, cases: &CaseFile) -> ProjectResult<()> {
    match format_of(path)? {
        Format::Yaml => save_yaml(path, cases),
        Format::Json => save_json(path, cases),
    }
}
