//! Output formatting for tuning results.

use cc_tuning::{ResultTable, TuningResult};
use clap::ValueEnum;
use serde::Serialize;

use crate::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Four row parameter table
    #[default]
    Table,
    /// Serialized result as JSON
    Json,
    /// Serialized result as YAML
    Yaml,
}

pub fn render_result(result: &TuningResult, format: OutputFormat) -> CliResult<String> {
    let text = match format {
        OutputFormat::Table => ResultTable::from_result(result).to_string(),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(result)?;
            s.push('\n');
            s
        }
        OutputFormat::Yaml => serde_yaml::to_string(result)?,
    };
    Ok(text)
}

/// One entry of a multi-result document; keeps input order.
#[derive(Serialize)]
struct NamedResult<'a> {
    name: &'a str,
    result: &'a TuningResult,
}

/// Several named results in one document (`all` and `batch` commands).
pub fn render_named(results: &[(String, TuningResult)], format: OutputFormat) -> CliResult<String> {
    let entries: Vec<NamedResult<'_>> = results
        .iter()
        .map(|(name, result)| NamedResult { name, result })
        .collect();
    match format {
        OutputFormat::Table => {
            let mut out = String::new();
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format!("== {} ==\n", entry.name));
                out.push_str(&ResultTable::from_result(entry.result).to_string());
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(&entries)?;
            s.push('\n');
            Ok(s)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&entries)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_default_format() {
        let text = render_result(&TuningResult::p(10.0), OutputFormat::default()).unwrap();
        assert!(text.contains("Controller Gain (Kc)"));
        assert!(text.contains("10.0000"));
        assert!(text.contains("Not applicable"));
    }

    #[test]
    fn json_keeps_absent_fields_explicit() {
        let text = render_result(&TuningResult::pi(9.0, 0.25), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["controller_kind"], "PI");
        assert_eq!(value["tau_i"], 0.25);
        assert!(value["tau_d"].is_null());
    }

    #[test]
    fn named_tables_have_headings() {
        let results = vec![
            ("P".to_string(), TuningResult::p(1.0)),
            ("PID".to_string(), TuningResult::pid(1.0, 2.0, 0.5)),
        ];
        let text = render_named(&results, OutputFormat::Table).unwrap();
        assert!(text.starts_with("== P ==\n"));
        assert!(text.contains("\n== PID ==\n"));
    }

    #[test]
    fn named_yaml_lists_entries() {
        let results = vec![("loop".to_string(), TuningResult::p(2.0))];
        let text = render_named(&results, OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value[0]["name"].as_str(), Some("loop"));
        assert_eq!(value[0]["result"]["kc"].as_f64(), Some(2.0));
    }

    #[test]
    fn named_json_keeps_input_order() {
        let results = vec![
            ("zeta".to_string(), TuningResult::pid(1.0, 2.0, 0.5)),
            ("alpha".to_string(), TuningResult::p(3.0)),
        ];
        let text = render_named(&results, OutputFormat::Json).unwrap();
        assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
        assert!(text.find("tau_i").unwrap() < text.find("tau_d").unwrap());

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "zeta");
        assert_eq!(value[1]["result"]["kc"], 3.0);
    }
}
