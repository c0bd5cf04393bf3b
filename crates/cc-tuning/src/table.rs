//! Parameter table for presenting a [`TuningResult`].

use std::fmt;

use cc_core::Real;

use crate::result::TuningResult;

/// Text shown for parameters a controller kind does not use.
pub const NOT_APPLICABLE: &str = "Not applicable";

const DECIMALS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub parameter: &'static str,
    pub value: String,
}

/// Four row table: controller type, `Kc`, `τ_I`, `τ_D`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub rows: Vec<TableRow>,
}

impl ResultTable {
    pub fn from_result(result: &TuningResult) -> Self {
        let rows = vec![
            TableRow {
                parameter: "Controller Type",
                value: result.controller_kind.to_string(),
            },
            TableRow {
                parameter: "Controller Gain (Kc)",
                value: format_real(result.kc),
            },
            TableRow {
                parameter: "Integral Time (τ_I)",
                value: format_optional(result.tau_i),
            },
            TableRow {
                parameter: "Derivative Time (τ_D)",
                value: format_optional(result.tau_d),
            },
        ];
        Self { rows }
    }

    /// Value shown for `parameter`, if the table has that row.
    pub fn value(&self, parameter: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.parameter == parameter)
            .map(|row| row.value.as_str())
    }
}

impl From<&TuningResult> for ResultTable {
    fn from(result: &TuningResult) -> Self {
        Self::from_result(result)
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const HEADER: (&str, &str) = ("Parameter", "Value");

        // Padding counts chars, so τ aligns like any other letter.
        let name_width = self
            .rows
            .iter()
            .map(|row| row.parameter.chars().count())
            .chain(std::iter::once(HEADER.0.len()))
            .max()
            .unwrap_or(0);
        let value_width = self
            .rows
            .iter()
            .map(|row| row.value.chars().count())
            .chain(std::iter::once(HEADER.1.len()))
            .max()
            .unwrap_or(0);

        writeln!(f, "{:<name_width$} | {}", HEADER.0, HEADER.1)?;
        writeln!(f, "{}-+-{}", "-".repeat(name_width), "-".repeat(value_width))?;
        for row in &self.rows {
            writeln!(f, "{:<name_width$} | {}", row.parameter, row.value)?;
        }
        Ok(())
    }
}

fn format_real(v: Real) -> String {
    format!("{v:.prec$}", prec = DECIMALS)
}

fn format_optional(v: Option<Real>) -> String {
    v.map(format_real).unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ControllerKind, ProcessModel, compute};

    #[test]
    fn p_table_marks_times_not_applicable() {
        let result = compute(ControllerKind::P, &ProcessModel::default()).unwrap();
        let table = ResultTable::from_result(&result);

        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.value("Controller Type"), Some("P"));
        assert_eq!(table.value("Controller Gain (Kc)"), Some("10.3333"));
        assert_eq!(table.value("Integral Time (τ_I)"), Some(NOT_APPLICABLE));
        assert_eq!(table.value("Derivative Time (τ_D)"), Some(NOT_APPLICABLE));
    }

    #[test]
    fn pid_table_formats_four_decimals() {
        let result = compute(ControllerKind::PID, &ProcessModel::default()).unwrap();
        let table = ResultTable::from(&result);

        assert_eq!(table.value("Controller Gain (Kc)"), Some("13.5833"));
        assert_eq!(table.value("Integral Time (τ_I)"), Some("0.2362"));
        assert_eq!(table.value("Derivative Time (τ_D)"), Some("0.0357"));
    }

    #[test]
    fn zero_is_rendered_as_number_not_absent() {
        let table = ResultTable::from_result(&TuningResult::pi(1.0, 0.0));
        assert_eq!(table.value("Integral Time (τ_I)"), Some("0.0000"));
        assert_eq!(table.value("Derivative Time (τ_D)"), Some(NOT_APPLICABLE));
    }

    #[test]
    fn display_rows_in_order() {
        let result = compute(ControllerKind::PI, &ProcessModel::default()).unwrap();
        let text = ResultTable::from_result(&result).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Parameter"));
        assert!(lines[2].starts_with("Controller Type"));
        assert!(lines[2].contains("| PI"));
        assert!(lines[3].contains("9.0833"));
        assert!(lines[4].contains("0.2755"));
        assert!(lines[5].contains(NOT_APPLICABLE));

        assert!(lines.iter().all(|line| !line.ends_with(' ')));

        // Separator column lines up on every row.
        let bar = lines[0].chars().position(|c| c == '|').unwrap();
        for line in &lines[2..] {
            assert_eq!(line.chars().position(|c| c == '|'), Some(bar));
        }
    }
}
