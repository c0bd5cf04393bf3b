//! Running the tuning engine over every case in a file.

use cc_tuning::{ControllerKind, ProcessModel, TuningOutcome, compute};

use crate::schema::CaseFile;

/// Outcome of tuning one case. A failure stays attached to its case so the
/// remaining cases still run.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub name: String,
    pub model: ProcessModel,
    pub controller: ControllerKind,
    pub result: TuningOutcome,
}

pub fn tune_cases(file: &CaseFile) -> Vec<CaseOutcome> {
    file.resolved()
        .into_iter()
        .map(|case| {
            let result = compute(case.controller, &case.model);
            if let Err(err) = &result {
                tracing::warn!(case = %case.name, error = %err, "tuning failed");
            }
            CaseOutcome {
                name: case.name,
                model: case.model,
                controller: case.controller,
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CaseDef;
    use cc_tuning::TuningError;

    #[test]
    fn failing_case_does_not_stop_others() {
        let mut file = CaseFile::template("mixed");
        file.cases.push(CaseDef {
            dead_time: Some(0.0),
            ..CaseDef::named("no-delay")
        });
        file.cases.push(CaseDef {
            controller: Some(ControllerKind::PID),
            ..CaseDef::named("pid")
        });

        let outcomes = tune_cases(&file);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].result.is_ok());
        assert!(matches!(
            outcomes[1].result,
            Err(TuningError::DivisionByZero { .. })
        ));
        let pid = outcomes[2].result.as_ref().unwrap();
        assert!(pid.tau_d.is_some());
    }
}
