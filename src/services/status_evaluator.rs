use crate::enums::gate_status::GateStatus;
use crate::structs::sonar::project_status::ProjectStatus;
use crate::structs::verdict::Verdict;

pub struct StatusEvaluator;

impl StatusEvaluator {
    pub fn evaluate(project_status: &ProjectStatus) -> Verdict {
        let passed = project_status.status == GateStatus::Ok;

        let summary = if passed {
            String::new()
        } else {
            project_status
                .conditions
                .iter()
                .filter(|c| c.status.is_failing())
                .map(|c| format!("{}:{}", c.metric_key, c.status))
                .collect::<Vec<_>>()
                .join(", ")
        };

        Verdict {
            passed,
            status: project_status.status,
            summary,
        }
    }
}
