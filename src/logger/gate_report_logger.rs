use crate::structs::sonar::project_status::ProjectStatus;
use crate::structs::verdict::Verdict;

pub struct GateReportLogger {}

impl GateReportLogger {

    pub fn print_verdict(verdict: &Verdict) {
        log::info!("{} project status: {}", verdict.status.emoji(), verdict.status);
    }

    pub fn print_conditions(project_status: &ProjectStatus) {
        if project_status.conditions.is_empty() {
            log::info!("no conditions reported for this quality gate");
            return;
        }

        log::info!("{}", "━".repeat(60));
        for line in Self::condition_lines(project_status) {
            log::info!("{}", line);
        }
        log::info!("{}", "━".repeat(60));

        if project_status.ignored_conditions {
            log::info!("⚠️ some conditions were ignored by the server (small changeset)");
        }
    }

    pub fn condition_lines(project_status: &ProjectStatus) -> Vec<String> {
        project_status
            .conditions
            .iter()
            .map(|c| {
                let mut line = format!("{} {:<40} {:<5}", c.status.emoji(), c.metric_key, c.status);
                if let Some(actual) = &c.actual_value {
                    line.push_str(&format!(" actual: {}", actual));
                }
                if let (Some(comparator), Some(threshold)) = (&c.comparator, &c.error_threshold) {
                    line.push_str(&format!(" (error if {} {})", comparator, threshold));
                }
                line
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::gate_status::GateStatus;
    use crate::structs::sonar::condition::Condition;

    #[test]
    fn renders_threshold_details() {
        let mut coverage = Condition::new(GateStatus::Error, "new_coverage");
        coverage.comparator = Some("LT".to_string());
        coverage.error_threshold = Some("80".to_string());
        coverage.actual_value = Some("61.5".to_string());
        let status = ProjectStatus {
            status: GateStatus::Error,
            ignored_conditions: false,
            conditions: vec![coverage, Condition::new(GateStatus::None, "bugs")],
        };

        let lines = GateReportLogger::condition_lines(&status);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("new_coverage"));
        assert!(lines[0].ends_with("actual: 61.5 (error if LT 80)"));
        assert!(lines[1].contains("bugs"));
        assert!(!lines[1].contains("actual"));
    }
}
