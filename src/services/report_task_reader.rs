use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{REPORT_TASK_DIR, REPORT_TASK_FILE_NAME, REPORT_TASK_KEY_CE_TASK_ID};
use crate::errors::{GateError, GateResult};
use crate::helpers::string_helper::is_blank;
use crate::traits::task_handle_source::TaskHandleSource;

/// Reads the `ceTaskId` from `<build-dir>/sonar/report-task.txt`, the file a
/// sonar scanner writes after submitting its analysis report.
pub struct ReportTaskReader {
    report_task_path: PathBuf,
}

impl ReportTaskReader {
    pub fn new(build_dir: &Path) -> Self {
        Self {
            report_task_path: build_dir.join(REPORT_TASK_DIR).join(REPORT_TASK_FILE_NAME),
        }
    }

    pub fn report_task_path(&self) -> &Path {
        &self.report_task_path
    }

    /// Parse `key=value` / `key: value` lines, skipping comments.
    fn parse_properties(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
            .filter_map(|line| {
                let separator = line.find(&['=', ':'][..])?;
                let (key, value) = line.split_at(separator);
                Some((key.trim().to_string(), value[1..].trim().to_string()))
            })
            .collect()
    }
}

impl TaskHandleSource for ReportTaskReader {
    fn find_task_handle(&self) -> GateResult<Option<String>> {
        let path = &self.report_task_path;
        if !path.exists() {
            log::info!("no report file from previous sonar scanner run found: {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| GateError::report_task_error(path, format!("Error parsing properties: {}", e)))?;
        let properties = Self::parse_properties(&content);

        match properties.get(REPORT_TASK_KEY_CE_TASK_ID) {
            Some(ce_task_id) if !is_blank(Some(ce_task_id.as_str())) => {
                log::debug!("found {} '{}' in {}", REPORT_TASK_KEY_CE_TASK_ID, ce_task_id, path.display());
                Ok(Some(ce_task_id.clone()))
            }
            _ => Err(GateError::report_task_error(
                path,
                format!("Property '{}' not found", REPORT_TASK_KEY_CE_TASK_ID),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_report_task(content: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let sonar_dir = dir.path().join("sonar");
        fs::create_dir_all(&sonar_dir).unwrap();
        fs::write(sonar_dir.join("report-task.txt"), content).unwrap();
        dir
    }

    #[test]
    fn no_file_means_no_handle() {
        let dir = tempfile::tempdir().unwrap();

        let handle = ReportTaskReader::new(dir.path()).find_task_handle().unwrap();
        assert_eq!(handle, None);
    }

    #[test]
    fn reads_ce_task_id() {
        let dir = write_report_task(
            "projectKey=org.example:demo\n\
             serverUrl=http://localhost:9000\n\
             serverVersion=9.9.0.65466\n\
             dashboardUrl=http://localhost:9000/dashboard?id=org.example%3Ademo\n\
             ceTaskId=AXouyxDpizdp4B1K\n\
             ceTaskUrl=http://localhost:9000/api/ce/task?id=AXouyxDpizdp4B1K\n",
        );

        let handle = ReportTaskReader::new(dir.path()).find_task_handle().unwrap();
        assert_eq!(handle.as_deref(), Some("AXouyxDpizdp4B1K"));
    }

    #[test]
    fn accepts_colon_separator_and_comments() {
        let dir = write_report_task("# written by scanner\n! legacy comment\nceTaskId : T-1\n");

        let handle = ReportTaskReader::new(dir.path()).find_task_handle().unwrap();
        assert_eq!(handle.as_deref(), Some("T-1"));
    }

    #[test]
    fn missing_ce_task_id_is_an_error() {
        let dir = write_report_task("projectKey=demo\nceTaskId=\n");

        let error = ReportTaskReader::new(dir.path()).find_task_handle().unwrap_err();
        assert!(matches!(error, GateError::ReportTask { .. }));
        assert!(error.to_string().contains("Property 'ceTaskId' not found"));
    }
}
