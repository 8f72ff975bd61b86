//! Implements ReportSink as JSON lines on stdout. One report per line, tagged by `kind`.

use crate::domain::{Report, SchoolError};
use crate::ports::ReportSink;
use std::io::Write;

pub struct JsonSink;

impl JsonSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a single report to one line of JSON.
pub fn report_to_json_line(report: &Report) -> Result<String, SchoolError> {
    serde_json::to_string(report).map_err(|e| SchoolError::Output(e.to_string()))
}

impl ReportSink for JsonSink {
    fn emit(&self, report: &Report) -> Result<(), SchoolError> {
        let line = report_to_json_line(report)?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}").map_err(|e| SchoolError::Output(format!("stdout: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Notice;
    use crate::domain::reports::CgpaLine;

    #[test]
    fn test_notice_line() {
        let report = Report::Notice(Notice::AlreadyEnrolled {
            student: "Alice".into(),
            course: "Mathematics".into(),
        });
        let line = report_to_json_line(&report).unwrap();
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["kind"], "notice");
        assert_eq!(v["notice"], "already_enrolled");
        assert_eq!(v["student"], "Alice");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_cgpa_line() {
        let report = Report::Cgpa(CgpaLine {
            student: "Bob".into(),
            cgpa: 3.0,
        });
        let v: serde_json::Value =
            serde_json::from_str(&report_to_json_line(&report).unwrap()).unwrap();
        assert_eq!(v["kind"], "cgpa");
        assert_eq!(v["cgpa"], 3.0);
    }
}
