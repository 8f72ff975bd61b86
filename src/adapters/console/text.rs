//! Implements ReportSink with human-readable lines on stdout.

use crate::domain::{Report, SchoolError};
use crate::ports::ReportSink;
use std::io::Write;

pub struct TextSink;

impl TextSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for TextSink {
    fn emit(&self, report: &Report) -> Result<(), SchoolError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{report}").map_err(|e| SchoolError::Output(format!("stdout: {}", e)))
    }
}
