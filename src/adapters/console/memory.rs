//! In-memory ReportSink for tests and embedding.
//!
//! Collects reports instead of printing them.

use crate::domain::{Report, SchoolError};
use crate::ports::ReportSink;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Report>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything emitted so far.
    pub fn take(&self) -> Vec<Report> {
        match self.reports.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, report: &Report) -> Result<(), SchoolError> {
        self.reports
            .lock()
            .map_err(|e| SchoolError::Output(e.to_string()))?
            .push(report.clone());
        Ok(())
    }
}
