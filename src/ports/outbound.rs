//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Report, SchoolError};

/// Report sink. Where listings, details and notices end up (console, JSON, memory).
pub trait ReportSink: Send + Sync {
    fn emit(&self, report: &Report) -> Result<(), SchoolError>;
}
