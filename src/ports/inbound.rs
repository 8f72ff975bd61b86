//! Inbound port. UI (adapter) calls into the application.

use crate::domain::SchoolError;

/// Input port: an interactive front end driving the registrar.
pub trait InputPort {
    /// Run until the user quits. Failed actions are reported and the loop continues;
    /// only UI failures end it early.
    fn run(&mut self) -> Result<(), SchoolError>;
}
