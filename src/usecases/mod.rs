//! Application use cases. Orchestrate domain logic via ports.

pub mod demo;
pub mod registrar;

pub use demo::run_walkthrough;
pub use registrar::Registrar;
