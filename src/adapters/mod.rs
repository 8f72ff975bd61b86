//! Infrastructure adapters. Implement ports.
//!
//! Console sinks, export formats, interactive UI.

pub mod console;
pub mod export;
pub mod ui;
