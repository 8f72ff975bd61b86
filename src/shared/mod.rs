//! Cross-cutting concerns shared by every layer.

pub mod config;

pub use config::{AppConfig, OutputFormat};
