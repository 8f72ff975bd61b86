//! Application configuration. Course defaults, output format, removal policy.

use crate::domain::{DEFAULT_COURSE_CAPACITY, RemovalPolicy};
use serde::Deserialize;

/// How reports reach stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per report.
    Json,
    /// Text reports, then the gradebook as semicolon-delimited CSV.
    Csv,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Capacity for courses created without one. Read from SCHOOL_DEFAULT_CAPACITY.
    #[serde(default)]
    pub default_capacity: Option<usize>,

    /// `text`, `json` or `csv`. Read from SCHOOL_OUTPUT_FORMAT.
    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    /// `cascade` or `registry_only`. Read from SCHOOL_REMOVAL_POLICY.
    #[serde(default)]
    pub removal_policy: Option<RemovalPolicy>,

    /// Run the scripted walkthrough on startup (default true). Read from SCHOOL_RUN_DEMO.
    #[serde(default)]
    pub run_demo: Option<bool>,

    /// Open the interactive menu after the walkthrough. Read from SCHOOL_INTERACTIVE.
    #[serde(default)]
    pub interactive: Option<bool>,

    /// Print the welcome banner. Defaults to the value of `interactive`. Read from SCHOOL_BANNER.
    #[serde(default)]
    pub banner: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("SCHOOL").try_parsing(true));
        if let Ok(path) = std::env::var("SCHOOL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns course capacity. Defaults to DEFAULT_COURSE_CAPACITY (30) if unset.
    pub fn default_capacity_or_default(&self) -> usize {
        self.default_capacity.unwrap_or(DEFAULT_COURSE_CAPACITY)
    }

    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    pub fn removal_policy_or_default(&self) -> RemovalPolicy {
        self.removal_policy.unwrap_or_default()
    }

    pub fn run_demo_or_default(&self) -> bool {
        self.run_demo.unwrap_or(true)
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive.unwrap_or(false)
    }

    pub fn show_banner(&self) -> bool {
        self.banner.unwrap_or_else(|| self.is_interactive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.default_capacity_or_default(), 30);
        assert_eq!(cfg.output_format_or_default(), OutputFormat::Text);
        assert_eq!(cfg.removal_policy_or_default(), RemovalPolicy::Cascade);
        assert!(cfg.run_demo_or_default());
        assert!(!cfg.is_interactive());
        assert!(!cfg.show_banner());
    }

    #[test]
    fn test_banner_follows_interactive() {
        let cfg = AppConfig {
            interactive: Some(true),
            ..AppConfig::default()
        };
        assert!(cfg.show_banner());
        let cfg = AppConfig {
            interactive: Some(true),
            banner: Some(false),
            ..AppConfig::default()
        };
        assert!(!cfg.show_banner());
    }

    #[test]
    fn test_deserialize_from_source() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("default_capacity", 12)
            .unwrap()
            .set_override("output_format", "json")
            .unwrap()
            .set_override("removal_policy", "registry_only")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.default_capacity_or_default(), 12);
        assert_eq!(cfg.output_format_or_default(), OutputFormat::Json);
        assert_eq!(cfg.removal_policy_or_default(), RemovalPolicy::RegistryOnly);
    }
}
