//! Launcher Configuration
//!
//! User-tunable settings, stored as JSON by the frontend. Every field has a
//! default so a partial document is valid.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, LaunchResult};
use crate::models::RunScript;
use crate::status::CorrelationPolicy;

/// Storage key the frontend reads the config document from
pub const CONFIG_STORAGE_KEY: &str = "project-launcher.config";

/// Default terminal buffer capacity in lines
pub const DEFAULT_MAX_LOG_LINES: usize = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Console log level (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Script preselected in a fresh add-project draft
    pub default_script: RunScript,
    pub terminal: TerminalConfig,
    pub status: StatusConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Lines kept per terminal view before the oldest are evicted
    pub max_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub correlation: CorrelationPolicy,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_script: RunScript::Start,
            terminal: TerminalConfig::default(),
            status: StatusConfig::default(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LOG_LINES,
        }
    }
}

impl LauncherConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(raw: &str) -> LaunchResult<Self> {
        let config: LauncherConfig =
            serde_json::from_str(raw).map_err(|e| LaunchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LaunchResult<()> {
        if self.terminal.max_lines == 0 {
            return Err(LaunchError::Config("terminal.max_lines must be at least 1".to_string()));
        }
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| LaunchError::Config(format!("unknown log level '{}'", self.log_level)))?;
        Ok(())
    }

    /// Log level filter, `Info` if the configured name is not recognised
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LauncherConfig::from_json("{}").unwrap();
        assert_eq!(config, LauncherConfig::default());
        assert_eq!(config.terminal.max_lines, DEFAULT_MAX_LOG_LINES);
        assert_eq!(config.status.correlation, CorrelationPolicy::Strict);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_document() {
        let raw = r#"{ "default_script": "dev", "status": { "correlation": "first_match" } }"#;
        let config = LauncherConfig::from_json(raw).unwrap();
        assert_eq!(config.default_script, RunScript::Dev);
        assert_eq!(config.status.correlation, CorrelationPolicy::FirstMatch);
        assert_eq!(config.terminal.max_lines, DEFAULT_MAX_LOG_LINES);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero = r#"{ "terminal": { "max_lines": 0 } }"#;
        assert!(matches!(LauncherConfig::from_json(zero), Err(LaunchError::Config(_))));

        let level = r#"{ "log_level": "loud" }"#;
        assert!(matches!(LauncherConfig::from_json(level), Err(LaunchError::Config(_))));

        assert!(LauncherConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_level_names_case_insensitive() {
        let config = LauncherConfig::from_json(r#"{ "log_level": "DEBUG" }"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }
}
