//! Configuration handling for the contact form

use crate::state::{ValidationSchema, DEFAULT_FIRST_NAME_MIN_LENGTH};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "contact_form_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Minimum number of characters required in the first name
    pub first_name_min_length: Option<usize>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Validation rules derived from this config
    pub fn schema(&self) -> ValidationSchema {
        ValidationSchema {
            first_name_min_length: self
                .first_name_min_length
                .unwrap_or(DEFAULT_FIRST_NAME_MIN_LENGTH),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.first_name_min_length.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_default_schema_uses_five() {
        let schema = FormConfig::default().schema();
        assert_eq!(schema.first_name_min_length, 5);
    }

    #[test]
    fn test_schema_override() {
        let config = FormConfig {
            first_name_min_length: Some(3),
            ..Default::default()
        };
        assert_eq!(config.schema().first_name_min_length, 3);
    }

    #[test]
    fn test_log_filter_fallback() {
        assert_eq!(FormConfig::default().log_filter(), DEFAULT_LOG_FILTER);
        let config = FormConfig {
            log_filter: Some("contact_form_tui=debug".to_string()),
            ..Default::default()
        };
        assert_eq!(config.log_filter(), "contact_form_tui=debug");
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            first_name_min_length: Some(7),
            log_filter: Some("warn".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.first_name_min_length, Some(7));
        assert_eq!(parsed.log_filter, Some("warn".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.first_name_min_length.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"first_name_min_length": 2, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_name_min_length, Some(2));
    }

    #[test]
    fn test_load_returns_ok() {
        // Depends on whether a config file exists; only checks it doesn't error
        let result = FormConfig::load();
        assert!(result.is_ok());
    }
}
