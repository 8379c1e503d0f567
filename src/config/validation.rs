//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{FabricError, Result};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_gemini_config(&settings.gemini)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate Gemini summarizer configuration
fn validate_gemini_config(config: &super::GeminiConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(FabricError::Config(
            "Gemini API URL is required".to_string(),
        ));
    }

    url::Url::parse(&config.api_url)
        .map_err(|e| FabricError::Config(format!("Invalid Gemini API URL: {}", e)))?;

    if config.model.is_empty() {
        return Err(FabricError::Config(
            "Gemini model name is required".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(FabricError::Config(
            "Gemini timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FabricError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(FabricError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
