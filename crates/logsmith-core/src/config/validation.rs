//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_range(config)?;
    validate_templates(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_range(config: &Config) -> Result<()> {
    if config.to.trim().is_empty() {
        return Err(invalid("to", "end reference cannot be empty"));
    }

    if config.from.as_deref().is_some_and(|f| f.trim().is_empty()) {
        return Err(invalid("from", "start reference cannot be empty"));
    }

    if config.version_prefix.chars().any(char::is_whitespace) {
        return Err(invalid(
            "version_prefix",
            "version prefix cannot contain whitespace",
        ));
    }

    Ok(())
}

fn validate_templates(config: &Config) -> Result<()> {
    let templates = &config.templates;

    if !templates.group_format.contains("{{title}}") {
        return Err(invalid(
            "templates.group_format",
            "must contain {{title}} placeholder",
        ));
    }

    if !templates.date_format.contains("{{date}}") {
        return Err(invalid(
            "templates.date_format",
            "must contain {{date}} placeholder",
        ));
    }

    if templates.commit_format.trim().is_empty() {
        return Err(invalid("templates.commit_format", "template cannot be empty"));
    }

    if templates.breaking_change_format.trim().is_empty() {
        return Err(invalid(
            "templates.breaking_change_format",
            "template cannot be empty",
        ));
    }

    Ok(())
}

fn invalid(field: &str, message: &str) -> crate::error::LogsmithError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}
