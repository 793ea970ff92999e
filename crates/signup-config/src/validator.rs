//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn accumulated errors into a single [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.is_valid() {
            return Ok(self.warnings);
        }
        let message = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(ConfigError::Invalid(message))
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_logging(config, &mut result);
        Self::validate_activities(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new(
                "server.host",
                "Host cannot be empty",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_lowercase();
        // Full filter directives like "signup_api=debug" are passed through.
        if !level.contains('=') && !LOG_LEVELS.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }

        if config.logging.file && config.logging.dir.is_empty() {
            result.add_error(ValidationError::new(
                "logging.dir",
                "Log directory cannot be empty when file logging is enabled",
            ));
        }
    }

    fn validate_activities(config: &Config, result: &mut ValidationResult) {
        let mut names = HashSet::new();

        for (i, activity) in config.activities.iter().enumerate() {
            let path = format!("activities[{}]", i);

            if activity.name.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("{}.name", path),
                    "Activity name cannot be empty",
                ));
            } else if !names.insert(activity.name.as_str()) {
                result.add_error(ValidationError::new(
                    format!("{}.name", path),
                    format!("Duplicate activity '{}'", activity.name),
                ));
            }

            if activity.max_participants == 0 {
                result.add_error(ValidationError::new(
                    format!("{}.max_participants", path),
                    "max_participants must be greater than 0",
                ));
            }

            let mut seen = HashSet::new();
            for email in &activity.participants {
                if !seen.insert(email.as_str()) {
                    result.add_error(ValidationError::new(
                        format!("{}.participants", path),
                        format!("Participant '{}' listed more than once", email),
                    ));
                }
            }

            // Capacity is advisory only.
            if activity.participants.len() > activity.max_participants as usize {
                result.add_warning(ValidationWarning::new(
                    format!("{}.participants", path),
                    format!(
                        "'{}' has {} participants but max_participants is {}",
                        activity.name,
                        activity.participants.len(),
                        activity.max_participants
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
