//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use signup_core::{default_activities, Activity};

use crate::loader::ConfigLoader;

fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed activities. Empty means the built-in set.
    #[serde(default)]
    pub activities: Vec<ActivityConfig>,
}

impl Config {
    /// Activities the registry should be seeded with, in declaration order.
    pub fn seed(&self) -> Vec<(String, Activity)> {
        if self.activities.is_empty() {
            return default_activities();
        }
        self.activities
            .iter()
            .map(|a| (a.name.clone(), a.to_activity()))
            .collect()
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files. Supports `~`.
    #[serde(default = "default_log_dir")]
    pub dir: String,

    /// Whether to write log files at all.
    #[serde(default = "default_true")]
    pub file: bool,
}

impl LoggingConfig {
    /// Log directory with `~` expanded.
    pub fn resolved_dir(&self) -> PathBuf {
        PathBuf::from(ConfigLoader::expand_path(&self.dir))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: default_log_dir(),
            file: default_true(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    dirs::home_dir()
        .map(|h| h.join(".signup").join("logs").display().to_string())
        .unwrap_or_else(|| ".signup/logs".to_string())
}

/// A configured seed activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub schedule: String,

    pub max_participants: u32,

    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityConfig {
    pub fn to_activity(&self) -> Activity {
        Activity::new(
            self.description.clone(),
            self.schedule.clone(),
            self.max_participants,
        )
        .with_participants(self.participants.iter().cloned())
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
