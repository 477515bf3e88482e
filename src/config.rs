//! App Configuration
//!
//! Title, log level and seed tasks, read from JSON embedded at build time.

use std::collections::HashSet;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::models::Task;

/// Bundled configuration
pub const BUNDLED_CONFIG: &str = include_str!("../todomatic.json");

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate seed task id: {0}")]
    DuplicateTaskId(String),
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub log_level: LevelFilter,
    pub tasks: Vec<Task>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    title: String,
    log_level: String,
    tasks: Vec<Task>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            title: "TodoMatic".to_string(),
            log_level: "info".to_string(),
            tasks: default_tasks(),
        }
    }
}

fn default_tasks() -> Vec<Task> {
    vec![
        Task::new("todo-0", "Eat", true),
        Task::new("todo-1", "Sleep", false),
        Task::new("todo-2", "Repeat", false),
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "TodoMatic".to_string(),
            log_level: LevelFilter::Info,
            tasks: default_tasks(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON document. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let log_level = LevelFilter::from_str(&raw.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(raw.log_level.clone()))?;

        let mut seen = HashSet::new();
        if let Some(dup) = raw.tasks.iter().find(|t| !seen.insert(t.id.as_str())) {
            return Err(ConfigError::DuplicateTaskId(dup.id.clone()));
        }

        Ok(Self {
            title: raw.title,
            log_level,
            tasks: raw.tasks,
        })
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_CONFIG)
    }
}
