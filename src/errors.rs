// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Every validation failure carries the name of the offending task or
//! resource. All of them are raised before the first tick is simulated.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("task '{task}' names parent task '{parent}', which does not exist in the task list")]
    UnknownParent { task: String, parent: String },

    #[error("resource '{resource}' has an invalid core count: {reason}")]
    InvalidResourceSpec { resource: String, reason: String },

    #[error("circular dependency detected between tasks, involving task '{task}'")]
    CircularDependency { task: String },

    #[error("task '{task}' requires {cores_required} cores, no resource can handle that requirement")]
    UnschedulableTask { task: String, cores_required: u32 },

    #[error("task '{task}' is invalid: {reason}")]
    InvalidTaskSpec { task: String, reason: String },

    #[error("task '{0}' is defined more than once")]
    DuplicateTask(String),

    #[error("resource '{0}' is defined more than once")]
    DuplicateResource(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SchedError>;
