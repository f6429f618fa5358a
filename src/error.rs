//! Error types for the tools dashboard
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in the dashboard library
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration is present but unusable
    #[error("Config error: {0}")]
    Config(String),

    /// Opening a tool URL outside the dashboard failed
    #[error("Browser error: {0}")]
    Browser(String),

    /// Terminal setup or teardown failed
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
