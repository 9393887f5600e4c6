use thiserror::Error;

/// Errors from environment-based application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors from persisting the customization document.
#[derive(Debug, Error)]
pub enum CustomizationError {
    #[error("failed to write customization file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize customization: {0}")]
    Serialize(#[source] serde_json::Error),
}
