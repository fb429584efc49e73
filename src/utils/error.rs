use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// Failure reported by the backend command handler, carried verbatim.
    #[error("Command '{command}' failed: {message}")]
    Command { command: String, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to decode response of '{command}': {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl BridgeError {
    pub fn command(command: &str, message: impl Into<String>) -> Self {
        BridgeError::Command {
            command: command.to_string(),
            message: message.into(),
        }
    }

    /// Backend message when this is a command failure.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            BridgeError::Command { message, .. } => Some(message),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
