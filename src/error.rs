// Error types shared across layers
use thiserror::Error;

/// Failure of a single upstream request. Always isolated to its own task.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {status} (URL: {url})")]
    Status { status: u16, url: String },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Could not parse response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }

    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("updateInterval for {unique_id} must be a positive number of milliseconds")]
    InvalidUpdateInterval { unique_id: String },

    #[error("Unknown notification: {0}")]
    UnknownCommand(String),

    #[error("Malformed payload for {command}: {message}")]
    MalformedPayload { command: String, message: String },
}
