// src/infra/errors.rs — Error types for Academic Tracker

use thiserror::Error;

use crate::backend::Endpoint;

#[derive(Error, Debug)]
pub enum TrackerError {
    // Load errors (all collapse into the dashboard's single banner)
    #[error("Request to {endpoint} failed: {message}")]
    Http { endpoint: Endpoint, message: String },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("{endpoint} returned invalid JSON: {message}")]
    Decode { endpoint: Endpoint, message: String },

    // Setup errors
    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    /// The endpoint a load error came from, if any.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            TrackerError::Http { endpoint, .. }
            | TrackerError::Status { endpoint, .. }
            | TrackerError::Decode { endpoint, .. } => Some(*endpoint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let e = TrackerError::Status {
            endpoint: Endpoint::Marks,
            status: 502,
        };
        assert_eq!(e.to_string(), "/marks returned HTTP 502");
        assert_eq!(e.endpoint(), Some(Endpoint::Marks));
    }

    #[test]
    fn test_setup_errors_have_no_endpoint() {
        let e = TrackerError::InvalidBaseUrl("nope".into());
        assert!(e.endpoint().is_none());
        assert_eq!(e.to_string(), "Invalid backend URL: nope");
    }
}
