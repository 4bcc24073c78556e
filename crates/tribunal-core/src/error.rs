//! Error types for the tribunal dashboard

use std::{error::Error as StdError, fmt};

/// Main error type for the tribunal dashboard
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Dispute fetch failed
    Fetch {
        /// Failure description
        message: String,
    },

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Fetch { message } => write!(f, "Dispute fetch failed: {message}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "api.base_url is not a valid URL".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Configuration error: api.base_url is not a valid URL"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_fetch_error() {
        let error = Error::Fetch {
            message: "backend reported success=false".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Dispute fetch failed: backend reported success=false"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_error = Error::from(json_error);

        assert!(matches!(app_error, Error::Serialization(_)));
        assert!(format!("{}", app_error).starts_with("Serialization error"));
        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let config_error = config::ConfigError::Message("bad value".to_string());
        let app_error = Error::from(config_error);

        match app_error {
            Error::Configuration { message } => assert!(message.contains("bad value")),
            other => panic!("Expected Configuration variant, got {other:?}"),
        }
    }

    #[test]
    fn test_other_error() {
        let error = Error::Other("unexpected".to_string());
        assert_eq!(format!("{}", error), "unexpected");
    }
}
