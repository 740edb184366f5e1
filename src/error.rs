//! Error types for the payment API SDK
//!
//! Every fallible operation in this crate returns [`Result`], whose error side is
//! [`ApiError`]. Errors are raised synchronously at the point of construction or
//! parsing; only [`Session`](crate::net::Session) implementations may surface
//! transport failures later.

use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced while building, validating or (de)serializing API objects
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// A field was present but its value is not acceptable
    #[error("Invalid value for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// Fields are individually valid but contradict each other
    #[error("Inconsistent {model}: {message}")]
    Inconsistent {
        model: &'static str,
        message: String,
    },

    /// A request was constructed with an unacceptable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A wire code did not match any known tag
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: String },

    /// JSON could not be turned into a model
    #[error("Failed to parse {target}: {source}")]
    Parse {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// A model could not be written as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Host or client configuration is unusable
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A request URL could not be parsed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// An `http::Request` could not be assembled
    #[error("HTTP request error: {0}")]
    Http(#[from] http::Error),

    /// Reported by session implementations when the call itself failed
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Create a missing field error
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Create a cross-field consistency error
    pub fn inconsistent(model: &'static str, message: impl Into<String>) -> Self {
        Self::Inconsistent {
            model,
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an unknown code error
    pub fn unknown_code(kind: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownCode {
            kind,
            code: code.into(),
        }
    }

    /// Create a parse error for the given target type
    pub fn parse(target: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            target: target.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Whether this error was raised while validating input at construction time
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidField { .. }
                | Self::Inconsistent { .. }
                | Self::InvalidArgument(_)
        )
    }

    /// Whether this error came from parsing wire JSON
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Fail with [`ApiError::MissingField`] when `value` is empty
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ApiError::missing_field(field));
    }
    Ok(())
}

/// Unwrap a required optional, failing with [`ApiError::MissingField`]
pub(crate) fn require<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(ApiError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::missing_field("url").to_string(),
            "Missing required field: url"
        );
        assert_eq!(
            ApiError::inconsistent("ProcessPayment", "payment_id is missing").to_string(),
            "Inconsistent ProcessPayment: payment_id is missing"
        );
        assert_eq!(
            ApiError::unknown_code("test result", "nope").to_string(),
            "Unknown test result code: nope"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(ApiError::missing_field("url").is_validation());
        assert!(ApiError::invalid_argument("request_id is empty").is_validation());
        assert!(!ApiError::config("bad host").is_validation());

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::parse("Avatar", source);
        assert!(err.is_parse());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_non_empty("url", "https://example.com").is_ok());
        assert!(matches!(
            require_non_empty("url", ""),
            Err(ApiError::MissingField { field: "url" })
        ));
        assert_eq!(require("status", Some(1)).unwrap(), 1);
        assert!(matches!(
            require::<u8>("status", None),
            Err(ApiError::MissingField { field: "status" })
        ));
    }
}
