use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// A system info check failed (headless mode only; the panel renders these as a row)
    #[error(transparent)]
    Check(#[from] CheckError),

    /// The HTTP client could not be constructed
    #[error("HTTP client setup failed: {message}")]
    Client { message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/display error
    #[error("Display error: {message}")]
    Display { message: String },
}

impl AppError {
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    pub fn display(message: impl Into<String>) -> Self {
        Self::Display {
            message: message.into(),
        }
    }
}

/// Why a single `/sysinfo/check` request failed.
///
/// Every variant degrades the panel the same way: one error row, no data rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The request could not be sent or no response arrived
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("Status {0}")]
    Status(u16),

    /// The response body was not a JSON object
    #[error("malformed response: {0}")]
    Parse(String),
}

impl CheckError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code() {
        assert_eq!(CheckError::Status(503).to_string(), "Status 503");
    }

    #[test]
    fn check_error_converts_into_app_error() {
        let err: AppError = CheckError::transport("connection refused").into();
        assert!(matches!(err, AppError::Check(CheckError::Transport(_))));
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
