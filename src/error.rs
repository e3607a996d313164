// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The backend answered with a non-success status.
    Http { status: u16, reason: String },
    /// The request never produced a response (DNS, refused connection, ...).
    Network(String),
    /// The response body did not match the picture record schema.
    Parse(String),
    Preferences(String),
}

impl Error {
    /// Builds an HTTP error from a status code, using the canonical reason
    /// phrase when the code has one.
    pub fn from_status(status: u16) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .map_or_else(|| status.to_string(), str::to_string);
        Error::Http { status, reason }
    }

    /// Returns the inline message shown next to a failed fetch.
    ///
    /// HTTP failures mirror the backend's status text; transport failures
    /// carry the underlying error text verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Error::Http { reason, .. } => format!("Failed to fetch: {reason}"),
            Error::Network(msg) | Error::Parse(msg) | Error::Io(msg) => msg.clone(),
            Error::Config(msg) | Error::Preferences(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http { status, reason } => write!(f, "HTTP Error: {} {}", status, reason),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Preferences(e) => write!(f, "Preferences Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::from_status(status.as_u16()),
            None => Error::Network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn http_error_uses_canonical_reason() {
        let err = Error::from_status(404);
        assert_eq!(
            err,
            Error::Http {
                status: 404,
                reason: "Not Found".into()
            }
        );
        assert_eq!(err.user_message(), "Failed to fetch: Not Found");
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let err = Error::from_status(599);
        assert_eq!(err.user_message(), "Failed to fetch: 599");
    }

    #[test]
    fn network_error_message_is_verbatim() {
        let err = Error::Network("connection refused".into());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn json_error_becomes_parse_variant() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
