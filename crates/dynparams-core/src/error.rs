//! Error types for parameter lookup and value coercion
//!
//! Backends never produce errors for a missing key; they return `None`.
//! `NotFound` is raised by the facades once a typed accessor is asked for a
//! key that is not there.

use thiserror::Error;

/// Errors that can occur when reading, coercing, or constructing parameters
#[derive(Error, Debug)]
pub enum ParamsError {
    /// The requested key is not present in the backing source
    #[error("Key not found: {key}")]
    NotFound { key: String },

    /// The stored value cannot be represented as the requested type
    #[error("Conversion failed: expected {expected}, found {found}")]
    ConversionFailed {
        expected: &'static str,
        found: &'static str,
    },

    /// A numeric string was zero-padded (this includes the literal "0")
    #[error("Numeric string starts with zero: {0:?}")]
    LeadingZero(String),

    /// A digit-only string did not fit the target integer
    #[error("Integer parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// The pattern passed to a scan did not compile
    #[error("Invalid scan pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// No source is registered under this name
    #[error("Unknown source: {0}")]
    UnknownSource(String),

    /// A source that needs construction input was built without it
    #[error("Source {0} requires an argument list")]
    MissingSourceArgs(&'static str),

    /// Construction input was present but had the wrong shape
    #[error("Invalid source input: {0}")]
    InvalidSourceInput(String),

    /// A writer panicked while holding the shared lock
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type for parameter operations
pub type ParamsResult<T> = Result<T, ParamsError>;

impl ParamsError {
    /// Create a conversion error between two type names
    pub fn conversion(expected: &'static str, found: &'static str) -> Self {
        ParamsError::ConversionFailed { expected, found }
    }

    /// Create a not-found error for a key
    pub fn not_found(key: impl Into<String>) -> Self {
        ParamsError::NotFound { key: key.into() }
    }

    /// Check if the key was simply absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParamsError::NotFound { .. })
    }

    /// Check if the value was present but of the wrong shape
    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            ParamsError::ConversionFailed { .. }
                | ParamsError::LeadingZero(_)
                | ParamsError::ParseInt(_)
        )
    }

    /// Check if this error reports a programming mistake in how a source
    /// was constructed, rather than a condition of the stored data
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            ParamsError::UnknownSource(_)
                | ParamsError::MissingSourceArgs(_)
                | ParamsError::InvalidSourceInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ParamsError::not_found("db-host");
        assert!(err.to_string().contains("db-host"));
        assert!(err.is_not_found());
        assert!(!err.is_conversion());
    }

    #[test]
    fn test_conversion_display() {
        let err = ParamsError::conversion("int32", "string");
        assert_eq!(err.to_string(), "Conversion failed: expected int32, found string");
        assert!(err.is_conversion());
    }

    #[test]
    fn test_parse_int_is_conversion() {
        let parse_err = "99999999999999999999".parse::<i64>().unwrap_err();
        let err: ParamsError = parse_err.into();
        assert!(err.is_conversion());
    }

    #[test]
    fn test_misuse_classification() {
        assert!(ParamsError::UnknownSource("source.file".into()).is_misuse());
        assert!(ParamsError::MissingSourceArgs("source.args").is_misuse());
        assert!(ParamsError::InvalidSourceInput("int".into()).is_misuse());
        assert!(!ParamsError::not_found("k").is_misuse());
        assert!(!ParamsError::LockPoisoned("x".into()).is_misuse());
    }
}
