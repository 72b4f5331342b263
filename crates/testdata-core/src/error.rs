//! Error types shared by every test data crate.

use crate::category::FieldKind;

/// Result alias using the core [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an error, used by the session to decide
/// how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad operator input: count, category name, ranges.
    Validation,
    /// Bad settings: empty pools, malformed custom schema, invalid policies.
    Configuration,
    /// Filesystem failures.
    Io,
}

/// Error type for generation and configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Record count was zero or negative
    #[error("Invalid record count {0}: count must be greater than zero")]
    InvalidCount(i64),

    /// Category name did not match any known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Locale name was neither `ru` nor `en`
    #[error("Unknown locale '{0}': expected ru or en")]
    UnknownLocale(String),

    /// A min/max or start/end pair is out of order or out of domain
    #[error("Invalid {what} range: {detail}")]
    InvalidRange { what: &'static str, detail: String },

    /// A value could not be coerced to the expected kind
    #[error("Cannot read '{value}' as {kind}")]
    InvalidValue { value: String, kind: FieldKind },

    /// A record's field set differs from the dataset's field set
    #[error("Record field set {found:?} does not match expected {expected:?}")]
    FieldSetMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A value pool needed for generation has no entries
    #[error("Value pool '{0}' is empty")]
    EmptyPool(String),

    /// Custom schema is missing or malformed
    #[error("Invalid custom schema: {0}")]
    InvalidCustomSchema(String),

    /// Password policy cannot be satisfied
    #[error("Invalid password policy: {0}")]
    InvalidPasswordPolicy(String),

    /// Phone pattern has no digit placeholders
    #[error("Invalid phone pattern '{0}': expected at least one '#' digit placeholder")]
    InvalidPhonePattern(String),

    /// Error parsing YAML settings or schema
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error reading a settings or schema file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCount(_)
            | Error::UnknownCategory(_)
            | Error::UnknownLocale(_)
            | Error::InvalidRange { .. }
            | Error::InvalidValue { .. }
            | Error::FieldSetMismatch { .. } => ErrorKind::Validation,
            Error::EmptyPool(_)
            | Error::InvalidCustomSchema(_)
            | Error::InvalidPasswordPolicy(_)
            | Error::InvalidPhonePattern(_)
            | Error::Yaml(_) => ErrorKind::Configuration,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn range(what: &'static str, detail: impl Into<String>) -> Self {
        Error::InvalidRange {
            what,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::InvalidCount(0).kind(), ErrorKind::Validation);
        assert_eq!(
            Error::UnknownCategory("robots".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Error::EmptyPool("first_names".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            Error::Io(std::io::Error::other("disk full")).kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidCount(-3).to_string(),
            "Invalid record count -3: count must be greater than zero"
        );
        assert_eq!(
            Error::range("price", "min 20.00 is greater than max 10.00").to_string(),
            "Invalid price range: min 20.00 is greater than max 10.00"
        );
    }
}
