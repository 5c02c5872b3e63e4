use super::Error;

/// Error when the class catalog is malformed.
///
/// This occurs when:
/// - A superclass chain contains a cycle
/// - A class names a superclass that does not exist
/// - Class or property names are duplicated
/// - A hierarchy has no primary key, or the key names an unknown property
///
/// These errors surface when the catalog is built or a hierarchy is resolved
/// and are never retried.
#[derive(Debug, Clone)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a configuration
    /// error.
    pub fn is_configuration(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Configuration(_)))
    }
}
