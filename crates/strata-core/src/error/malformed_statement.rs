use super::Error;

/// Error when a structural edit is applied to statement text that lacks the
/// clause the edit needs, e.g. adding a join to text with no FROM clause.
#[derive(Debug, Clone)]
pub(super) struct MalformedStatementError {
    message: Box<str>,
}

impl std::error::Error for MalformedStatementError {}

impl core::fmt::Display for MalformedStatementError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed statement: {}", self.message)
    }
}

impl Error {
    /// Creates a malformed statement error.
    pub fn malformed_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedStatement(
            MalformedStatementError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error it wraps, is a malformed
    /// statement error.
    pub fn is_malformed_statement(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MalformedStatement(_)))
    }
}
