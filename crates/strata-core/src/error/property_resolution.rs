use super::Error;

/// Error when a property cannot be found anywhere in a class hierarchy.
#[derive(Debug, Clone)]
pub(super) struct PropertyResolutionError {
    property: Box<str>,
    class: Box<str>,
}

impl std::error::Error for PropertyResolutionError {}

impl core::fmt::Display for PropertyResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "property `{}` not found in the hierarchy of class `{}`",
            self.property, self.class
        )
    }
}

impl Error {
    /// Creates a property resolution error for `property` looked up from
    /// `class`.
    pub fn property_resolution(property: &str, class: &str) -> Error {
        Error::from(super::ErrorKind::PropertyResolution(
            PropertyResolutionError {
                property: property.into(),
                class: class.into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error it wraps, is a property
    /// resolution error.
    pub fn is_property_resolution(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::PropertyResolution(_)))
    }
}
