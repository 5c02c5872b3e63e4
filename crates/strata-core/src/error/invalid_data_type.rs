use super::Error;
use crate::stmt::{Type, Value};

/// Error when a property value cannot be mapped to the property's type.
#[derive(Debug, Clone)]
pub(super) struct InvalidDataTypeError {
    property: Box<str>,
    value: Value,
    ty: Type,
}

impl std::error::Error for InvalidDataTypeError {}

impl core::fmt::Display for InvalidDataTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid data type: property `{}` cannot hold {:?} as {:?}",
            self.property, self.value, self.ty
        )
    }
}

impl Error {
    /// Creates an invalid data type error for `value` assigned to `property`.
    pub fn invalid_data_type(property: &str, value: &Value, ty: &Type) -> Error {
        Error::from(super::ErrorKind::InvalidDataType(InvalidDataTypeError {
            property: property.into(),
            value: value.clone(),
            ty: *ty,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid data
    /// type error.
    pub fn is_invalid_data_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidDataType(_)))
    }
}
