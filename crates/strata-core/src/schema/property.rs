use super::ClassId;
use crate::{
    stmt::{Type, Value},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    /// The class declaring the property
    pub class: ClassId,

    /// Property name, matched case-sensitively
    pub name: String,

    /// The name of the column in the database
    pub column: String,

    /// Semantic type values are mapped to before being bound
    pub ty: Type,

    /// True if the database assigns the value on insert
    pub auto_increment: bool,
}

impl PropertyDefinition {
    /// Maps `value` onto the property's type.
    pub fn cast(&self, value: &Value) -> Result<Value> {
        self.ty
            .cast(value)
            .ok_or_else(|| Error::invalid_data_type(&self.name, value, &self.ty))
    }
}
