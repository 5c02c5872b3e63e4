use super::{StatementBuilder, ToSql};

use strata_core::stmt::{Type, Value};

/// A bound parameter: the value and the type it is bound as.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub ty: Type,
}

/// Zero-based position of a parameter within its statement.
pub struct Placeholder(pub usize);

/// A value to bind at the current position.
pub struct Param(pub TypedValue);

impl TypedValue {
    pub fn new(value: Value, ty: Type) -> TypedValue {
        TypedValue { value, ty }
    }

    /// A value typed by what it holds.
    pub fn inferred(value: Value) -> TypedValue {
        let ty = value.infer_ty();
        TypedValue { value, ty }
    }
}

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut StatementBuilder<'_>) {
        let placeholder = f.capability.placeholder(self.0);
        f.sql.push_str(&placeholder);
    }
}

impl ToSql for Param {
    fn to_sql(self, f: &mut StatementBuilder<'_>) {
        f.params.push(self.0);
        Placeholder(f.params.len() - 1).to_sql(f);
    }
}
