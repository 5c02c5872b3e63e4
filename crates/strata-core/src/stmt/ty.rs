use super::{parse_date, parse_date_time, Value};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The semantic type of a property.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    #[default]
    String,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Double precision float
    F64,

    /// UUID
    Uuid,

    /// Calendar date
    Date,

    /// Date and time
    DateTime,

    /// The type of a null value; only null casts to it.
    Null,
}

impl Type {
    /// Maps `value` onto this type, using the current local time for the
    /// `TODAY` / `NOW` sentinels. Returns `None` when the value cannot be
    /// represented.
    pub fn cast(&self, value: &Value) -> Option<Value> {
        self.cast_at(value, Local::now().naive_local())
    }

    /// Same as [`Type::cast`] with an explicit reference time.
    pub fn cast_at(&self, value: &Value, now: NaiveDateTime) -> Option<Value> {
        // Null values are passed through
        if value.is_null() {
            return Some(Value::Null);
        }

        if value.infer_ty() == *self {
            return Some(value.clone());
        }

        Some(match (value, self) {
            (Value::String(s), Type::Bool) => match s.trim() {
                s if s.eq_ignore_ascii_case("true") || s == "1" => Value::Bool(true),
                s if s.eq_ignore_ascii_case("false") || s == "0" => Value::Bool(false),
                _ => return None,
            },

            (Value::I64(v), Type::I32) => Value::I32(i32::try_from(*v).ok()?),
            (Value::String(s), Type::I32) => Value::I32(s.trim().parse().ok()?),

            (Value::I32(v), Type::I64) => Value::I64(i64::from(*v)),
            (Value::String(s), Type::I64) => Value::I64(s.trim().parse().ok()?),

            (Value::I32(v), Type::F64) => Value::F64(f64::from(*v)),
            (Value::I64(v), Type::F64) => Value::F64(*v as f64),
            (Value::String(s), Type::F64) => Value::F64(s.trim().parse().ok()?),

            (Value::String(s), Type::Uuid) => Value::Uuid(s.trim().parse().ok()?),

            (Value::DateTime(v), Type::Date) => Value::Date(v.date()),
            (Value::String(s), Type::Date) => Value::Date(parse_date(s, now)?),

            (Value::Date(v), Type::DateTime) => Value::DateTime(v.and_hms_opt(0, 0, 0)?),
            (Value::String(s), Type::DateTime) => Value::DateTime(parse_date_time(s, now)?),

            (value, Type::String) => Value::String(match value {
                Value::Bool(v) => v.to_string(),
                Value::I32(v) => v.to_string(),
                Value::I64(v) => v.to_string(),
                Value::F64(v) => v.to_string(),
                Value::Uuid(v) => v.to_string(),
                Value::Date(v) => v.format("%Y-%m-%d").to_string(),
                Value::DateTime(v) => v.format("%Y-%m-%d %H:%M:%S").to_string(),
                Value::Null | Value::String(_) => return None,
            }),

            _ => return None,
        })
    }
}
