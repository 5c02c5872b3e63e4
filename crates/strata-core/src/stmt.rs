//! Values carried by business objects and bound as statement parameters.

mod ty;
pub use ty::Type;

mod ty_chrono;
pub use ty_chrono::{parse_date, parse_date_time};

mod value;
pub use value::Value;
