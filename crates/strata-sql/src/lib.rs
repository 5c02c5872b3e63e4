//! SQL statement generation for business objects mapped through class-table,
//! single-table and concrete-table inheritance.

#[macro_use]
pub mod serializer;
pub use serializer::{JoinType, StatementBuilder, TypedValue};

pub mod generate;
pub use generate::Generator;

pub mod statement;
pub use statement::{AutoIncrement, Statement, StatementKind};
