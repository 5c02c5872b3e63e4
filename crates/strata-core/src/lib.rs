pub mod driver;
pub use driver::Capability;

mod error;
pub use error::{Error, IntoError};

pub mod object;
pub use object::BusinessObject;

pub mod schema;
pub use schema::Catalog;

pub mod stmt;

/// A Result type alias that uses Strata's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
