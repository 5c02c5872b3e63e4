//! The class catalog: class definitions, their inheritance links, and the
//! resolution of properties onto physical tables.

mod builder;
pub use builder::Builder;

mod catalog;
pub use catalog::Catalog;

mod class;
pub use class::{ClassDefinition, ClassId, SuperClass};

mod def;
pub use def::{ClassDef, PropertyDef, SuperClassDef};

mod hierarchy;
pub use hierarchy::{Hierarchy, TableLayer};

mod inheritance;
pub use inheritance::Inheritance;

mod pk;
pub use pk::PrimaryKey;

mod property;
pub use property::PropertyDefinition;

mod verify;
