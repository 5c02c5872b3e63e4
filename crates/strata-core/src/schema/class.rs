use super::{Inheritance, PrimaryKey, PropertyDefinition};
use std::fmt;

/// A mapped class.
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    /// Uniquely identifies the class within the catalog
    pub id: ClassId,

    /// Name of the class
    pub name: String,

    /// Name of the table declared for the class. Under single-table
    /// inheritance the physical table is the one of the run's root.
    pub table_name: String,

    /// Properties declared by this class, excluding inherited ones
    pub properties: Vec<PropertyDefinition>,

    /// Primary key declared by this class. `None` inherits the nearest
    /// ancestor's key.
    pub primary_key: Option<PrimaryKey>,

    /// Link to the superclass
    pub super_class: Option<SuperClass>,
}

/// The link from a class to its superclass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperClass {
    pub class: ClassId,

    pub inheritance: Inheritance,

    /// Column recording the concrete class name of a row stored in a shared
    /// single-table run.
    pub discriminator: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub usize);

impl ClassDefinition {
    /// Own property named `name`, inherited properties are not searched.
    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Strategy of the link to the superclass, `None` for a root class.
    pub fn inheritance(&self) -> Option<Inheritance> {
        self.super_class.as_ref().map(|link| link.inheritance)
    }

    pub fn super_class_id(&self) -> Option<ClassId> {
        self.super_class.as_ref().map(|link| link.class)
    }

    pub fn discriminator(&self) -> Option<&str> {
        self.super_class
            .as_ref()
            .and_then(|link| link.discriminator.as_deref())
    }
}

impl From<&ClassDefinition> for ClassId {
    fn from(value: &ClassDefinition) -> Self {
        value.id
    }
}

impl From<&Self> for ClassId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ClassId({})", self.0)
    }
}
