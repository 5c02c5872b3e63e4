use super::Inheritance;
use crate::stmt::Type;
use serde::{Deserialize, Serialize};

/// Declaration of a class, as supplied by configuration.
///
/// Declarations reference each other by name; [`Builder`](super::Builder)
/// compiles them into a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,

    /// Table name, defaults to the class name
    #[serde(default)]
    pub table: Option<String>,

    #[serde(default)]
    pub properties: Vec<PropertyDef>,

    /// Ordered primary key property names. Empty inherits the superclass key.
    #[serde(default)]
    pub primary_key: Vec<String>,

    #[serde(default)]
    pub super_class: Option<SuperClassDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub name: String,

    /// Column name, defaults to the property name
    #[serde(default)]
    pub column: Option<String>,

    #[serde(default, rename = "type")]
    pub ty: Type,

    #[serde(default)]
    pub auto_increment: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperClassDef {
    /// Name of the superclass
    pub class: String,

    pub inheritance: Inheritance,

    #[serde(default)]
    pub discriminator: Option<String>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn primary_key<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn extends(mut self, class: impl Into<String>, inheritance: Inheritance) -> Self {
        self.super_class = Some(SuperClassDef {
            class: class.into(),
            inheritance,
            discriminator: None,
        });
        self
    }

    /// Sets the discriminator column of the superclass link. Has no effect
    /// before [`ClassDef::extends`].
    pub fn discriminator(mut self, column: impl Into<String>) -> Self {
        if let Some(link) = &mut self.super_class {
            link.discriminator = Some(column.into());
        }
        self
    }
}

impl PropertyDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn ty(mut self, ty: Type) -> Self {
        self.ty = ty;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }
}
