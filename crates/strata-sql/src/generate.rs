//! Statement generators: one SELECT per object, and one INSERT, UPDATE or
//! DELETE per physical table an object is stored in.

mod delete;
mod insert;
mod select;
mod update;

use crate::{serializer::Param, StatementBuilder, TypedValue};
use strata_core::{
    object::PropertyValue,
    schema::{Hierarchy, PropertyDefinition, TableLayer},
    stmt::{Type, Value},
    BusinessObject, Capability, Catalog, Error, Result,
};

/// Generates statements for business objects of one catalog, in the SQL
/// dialect described by a capability.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    catalog: &'a Catalog,
    capability: &'a Capability,
}

/// What a write touches in one physical table.
#[derive(Debug)]
struct TableWrite<'a> {
    layer: TableLayer<'a>,

    /// Physical table name
    table: &'a str,

    /// Properties stored in the table, ordered by name
    owned: Vec<&'a PropertyDefinition>,

    /// Primary key properties of the parent class whose columns are
    /// repeated in this table to reference the parent row. Keys already
    /// stored in the table are not repeated.
    links: Vec<&'a PropertyDefinition>,

    /// Primary key identifying the row in this table
    key: Vec<&'a PropertyDefinition>,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a Catalog, capability: &'a Capability) -> Generator<'a> {
        Generator {
            catalog,
            capability,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn capability(&self) -> &'a Capability {
        self.capability
    }

    fn builder(&self) -> StatementBuilder<'a> {
        StatementBuilder::new(self.capability)
    }

    fn hierarchy(&self, object: &BusinessObject) -> Result<Hierarchy<'a>> {
        self.catalog.hierarchy(object.class())
    }

    /// The tables written for an object of the hierarchy's leaf class, most
    /// derived first.
    fn table_writes(&self, hierarchy: &Hierarchy<'a>) -> Result<Vec<TableWrite<'a>>> {
        let properties = hierarchy.properties();
        let mut writes = vec![];

        for layer in hierarchy.table_layers() {
            let table = layer.owner.table_name.as_str();

            let owned: Vec<_> = properties
                .iter()
                .filter(|(name, _)| hierarchy.table_for(name) == Some(table))
                .map(|(_, property)| *property)
                .collect();

            let links = match layer.parent {
                Some(_) => hierarchy
                    .primary_key_properties(layer.owner_index + 1)?
                    .into_iter()
                    .filter(|link| !owned.iter().any(|property| property.column == link.column))
                    .collect(),
                None => vec![],
            };

            let key = hierarchy.primary_key_properties(layer.index)?;

            writes.push(TableWrite {
                layer,
                table,
                owned,
                links,
                key,
            });
        }

        Ok(writes)
    }
}

impl TableWrite<'_> {
    /// Discriminator column and the class name written into it.
    fn discriminator(&self) -> Option<(&str, &str)> {
        let column = self.layer.discriminator?;

        // A property mapped onto the column takes precedence
        if self.owned.iter().any(|property| property.column == column) {
            return None;
        }

        Some((column, &self.layer.class.name))
    }
}

/// The state of `name` on `object`.
fn state<'o>(object: &'o BusinessObject, name: &str) -> Result<&'o PropertyValue> {
    object
        .property(name)
        .ok_or_else(|| Error::property_resolution(name, object.class_name()))
}

/// Casts `value` to the property's type for binding.
fn bind(property: &PropertyDefinition, value: &Value) -> Result<Param> {
    let value = property.cast(value)?;
    Ok(Param(TypedValue::new(value, property.ty)))
}

fn bind_class_name(name: &str) -> Param {
    Param(TypedValue::new(Value::from(name), Type::String))
}
