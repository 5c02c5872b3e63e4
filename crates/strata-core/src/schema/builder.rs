use super::{
    Catalog, ClassDef, ClassDefinition, ClassId, PrimaryKey, PropertyDefinition, SuperClass,
};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Compiles class declarations into a [`Catalog`].
#[derive(Debug)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            table_name_prefix: None,
        }
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn build(&self, defs: Vec<ClassDef>) -> Result<Catalog> {
        // Reserve identifiers first so superclass links can refer to classes
        // declared later.
        let mut lookup = IndexMap::<String, ClassId>::new();

        for (index, def) in defs.iter().enumerate() {
            if lookup.insert(def.name.clone(), ClassId(index)).is_some() {
                return Err(Error::configuration(format!(
                    "class `{}` is declared more than once",
                    def.name
                )));
            }
        }

        let mut catalog = Catalog::default();

        for (index, def) in defs.into_iter().enumerate() {
            let class = self.build_class(ClassId(index), def, &lookup)?;
            catalog.classes.insert(class.id, class);
        }

        catalog.verify()?;

        tracing::debug!(classes = catalog.classes.len(), "built class catalog");

        Ok(catalog)
    }

    fn build_class(
        &self,
        id: ClassId,
        def: ClassDef,
        lookup: &IndexMap<String, ClassId>,
    ) -> Result<ClassDefinition> {
        let mut seen = HashSet::new();
        let mut properties = Vec::with_capacity(def.properties.len());

        for property in def.properties {
            if !seen.insert(property.name.clone()) {
                return Err(Error::configuration(format!(
                    "property `{}` is declared more than once on class `{}`",
                    property.name, def.name
                )));
            }

            properties.push(PropertyDefinition {
                class: id,
                column: property.column.unwrap_or_else(|| property.name.clone()),
                name: property.name,
                ty: property.ty,
                auto_increment: property.auto_increment,
            });
        }

        let super_class = match def.super_class {
            Some(link) => {
                let Some(&class) = lookup.get(&link.class) else {
                    return Err(Error::configuration(format!(
                        "class `{}` extends unknown class `{}`",
                        def.name, link.class
                    )));
                };

                Some(SuperClass {
                    class,
                    inheritance: link.inheritance,
                    discriminator: link.discriminator,
                })
            }
            None => None,
        };

        let table_name = def.table.unwrap_or_else(|| def.name.clone());
        let table_name = match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{table_name}"),
            None => table_name,
        };

        let primary_key = if def.primary_key.is_empty() {
            None
        } else {
            Some(PrimaryKey::new(def.primary_key))
        };

        Ok(ClassDefinition {
            id,
            name: def.name,
            table_name,
            properties,
            primary_key,
            super_class,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
