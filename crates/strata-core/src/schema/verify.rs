use super::{Catalog, ClassDefinition};
use crate::{Error, Result};
use std::collections::BTreeMap;

impl Catalog {
    pub(super) fn verify(&self) -> Result<()> {
        for class in self.classes() {
            self.verify_class(class)?;
        }

        Ok(())
    }

    fn verify_class(&self, class: &ClassDefinition) -> Result<()> {
        // Walking the hierarchy rejects cycles
        let hierarchy = self.hierarchy(class)?;

        if hierarchy.primary_key_properties(0)?.is_empty() {
            return Err(Error::configuration(format!(
                "class `{}` has no primary key",
                class.name
            )));
        }

        if let Some(link) = &class.super_class {
            if link.discriminator.is_some() && !link.inheritance.is_single_table() {
                return Err(Error::configuration(format!(
                    "class `{}` declares a discriminator on a {:?} link; discriminators \
                     only apply to single-table inheritance",
                    class.name, link.inheritance
                )));
            }
        }

        // A single-table run shares one row, so the limit is per table
        let mut auto_increment: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        for (name, property) in hierarchy.properties() {
            if !property.auto_increment {
                continue;
            }

            let table = hierarchy.resolve_table(name)?;
            auto_increment.entry(table).or_default().push(name);
        }

        for (table, properties) in auto_increment {
            if properties.len() > 1 {
                return Err(Error::configuration(format!(
                    "table `{table}` holds {} auto-increment properties ({}); at most one is allowed",
                    properties.len(),
                    properties.join(", ")
                )));
            }
        }

        Ok(())
    }
}
