use super::{Catalog, ClassDefinition, ClassId, Inheritance, PropertyDefinition};
use crate::{Error, Result};
use std::collections::{BTreeMap, HashSet};

/// The ancestor chain of a class, most-derived first.
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    catalog: &'a Catalog,
    layers: Vec<&'a ClassDefinition>,
}

/// A physical table touched when writing an object, together with the
/// classes stored in it.
#[derive(Debug, Clone, Copy)]
pub struct TableLayer<'a> {
    /// Most-derived class stored in the table
    pub class: &'a ClassDefinition,

    /// Class declaring the physical table. Differs from `class` when a
    /// single-table run collapses onto its root.
    pub owner: &'a ClassDefinition,

    /// Hierarchy index of `class`
    pub index: usize,

    /// Hierarchy index of `owner`
    pub owner_index: usize,

    /// The superclass reached from `owner` through class-table inheritance.
    /// Its primary key columns are repeated in this table as a foreign key.
    pub parent: Option<&'a ClassDefinition>,

    /// Discriminator column of the table. Taken from the single-table links
    /// between `class` and `owner`, or else from any class in the catalog
    /// stored in `owner`'s table, so a run root written or read on its own
    /// still records its class name.
    pub discriminator: Option<&'a str>,
}

impl<'a> Hierarchy<'a> {
    /// Walks the superclass links of `leaf` up to the root.
    pub fn resolve(catalog: &'a Catalog, leaf: ClassId) -> Result<Hierarchy<'a>> {
        let mut layers = vec![];
        let mut visited = HashSet::new();
        let mut next = Some(leaf);

        while let Some(id) = next {
            let Some(class) = catalog.get(id) else {
                return Err(Error::configuration(format!(
                    "class {id:?} is not part of the catalog"
                )));
            };

            if !visited.insert(id) {
                return Err(Error::configuration(format!(
                    "superclass chain of `{}` loops back to `{}`",
                    catalog.class(leaf).name,
                    class.name
                )));
            }

            layers.push(class);
            next = class.super_class_id();
        }

        Ok(Hierarchy { catalog, layers })
    }

    pub fn layers(&self) -> &[&'a ClassDefinition] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn leaf(&self) -> &'a ClassDefinition {
        self.layers[0]
    }

    pub fn root(&self) -> &'a ClassDefinition {
        self.layers[self.layers.len() - 1]
    }

    /// Strategy of the link from layer `index` to its superclass.
    pub fn inheritance(&self, index: usize) -> Option<Inheritance> {
        self.layers.get(index)?.inheritance()
    }

    /// The most-derived definition of `name`.
    pub fn property(&self, name: &str) -> Option<&'a PropertyDefinition> {
        self.property_from(0, name)
    }

    fn property_from(&self, index: usize, name: &str) -> Option<&'a PropertyDefinition> {
        self.layers[index..]
            .iter()
            .find_map(|class| class.property(name))
    }

    /// Every property visible on the leaf class, ordered by name. Subclass
    /// definitions shadow ancestor ones.
    pub fn properties(&self) -> BTreeMap<&'a str, &'a PropertyDefinition> {
        let mut properties = BTreeMap::new();

        for class in &self.layers {
            for property in &class.properties {
                properties.entry(property.name.as_str()).or_insert(property);
            }
        }

        properties
    }

    /// Name of the table physically storing `property`, `None` when no layer
    /// declares it.
    pub fn table_for(&self, property: &str) -> Option<&'a str> {
        let mut single_table_run = false;

        for class in &self.layers {
            let inheritance = class.inheritance();

            // A concrete table holds inherited properties too
            if let Some(Inheritance::ConcreteTable) = inheritance {
                return Some(&class.table_name);
            }

            if class.has_property(property) {
                match inheritance {
                    Some(Inheritance::SingleTable) => single_table_run = true,
                    _ => return Some(&class.table_name),
                }
            } else if single_table_run {
                match inheritance {
                    Some(Inheritance::SingleTable) => {}
                    // The run was reached through a single-table link and ends
                    // here, so this layer owns the shared table.
                    _ => return Some(&class.table_name),
                }
            }
        }

        None
    }

    /// Same as [`Hierarchy::table_for`], failing when the property is unknown.
    pub fn resolve_table(&self, property: &str) -> Result<&'a str> {
        self.table_for(property)
            .ok_or_else(|| Error::property_resolution(property, &self.leaf().name))
    }

    /// Index of the layer owning the table that layer `index` is stored in:
    /// the root of the single-table run starting at `index`.
    pub fn run_root(&self, index: usize) -> usize {
        let mut index = index;

        while let Some(Inheritance::SingleTable) = self.inheritance(index) {
            index += 1;
        }

        index
    }

    pub fn physical_table(&self, index: usize) -> &'a str {
        &self.layers[self.run_root(index)].table_name
    }

    /// The distinct tables an object of the leaf class is written to, most
    /// derived first. Stops at the root or at a concrete-table layer.
    pub fn table_layers(&self) -> Vec<TableLayer<'a>> {
        let mut ret = vec![];
        let mut index = 0;

        loop {
            let owner_index = self.run_root(index);
            let owner = self.layers[owner_index];

            let discriminator = self.layers[index..owner_index]
                .iter()
                .find_map(|class| class.discriminator())
                .or_else(|| self.shared_discriminator(owner));

            let parent = match owner.inheritance() {
                Some(Inheritance::ClassTable) => Some(self.layers[owner_index + 1]),
                _ => None,
            };

            ret.push(TableLayer {
                class: self.layers[index],
                owner,
                index,
                owner_index,
                parent,
                discriminator,
            });

            if parent.is_none() {
                break;
            }

            index = owner_index + 1;
        }

        ret
    }

    /// Discriminator declared by any class whose single-table links end at
    /// `owner`.
    fn shared_discriminator(&self, owner: &ClassDefinition) -> Option<&'a str> {
        self.catalog
            .classes()
            .filter(|class| self.stored_in(class, owner))
            .find_map(|class| class.discriminator())
    }

    /// Whether `class` reaches `owner` through single-table links only.
    fn stored_in(&self, class: &ClassDefinition, owner: &ClassDefinition) -> bool {
        let mut current = class;

        // Bounded by the catalog size in case a chain loops
        for _ in 0..self.catalog.classes().count() {
            if !matches!(current.inheritance(), Some(Inheritance::SingleTable)) {
                return false;
            }

            let Some(parent) = current.super_class_id().and_then(|id| self.catalog.get(id)) else {
                return false;
            };

            if parent.id == owner.id {
                return true;
            }

            current = parent;
        }

        false
    }

    /// Properties of the primary key in effect at layer `index`: the key
    /// declared by the layer or by its nearest ancestor. Empty when no layer
    /// from `index` up declares one.
    pub fn primary_key_properties(&self, index: usize) -> Result<Vec<&'a PropertyDefinition>> {
        let Some(pk) = self.layers[index..]
            .iter()
            .find_map(|class| class.primary_key.as_ref())
        else {
            return Ok(vec![]);
        };

        pk.properties
            .iter()
            .map(|name| {
                self.property_from(index, name).ok_or_else(|| {
                    Error::configuration(format!(
                        "primary key of `{}` names unknown property `{name}`",
                        self.layers[index].name
                    ))
                })
            })
            .collect()
    }

    /// Index of `class` within the chain.
    pub fn position(&self, class: &ClassDefinition) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id == class.id)
    }
}
