use super::{Builder, ClassDef, ClassDefinition, ClassId, Hierarchy};
use crate::Result;
use indexmap::IndexMap;

/// The immutable set of mapped classes.
///
/// Built once and shared by reference with every generator.
#[derive(Debug, Default)]
pub struct Catalog {
    pub classes: IndexMap<ClassId, ClassDefinition>,
}

impl Catalog {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a catalog from a JSON array of class declarations.
    pub fn from_json(json: &str) -> Result<Catalog> {
        let defs: Vec<ClassDef> = serde_json::from_str(json)?;
        Builder::default().build(defs)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    /// Get a class by ID
    pub fn class(&self, id: impl Into<ClassId>) -> &ClassDefinition {
        self.classes.get(&id.into()).expect("invalid class ID")
    }

    pub fn get(&self, id: impl Into<ClassId>) -> Option<&ClassDefinition> {
        self.classes.get(&id.into())
    }

    pub fn class_by_name(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.values().find(|class| class.name == name)
    }

    pub fn id_of(&self, name: &str) -> Option<ClassId> {
        self.class_by_name(name).map(|class| class.id)
    }

    /// The ancestor chain of `leaf`, most-derived first.
    pub fn hierarchy(&self, leaf: impl Into<ClassId>) -> Result<Hierarchy<'_>> {
        Hierarchy::resolve(self, leaf.into())
    }
}
