//! Live business objects.

use crate::{schema::ClassId, stmt::Value, Catalog, Error, Result};
use std::collections::BTreeMap;

/// An instance of a mapped class.
///
/// Holds a value for every property of the class and its ancestors, ordered
/// by property name.
#[derive(Debug, Clone)]
pub struct BusinessObject {
    class: ClassId,

    class_name: String,

    values: BTreeMap<String, PropertyValue>,
}

/// The state of one property on a business object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyValue {
    value: Value,

    /// Value as last read from or written to the database
    persisted: Value,

    dirty: bool,
}

impl BusinessObject {
    /// Creates a new object of class `class` with every property set to null.
    pub fn new(catalog: &Catalog, class: impl Into<ClassId>) -> Result<BusinessObject> {
        let hierarchy = catalog.hierarchy(class)?;

        let values = hierarchy
            .properties()
            .into_keys()
            .map(|name| (name.to_string(), PropertyValue::default()))
            .collect();

        Ok(BusinessObject {
            class: hierarchy.leaf().id,
            class_name: hierarchy.leaf().name.clone(),
            values,
        })
    }

    /// Creates an object whose values were read from the database. The
    /// object starts clean.
    pub fn load<I, S, V>(
        catalog: &Catalog,
        class: impl Into<ClassId>,
        values: I,
    ) -> Result<BusinessObject>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        let mut object = BusinessObject::new(catalog, class)?;

        for (name, value) in values {
            object.set(name.as_ref(), value)?;
        }

        object.mark_persisted();
        Ok(object)
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Sets a property, marking it dirty when the value changes.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let Some(property) = self.values.get_mut(name) else {
            return Err(Error::property_resolution(name, &self.class_name));
        };

        let value = value.into();

        if property.value != value {
            property.value = value;
            property.dirty = true;
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).map(|property| &property.value)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// Property states ordered by name.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> + '_ {
        self.values
            .iter()
            .map(|(name, property)| (name.as_str(), property))
    }

    pub fn is_dirty(&self) -> bool {
        self.values.values().any(|property| property.dirty)
    }

    /// Records the current values as persisted and clears every dirty flag.
    pub fn mark_persisted(&mut self) {
        for property in self.values.values_mut() {
            property.persisted = property.value.clone();
            property.dirty = false;
        }
    }
}

impl PropertyValue {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn persisted(&self) -> &Value {
        &self.persisted
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
