/// Ordered names of the properties composing a primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    pub properties: Vec<String>,
}

impl PrimaryKey {
    pub fn new<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.iter().any(|name| name == property)
    }
}
