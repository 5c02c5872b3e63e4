use serde::{Deserialize, Serialize};

/// How a class is mapped relative to its superclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inheritance {
    /// The class has its own table holding only its own properties. The table
    /// carries a foreign key to the superclass table's primary key.
    ClassTable,

    /// The class shares the superclass table. A contiguous run of single-table
    /// links collapses onto the table of the run's root.
    SingleTable,

    /// The class table holds every property, inherited ones included. No
    /// ancestor table is touched.
    ConcreteTable,
}

impl Inheritance {
    pub fn is_single_table(self) -> bool {
        matches!(self, Self::SingleTable)
    }
}
