use crate::TypedValue;

/// A generated, parameterized SQL statement ready for an executor.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,

    /// The table the statement targets. For a select, the base FROM table.
    pub table: String,

    pub sql: String,

    /// Parameters in placeholder order
    pub params: Vec<TypedValue>,

    /// Set on an insert whose table has an auto-increment column. The
    /// executor reads the assigned value back after running the statement.
    pub auto_increment: Option<AutoIncrement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

/// The auto-increment field an insert leaves for the database to fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoIncrement {
    pub property: String,
    pub column: String,
}

impl Statement {
    pub fn is_select(&self) -> bool {
        matches!(self.kind, StatementKind::Select)
    }

    pub fn is_insert(&self) -> bool {
        matches!(self.kind, StatementKind::Insert)
    }

    pub fn is_update(&self) -> bool {
        matches!(self.kind, StatementKind::Update)
    }

    pub fn is_delete(&self) -> bool {
        matches!(self.kind, StatementKind::Delete)
    }
}
