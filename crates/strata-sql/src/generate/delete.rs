use super::{bind, state, Generator};
use crate::{
    serializer::{Equals, Ident, ToSql},
    Statement, StatementKind,
};
use strata_core::{BusinessObject, Result};

impl Generator<'_> {
    /// DELETE statements for every table the object is stored in, child
    /// tables first so no row is left referencing a deleted parent.
    pub fn delete(&self, object: &BusinessObject) -> Result<Vec<Statement>> {
        let hierarchy = self.hierarchy(object)?;
        let mut statements = vec![];

        for write in self.table_writes(&hierarchy)? {
            let mut builder = self.builder();
            fmt!(&mut builder, "DELETE FROM " Ident(write.table));

            for property in &write.key {
                let persisted = state(object, &property.name)?.persisted();
                builder.push_criteria(Equals(Ident(&property.column), bind(property, persisted)?));
            }

            statements.push(builder.finish(StatementKind::Delete, write.table));
        }

        tracing::debug!(
            class = object.class_name(),
            statements = statements.len(),
            "generated delete cascade"
        );

        Ok(statements)
    }
}
