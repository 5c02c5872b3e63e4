use super::{bind, state, Generator, TableWrite};
use crate::{
    serializer::{Comma, Equals, Ident, ToSql},
    Statement, StatementKind,
};
use strata_core::{err, BusinessObject, Result};

impl Generator<'_> {
    /// UPDATE statements for the tables holding a changed property, parent
    /// tables first. Rows are matched on their persisted key values.
    pub fn update(&self, object: &BusinessObject) -> Result<Vec<Statement>> {
        let hierarchy = self.hierarchy(object)?;
        let writes = self.table_writes(&hierarchy)?;

        let mut statements = vec![];

        for write in writes.iter().rev() {
            let statement = self.update_table(object, write).map_err(|err| {
                err.context(err!(
                    "updating `{}` in `{}`",
                    object.class_name(),
                    write.table
                ))
            })?;

            if let Some(statement) = statement {
                statements.push(statement);
            }
        }

        tracing::debug!(
            class = object.class_name(),
            statements = statements.len(),
            "generated update cascade"
        );

        Ok(statements)
    }

    fn update_table(
        &self,
        object: &BusinessObject,
        write: &TableWrite<'_>,
    ) -> Result<Option<Statement>> {
        let mut assignments = vec![];

        for property in write.owned.iter().chain(&write.links) {
            // The database owns auto-increment values
            if property.auto_increment && write.owned.contains(property) {
                continue;
            }

            let current = state(object, &property.name)?;

            if current.is_dirty() {
                assignments.push(Equals(Ident(&property.column), bind(property, current.value())?));
            }
        }

        if assignments.is_empty() {
            return Ok(None);
        }

        let mut builder = self.builder();
        fmt!(&mut builder, "UPDATE " Ident(write.table) " SET " Comma(assignments));

        for property in &write.key {
            let persisted = state(object, &property.name)?.persisted();
            builder.push_criteria(Equals(Ident(&property.column), bind(property, persisted)?));
        }

        Ok(Some(builder.finish(StatementKind::Update, write.table)))
    }
}
