use super::{bind, bind_class_name, state, Generator, TableWrite};
use crate::{
    serializer::{Comma, Ident, ToSql},
    AutoIncrement, Statement, StatementKind,
};
use strata_core::{err, BusinessObject, Result};

impl Generator<'_> {
    /// INSERT statements for every table the object is stored in, parent
    /// tables first.
    ///
    /// Auto-increment properties are left out of the column list; the
    /// statement for their table reports them so the assigned value can be
    /// read back.
    pub fn insert(&self, object: &BusinessObject) -> Result<Vec<Statement>> {
        let hierarchy = self.hierarchy(object)?;
        let writes = self.table_writes(&hierarchy)?;

        let statements = writes
            .iter()
            .rev()
            .map(|write| {
                self.insert_table(object, write).map_err(|err| {
                    err.context(err!(
                        "inserting `{}` into `{}`",
                        object.class_name(),
                        write.table
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            class = object.class_name(),
            statements = statements.len(),
            "generated insert cascade"
        );

        Ok(statements)
    }

    fn insert_table(&self, object: &BusinessObject, write: &TableWrite<'_>) -> Result<Statement> {
        let mut columns = vec![];
        let mut params = vec![];
        let mut auto_increment = None;

        for property in &write.owned {
            // Verified per table, so at most one property matches
            if property.auto_increment {
                auto_increment = Some(AutoIncrement {
                    property: property.name.clone(),
                    column: property.column.clone(),
                });
                continue;
            }

            columns.push(property.column.as_str());
            params.push(bind(property, state(object, &property.name)?.value())?);
        }

        // Parent key values reference the row inserted into the parent table
        for link in &write.links {
            columns.push(link.column.as_str());
            params.push(bind(link, state(object, &link.name)?.value())?);
        }

        if let Some((column, class_name)) = write.discriminator() {
            columns.push(column);
            params.push(bind_class_name(class_name));
        }

        let mut builder = self.builder();
        let table = Ident(write.table);

        if columns.is_empty() {
            fmt!(&mut builder, "INSERT INTO " table " DEFAULT VALUES");
        } else {
            let columns = Comma(columns.into_iter().map(Ident));
            let values = Comma(params);

            fmt!(&mut builder, "INSERT INTO " table " (" columns ") VALUES (" values ")");
        }

        let mut statement = builder.finish(StatementKind::Insert, write.table);
        statement.auto_increment = auto_increment;
        Ok(statement)
    }
}
