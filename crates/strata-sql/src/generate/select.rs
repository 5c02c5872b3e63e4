use super::{bind, bind_class_name, Generator};
use crate::{
    serializer::{Comma, Equals, Ident, Period, ToSql},
    Statement, StatementBuilder, StatementKind,
};
use strata_core::{schema::Hierarchy, BusinessObject, Error, Result};

impl<'a> Generator<'a> {
    /// A SELECT reading every property of the object's class, joining the
    /// parent tables of class-table inheritance on their primary keys.
    pub fn select(&self, object: &BusinessObject, limit: Option<usize>) -> Result<Statement> {
        let hierarchy = self.hierarchy(object)?;
        let (mut builder, tables) = self.select_builder(object, &hierarchy, limit)?;

        if let Some(suffix) = limit.and_then(|limit| self.capability.limit_suffix(limit)) {
            fmt!(&mut builder, " " suffix.as_str());
        }

        tracing::debug!(class = object.class_name(), tables = tables.len(), "generated select");

        Ok(builder.finish(StatementKind::Select, tables[0]))
    }

    /// A SELECT reading the single row identified by the object's current
    /// primary key values.
    pub fn select_by_primary_key(&self, object: &BusinessObject) -> Result<Statement> {
        let hierarchy = self.hierarchy(object)?;
        let (mut builder, tables) = self.select_builder(object, &hierarchy, None)?;

        for property in hierarchy.primary_key_properties(0)? {
            let Some(value) = object.get(&property.name) else {
                return Err(Error::property_resolution(&property.name, object.class_name()));
            };

            let param = bind(property, value)?;

            if tables.len() == 1 {
                builder.push_criteria(Equals(Ident(&property.column), param));
            } else {
                let table = hierarchy.resolve_table(&property.name)?;
                let column = Period([Ident(table), Ident(property.column.as_str())]);
                builder.push_criteria(Equals(column, param));
            }
        }

        tracing::debug!(
            class = object.class_name(),
            tables = tables.len(),
            "generated select by primary key"
        );

        Ok(builder.finish(StatementKind::Select, tables[0]))
    }

    /// Writes `SELECT [prefix] fields FROM tables [WHERE joins]` and returns
    /// the builder with the FROM tables, most derived first.
    fn select_builder(
        &self,
        object: &BusinessObject,
        hierarchy: &Hierarchy<'a>,
        limit: Option<usize>,
    ) -> Result<(StatementBuilder<'a>, Vec<&'a str>)> {
        let mut fields = vec![];

        for (name, _) in object.properties() {
            let Some(property) = hierarchy.property(name) else {
                return Err(Error::property_resolution(name, object.class_name()));
            };

            fields.push((hierarchy.resolve_table(name)?, property.column.as_str()));
        }

        let layers = hierarchy.table_layers();
        let tables: Vec<_> = layers
            .iter()
            .map(|layer| layer.owner.table_name.as_str())
            .collect();

        let mut builder = self.builder();
        builder.push_str("SELECT ");

        if let Some(prefix) = limit.and_then(|limit| self.capability.limit_prefix(limit)) {
            fmt!(&mut builder, prefix.as_str() " ");
        }

        let fields = Comma(
            fields
                .into_iter()
                .map(|(table, column)| Period([Ident(table), Ident(column)])),
        );
        let from = Comma(tables.iter().map(Ident));

        fmt!(&mut builder, fields " FROM " from);

        // Each class-table layer references its parent row by the parent's
        // primary key columns.
        for (layer, parent_table) in layers.iter().zip(tables.iter().skip(1)) {
            if layer.parent.is_none() {
                continue;
            }

            let table = layer.owner.table_name.as_str();

            for key in hierarchy.primary_key_properties(layer.owner_index + 1)? {
                builder.push_criteria(Equals(
                    Period([Ident(table), Ident(key.column.as_str())]),
                    Period([Ident(*parent_table), Ident(key.column.as_str())]),
                ));
            }
        }

        // Rows of a shared single-table run are narrowed to the object's class
        for layer in &layers {
            if let Some(column) = layer.discriminator {
                let table = layer.owner.table_name.as_str();
                builder.push_criteria(Equals(
                    Period([Ident(table), Ident(column)]),
                    bind_class_name(&layer.class.name),
                ));
            }
        }

        Ok((builder, tables))
    }
}
