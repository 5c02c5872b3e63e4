#[macro_use]
mod fmt;
pub(crate) use fmt::ToSql;

mod clause;
pub use clause::JoinType;

mod delim;
pub(crate) use delim::{Comma, Period};

mod expr;
pub(crate) use expr::Equals;

mod ident;
pub(crate) use ident::Ident;

mod params;
pub use params::{Param, Placeholder, TypedValue};

use crate::{Statement, StatementKind};
use strata_core::Capability;

/// Owns the text and parameters of one statement while it is generated.
///
/// Fragments are written with the `fmt!` macro; clause-level edits
/// (criteria, joins, extra select fields) locate keywords in the text built
/// so far.
#[derive(Debug)]
pub struct StatementBuilder<'a> {
    /// Dialect details: identifier quoting, placeholders and row limits
    capability: &'a Capability,

    /// Where to write the serialized SQL
    sql: String,

    /// Parameters in placeholder order
    params: Vec<TypedValue>,
}

impl<'a> StatementBuilder<'a> {
    pub fn new(capability: &'a Capability) -> StatementBuilder<'a> {
        StatementBuilder {
            capability,
            sql: String::new(),
            params: vec![],
        }
    }

    /// Starts from existing statement text, e.g. a hand-written query that is
    /// then refined with joins and criteria.
    pub fn from_sql(capability: &'a Capability, sql: impl Into<String>) -> StatementBuilder<'a> {
        StatementBuilder {
            capability,
            sql: sql.into(),
            params: vec![],
        }
    }

    pub fn capability(&self) -> &'a Capability {
        self.capability
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[TypedValue] {
        &self.params
    }

    /// Appends a raw fragment.
    pub fn push_str(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Binds a parameter and appends its placeholder.
    pub fn push_param(&mut self, value: TypedValue) {
        Param(value).to_sql(self);
    }

    /// Appends `ident` with the dialect's identifier quoting.
    pub fn push_ident(&mut self, ident: &str) {
        Ident(ident).to_sql(self);
    }

    pub(crate) fn finish(self, kind: StatementKind, table: &str) -> Statement {
        tracing::trace!(?kind, table, sql = %self.sql, params = self.params.len(), "generated statement");

        Statement {
            kind,
            table: table.to_string(),
            sql: self.sql,
            params: self.params,
            auto_increment: None,
        }
    }
}
