use super::{StatementBuilder, ToSql};

/// Comma delimited
pub(crate) struct Comma<L>(pub(crate) L);

/// Period delimited
pub(crate) struct Period<L>(pub(crate) L);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut StatementBuilder<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}

impl<L> ToSql for Period<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut StatementBuilder<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ".";
        }
    }
}
