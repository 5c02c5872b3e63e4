use super::{StatementBuilder, ToSql};

/// `lhs = rhs`, used for criteria and SET assignments alike.
pub(crate) struct Equals<L, R>(pub(crate) L, pub(crate) R);

impl<L: ToSql, R: ToSql> ToSql for Equals<L, R> {
    fn to_sql(self, f: &mut StatementBuilder<'_>) {
        fmt!(f, self.0 " = " self.1);
    }
}
