use super::{StatementBuilder, ToSql};

/// An identifier quoted with the dialect's delimiters.
pub(crate) struct Ident<S>(pub(crate) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut StatementBuilder<'_>) {
        let ident = self.0.as_ref();

        let (Some(left), Some(right)) = (f.capability.quote_left, f.capability.quote_right) else {
            f.sql.push_str(ident);
            return;
        };

        f.sql.push(left);

        for ch in ident.chars() {
            // Escape the closing delimiter by doubling it
            if ch == right {
                f.sql.push(ch);
            }
            f.sql.push(ch);
        }

        f.sql.push(right);
    }
}
