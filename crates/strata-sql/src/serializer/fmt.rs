use super::StatementBuilder;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f);
        )*
    }};
}

pub(crate) trait ToSql {
    fn to_sql(self, f: &mut StatementBuilder<'_>);
}

impl ToSql for &str {
    fn to_sql(self, f: &mut StatementBuilder<'_>) {
        f.sql.push_str(self);
    }
}

impl ToSql for &String {
    fn to_sql(self, f: &mut StatementBuilder<'_>) {
        f.sql.push_str(self);
    }
}
