/// Dialect details of a database connection that affect generated SQL text.
///
/// The generators only read a capability; they never talk to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Character opening a quoted identifier, `None` when identifiers are
    /// emitted bare.
    pub quote_left: Option<char>,

    /// Character closing a quoted identifier.
    pub quote_right: Option<char>,

    /// How the database restricts the number of rows returned.
    pub limit: LimitStyle,

    /// How parameters are named in statement text.
    pub placeholder: PlaceholderStyle,
}

/// Row-limit syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// `SELECT TOP n ...`
    Top,

    /// `SELECT FIRST n ...`
    First,

    /// `SELECT ... LIMIT n`
    Limit,
}

/// Parameter placeholder naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// A fixed prefix followed by the zero-based parameter index, e.g.
    /// `?Param0` or `@Param0`.
    Named(&'static str),

    /// `$1`, `$2`, ... as used by PostgreSQL.
    Dollar,
}

impl Capability {
    /// Unquoted identifiers, `?ParamN` placeholders and a `LIMIT` suffix.
    pub const GENERIC: Self = Self {
        quote_left: None,
        quote_right: None,
        limit: LimitStyle::Limit,
        placeholder: PlaceholderStyle::Named("?Param"),
    };

    /// MySQL capabilities.
    pub const MYSQL: Self = Self {
        quote_left: Some('`'),
        quote_right: Some('`'),
        ..Self::GENERIC
    };

    /// PostgreSQL capabilities.
    pub const POSTGRESQL: Self = Self {
        quote_left: Some('"'),
        quote_right: Some('"'),
        placeholder: PlaceholderStyle::Dollar,
        ..Self::GENERIC
    };

    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        quote_left: Some('"'),
        quote_right: Some('"'),
        ..Self::GENERIC
    };

    /// SQL Server capabilities.
    pub const SQL_SERVER: Self = Self {
        quote_left: Some('['),
        quote_right: Some(']'),
        limit: LimitStyle::Top,
        placeholder: PlaceholderStyle::Named("@Param"),
    };

    /// Firebird capabilities.
    pub const FIREBIRD: Self = Self {
        quote_left: Some('"'),
        quote_right: Some('"'),
        limit: LimitStyle::First,
        placeholder: PlaceholderStyle::Named("@Param"),
    };

    /// Text placed directly after `SELECT` to limit the rows returned.
    pub fn limit_prefix(&self, limit: usize) -> Option<String> {
        match self.limit {
            LimitStyle::Top => Some(format!("TOP {limit}")),
            LimitStyle::First => Some(format!("FIRST {limit}")),
            LimitStyle::Limit => None,
        }
    }

    /// Text placed at the end of a statement to limit the rows returned.
    pub fn limit_suffix(&self, limit: usize) -> Option<String> {
        match self.limit {
            LimitStyle::Limit => Some(format!("LIMIT {limit}")),
            LimitStyle::Top | LimitStyle::First => None,
        }
    }

    /// Placeholder text for the parameter at zero-based `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self.placeholder {
            PlaceholderStyle::Named(prefix) => format!("{prefix}{index}"),
            PlaceholderStyle::Dollar => format!("${}", index + 1),
        }
    }
}
