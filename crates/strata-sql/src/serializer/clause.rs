use super::{Ident, StatementBuilder, ToSql};

use std_util::str::StrUtil;
use strata_core::{Error, Result};

/// Join flavors accepted by [`StatementBuilder::add_join`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

impl JoinType {
    fn keyword(self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::LeftOuter => "LEFT JOIN",
            JoinType::RightOuter => "RIGHT JOIN",
            JoinType::FullOuter => "FULL JOIN",
        }
    }
}

/// Keywords ending the FROM target.
const FROM_TERMINATORS: &[&str] = &["WHERE", "GROUP", "ORDER", "LIMIT"];

impl StatementBuilder<'_> {
    /// Byte offset of the first `keyword` outside quoted identifiers and
    /// string literals. Matching ignores ASCII case and requires whole words.
    pub fn find_clause(&self, keyword: &str) -> Option<usize> {
        self.find_clause_from(keyword, 0)
    }

    /// Same as [`StatementBuilder::find_clause`], starting at `from`.
    pub fn find_clause_from(&self, keyword: &str, from: usize) -> Option<usize> {
        let mut start = from;

        while let Some(pos) = self.sql.find_ignore_ascii_case(keyword, start) {
            if self.sql.is_word_at(pos, keyword.len()) && !self.is_quoted_at(pos) {
                return Some(pos);
            }

            start = pos + 1;
        }

        None
    }

    /// True when `pos` falls inside a quoted identifier or string literal.
    ///
    /// The text before `pos` is scanned left to right, so a `'` inside a
    /// quoted identifier does not open a literal. A doubled closing
    /// delimiter is an escaped one and keeps the quote open.
    fn is_quoted_at(&self, pos: usize) -> bool {
        let mut closing = None;
        let mut chars = self.sql[..pos].chars().peekable();

        while let Some(ch) = chars.next() {
            match closing {
                Some(end) if ch == end => {
                    if chars.peek() == Some(&end) {
                        chars.next();
                    } else {
                        closing = None;
                    }
                }
                Some(_) => {}
                None if ch == '\'' => closing = Some('\''),
                None if Some(ch) == self.capability.quote_left => {
                    closing = self.capability.quote_right;
                }
                None => {}
            }
        }

        closing.is_some()
    }

    /// Appends a condition, introducing the WHERE clause if there is none yet.
    pub fn append_criteria(&mut self, criteria: &str) {
        self.push_criteria(criteria);
    }

    pub(crate) fn push_criteria(&mut self, criteria: impl ToSql) {
        if self.find_clause("WHERE").is_some() {
            self.sql.push_str(" AND ");
        } else {
            self.sql.push_str(" WHERE ");
        }

        criteria.to_sql(self);
    }

    /// Joins `table` onto the FROM target.
    ///
    /// An existing join is wrapped in parentheses before the new one is
    /// added; a bare first table is never parenthesized. Joins other than
    /// INNER make the select DISTINCT.
    pub fn add_join(&mut self, join: JoinType, table: &str, on: &str) -> Result<()> {
        let Some(from) = self.find_clause("FROM") else {
            return Err(Error::malformed_statement(format!(
                "cannot join `{table}` without a FROM clause; sql={}",
                self.sql
            )));
        };

        let target_start = from + "FROM".len();
        let target_end = FROM_TERMINATORS
            .iter()
            .filter_map(|keyword| self.find_clause_from(keyword, target_start))
            .min()
            .unwrap_or(self.sql.len());

        let has_join = self
            .find_clause_from("JOIN", target_start)
            .is_some_and(|pos| pos < target_end);

        let target = self.sql[target_start..target_end].trim();

        let mut joined = StatementBuilder::new(self.capability);
        joined.push_str(" ");
        if has_join {
            fmt!(&mut joined, "(" target ")");
        } else {
            fmt!(&mut joined, target);
        }
        fmt!(&mut joined, " " join.keyword() " " Ident(table) " ON " on);
        if target_end < self.sql.len() {
            joined.push_str(" ");
        }

        self.sql.replace_range(target_start..target_end, &joined.sql);

        if join != JoinType::Inner {
            self.add_distinct()?;
        }

        Ok(())
    }

    /// Makes the select DISTINCT. Does nothing when it already is.
    pub fn add_distinct(&mut self) -> Result<()> {
        let Some(select) = self.find_clause("SELECT") else {
            return Err(Error::malformed_statement(format!(
                "cannot add DISTINCT without a SELECT clause; sql={}",
                self.sql
            )));
        };

        let after = select + "SELECT".len();
        let rest = self.sql[after..].trim_start();

        let already = rest
            .get(.."DISTINCT".len())
            .is_some_and(|word| word.eq_ignore_ascii_case("DISTINCT"))
            && rest.is_word_at(0, "DISTINCT".len());

        if !already {
            self.sql.insert_str(after, " DISTINCT");
        }

        Ok(())
    }

    /// Adds fields to the SELECT list, skipping any whose text already
    /// appears in it.
    pub fn add_select_fields(&mut self, fields: &[&str]) -> Result<()> {
        let (Some(select), Some(from)) = (self.find_clause("SELECT"), self.find_clause("FROM"))
        else {
            return Err(Error::malformed_statement(format!(
                "cannot add select fields without SELECT and FROM clauses; sql={}",
                self.sql
            )));
        };

        let list_start = select + "SELECT".len();
        let mut list = self.sql[list_start..from].trim_end().to_string();
        let insert_at = list_start + list.len();
        let mut added = String::new();

        for field in fields {
            if list.contains(field) {
                continue;
            }

            let sep = if list.trim().is_empty() { " " } else { ", " };
            added.push_str(sep);
            added.push_str(field);
            list.push_str(sep);
            list.push_str(field);
        }

        self.sql.insert_str(insert_at, &added);
        Ok(())
    }

    /// Appends an ORDER BY clause. Empty `order` leaves the text unchanged.
    pub fn append_order_by(&mut self, order: &str) {
        if order.trim().is_empty() {
            return;
        }

        fmt!(self, " ORDER BY " order);
    }
}
