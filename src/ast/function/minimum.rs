use crate::ast::Column;

/// A represention of the `MIN` function in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum<'a> {
    pub(crate) column: Column<'a>,
}

/// Calculates the minimum value of a numeric column.
///
/// ```rust
/// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
/// let query = Select::from_table("users").value(min("age"));
/// let (sql, _) = Sqlite::build(query).unwrap();
/// assert_eq!("SELECT MIN(`age`) FROM `users`", sql);
/// ```
#[inline]
pub fn min<'a, C>(col: C) -> Minimum<'a>
where
    C: Into<Column<'a>>,
{
    Minimum { column: col.into() }
}
