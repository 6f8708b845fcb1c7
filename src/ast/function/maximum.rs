use crate::ast::Column;

/// A represention of the `MAX` function in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Maximum<'a> {
    pub(crate) column: Column<'a>,
}

/// Calculates the maximum value of a numeric column.
///
/// ```rust
/// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
/// let query = Select::from_table("users").value(max("age"));
/// let (sql, _) = Sqlite::build(query).unwrap();
/// assert_eq!("SELECT MAX(`age`) FROM `users`", sql);
/// ```
#[inline]
pub fn max<'a, C>(col: C) -> Maximum<'a>
where
    C: Into<Column<'a>>,
{
    Maximum { column: col.into() }
}
