use crate::ast::DatabaseValue;

/// A represention of the `LOWER` function in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Lower<'a> {
    pub(crate) expression: Box<DatabaseValue<'a>>,
}

/// Converts the result of the expression into lowercase string.
///
/// ```rust
/// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
/// let query = Select::from_table("users").value(lower(Column::from("name")));
/// let (sql, _) = Sqlite::build(query).unwrap();
/// assert_eq!("SELECT LOWER(`name`) FROM `users`", sql);
/// ```
#[inline]
pub fn lower<'a, E>(expression: E) -> Lower<'a>
where
    E: Into<DatabaseValue<'a>>,
{
    Lower {
        expression: Box::new(expression.into()),
    }
}
