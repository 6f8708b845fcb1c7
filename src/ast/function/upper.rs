use crate::ast::DatabaseValue;

/// A represention of the `UPPER` function in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Upper<'a> {
    pub(crate) expression: Box<DatabaseValue<'a>>,
}

/// Converts the result of the expression into uppercase string.
///
/// ```rust
/// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
/// let query = Select::from_table("users").value(upper(Column::from("name")));
/// let (sql, _) = Sqlite::build(query).unwrap();
/// assert_eq!("SELECT UPPER(`name`) FROM `users`", sql);
/// ```
#[inline]
pub fn upper<'a, E>(expression: E) -> Upper<'a>
where
    E: Into<DatabaseValue<'a>>,
{
    Upper {
        expression: Box::new(expression.into()),
    }
}
