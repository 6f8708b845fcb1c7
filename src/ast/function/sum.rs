use crate::ast::DatabaseValue;

/// A represention of the `SUM` function in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Sum<'a> {
    pub(crate) expr: Box<DatabaseValue<'a>>,
}

/// Calculates the sum value of a numeric column.
///
/// ```rust
/// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
/// let query = Select::from_table("users").value(sum(Column::from("age")));
/// let (sql, _) = Sqlite::build(query).unwrap();
/// assert_eq!("SELECT SUM(`age`) FROM `users`", sql);
/// ```
#[inline]
pub fn sum<'a, T>(expr: T) -> Sum<'a>
where
    T: Into<DatabaseValue<'a>>,
{
    Sum {
        expr: Box::new(expr.into()),
    }
}
