use crate::ast::DatabaseValue;

/// An aggregate function that concatenates strings from a group into a
/// single string with various options.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateToString<'a> {
    pub(crate) value: Box<DatabaseValue<'a>>,
}

/// Aggregates the given field into a comma-separated string.
///
/// ```rust
/// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
/// let query = Select::from_table("users")
///     .value(aggregate_to_string(Column::from("firstname")))
///     .group_by("lastname");
/// let (sql, _) = Sqlite::build(query).unwrap();
/// assert_eq!(
///     "SELECT GROUP_CONCAT(`firstname`) FROM `users` GROUP BY `lastname`",
///     sql
/// );
/// ```
#[inline]
pub fn aggregate_to_string<'a, T>(expr: T) -> AggregateToString<'a>
where
    T: Into<DatabaseValue<'a>>,
{
    AggregateToString {
        value: Box::new(expr.into()),
    }
}
