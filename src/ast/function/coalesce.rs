use crate::ast::DatabaseValue;

/// A represention of the `COALESCE` function in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Coalesce<'a> {
    pub(crate) exprs: Vec<DatabaseValue<'a>>,
}

/// Returns the first non-null expression.
///
/// ```rust
/// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
/// let query = Select::from_table("users")
///     .value(coalesce(vec![
///         DatabaseValue::from(Column::from("nickname")),
///         DatabaseValue::from(Column::from("name")),
///     ]));
/// let (sql, _) = Sqlite::build(query).unwrap();
/// assert_eq!("SELECT COALESCE(`nickname`,`name`) FROM `users`", sql);
/// ```
#[inline]
pub fn coalesce<'a, T, V>(exprs: V) -> Coalesce<'a>
where
    T: Into<DatabaseValue<'a>>,
    V: Into<Vec<T>>,
{
    Coalesce {
        exprs: exprs.into().into_iter().map(Into::into).collect(),
    }
}
