use crate::ast::{ConditionTree, Table};

/// A builder for a `DELETE` statement.
#[derive(Debug, PartialEq, Clone)]
pub struct Delete<'a> {
    pub(crate) table: Table<'a>,
    pub(crate) conditions: Option<ConditionTree<'a>>,
}

impl<'a> Delete<'a> {
    /// Creates a new `DELETE` statement for the given table.
    ///
    /// ```rust
    /// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
    /// let query = Delete::from_table("users");
    /// let (sql, _) = Sqlite::build(query).unwrap();
    ///
    /// assert_eq!("DELETE FROM `users`", sql);
    /// ```
    #[inline]
    pub fn from_table<T>(table: T) -> Self
    where
        T: Into<Table<'a>>,
    {
        Delete {
            table: table.into(),
            conditions: None,
        }
    }

    /// Adds `WHERE` conditions to the query. See
    /// [Comparable](trait.Comparable.html#required-methods) for more
    /// examples.
    pub fn so_that<T>(mut self, conditions: T) -> Self
    where
        T: Into<ConditionTree<'a>>,
    {
        self.conditions = Some(conditions.into());
        self
    }
}
