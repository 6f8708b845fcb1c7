use crate::ast::*;

/// A builder for an `UPDATE` statement.
#[derive(Debug, PartialEq, Clone)]
pub struct Update<'a> {
    pub(crate) table: Table<'a>,
    pub(crate) columns: Vec<Column<'a>>,
    pub(crate) values: Vec<DatabaseValue<'a>>,
    pub(crate) conditions: Option<ConditionTree<'a>>,
}

impl<'a> Update<'a> {
    /// Creates the basis for an `UPDATE` statement to the given table.
    #[inline]
    pub fn table<T>(table: T) -> Self
    where
        T: Into<Table<'a>>,
    {
        Update {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            conditions: None,
        }
    }

    /// Add another column value assignment to the query.
    ///
    /// ```rust
    /// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
    /// let query = Update::table("users").set("foo", 10).set("bar", false);
    /// let (sql, params) = Sqlite::build(query).unwrap();
    ///
    /// assert_eq!("UPDATE `users` SET `foo` = ?, `bar` = ?", sql);
    /// assert_eq!(
    ///     vec![ParameterizedValue::from(10), ParameterizedValue::from(false)],
    ///     params,
    /// );
    /// ```
    pub fn set<K, V>(mut self, column: K, value: V) -> Update<'a>
    where
        K: Into<Column<'a>>,
        V: Into<DatabaseValue<'a>>,
    {
        self.columns.push(column.into());
        self.values.push(value.into());

        self
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
