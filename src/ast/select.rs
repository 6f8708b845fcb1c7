use crate::ast::*;

/// A builder for a `SELECT` statement.
#[derive(Debug, PartialEq, Default, Clone)]
pub struct Select<'a> {
    pub(crate) table: Option<Table<'a>>,
    pub(crate) extra_tables: Vec<Table<'a>>,
    pub(crate) columns: Vec<DatabaseValue<'a>>,
    pub(crate) conditions: Option<ConditionTree<'a>>,
    pub(crate) ordering: Ordering<'a>,
    pub(crate) grouping: Grouping<'a>,
    pub(crate) having: Option<ConditionTree<'a>>,
    pub(crate) joins: Vec<Join<'a>>,
    pub(crate) limit: Option<usize>,
    pub(crate) offset: Option<usize>,
    pub(crate) distinct: bool,
}

impl<'a> Select<'a> {
    /// Creates a new `SELECT` statement for the given table.
    ///
    /// ```rust
    /// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
    /// let query = Select::from_table("users");
    /// let (sql, _) = Sqlite::build(query).unwrap();
    ///
    /// assert_eq!("SELECT `users`.* FROM `users`", sql);
    /// ```
    #[inline]
    pub fn from_table<T>(table: T) -> Self
    where
        T: Into<Table<'a>>,
    {
        Select {
            table: Some(table.into()),
            ..Default::default()
        }
    }

    /// Adds a table to be queried with the `SELECT` statement.
    pub fn and_from<T>(mut self, table: T) -> Self
    where
        T: Into<Table<'a>>,
    {
        self.extra_tables.push(table.into());
        self
    }

    /// Selects a static value as the column.
    ///
    /// ```rust
    /// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
    /// let query = Select::default().value(1);
    /// let (sql, params) = Sqlite::build(query).unwrap();
    ///
    /// assert_eq!("SELECT ?", sql);
    /// assert_eq!(vec![ParameterizedValue::from(1)], params);
    /// ```
    pub fn value<T>(mut self, value: T) -> Self
    where
        T: Into<DatabaseValue<'a>>,
    {
        self.columns.push(value.into());
        self
    }

    /// Adds a column to be selected.
    pub fn column<T>(mut self, column: T) -> Self
    where
        T: Into<Column<'a>>,
    {
        self.columns.push(column.into().into());
        self
    }

    /// A bulk method to select multiple columns.
    pub fn columns<T>(mut self, columns: Vec<T>) -> Self
    where
        T: Into<Column<'a>>,
    {
        self.columns = columns.into_iter().map(|c| c.into().into()).collect();
        self
    }

    /// Adds `WHERE` conditions to the query, replacing the previously set
    /// conditions. See [Comparable](trait.Comparable.html#required-methods)
    /// for more examples.
    ///
    /// ```rust
    /// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
    /// let query = Select::from_table("users").so_that("foo".equals("bar"));
    /// let (sql, params) = Sqlite::build(query).unwrap();
    ///
    /// assert_eq!("SELECT `users`.* FROM `users` WHERE `foo` = ?", sql);
    /// assert_eq!(vec![ParameterizedValue::from("bar")], params);
    /// ```
    pub fn so_that<T>(mut self, conditions: T) -> Self
    where
        T: Into<ConditionTree<'a>>,
    {
        self.conditions = Some(conditions.into());
        self
    }

    /// Adds an additional `WHERE` condition, combined with the previous ones
    /// with `AND`.
    pub fn and_where<T>(mut self, conditions: T) -> Self
    where
        T: Into<ConditionTree<'a>>,
    {
        match self.conditions.take() {
            Some(previous) => {
                self.conditions = Some(previous.and(conditions.into()));
                self
            }
            None => self.so_that(conditions),
        }
    }

    /// Adds an additional `WHERE` condition, combined with the previous ones
    /// with `OR`.
    pub fn or_where<T>(mut self, conditions: T) -> Self
    where
        T: Into<ConditionTree<'a>>,
    {
        match self.conditions.take() {
            Some(previous) => {
                self.conditions = Some(previous.or(conditions.into()));
                self
            }
            None => self.so_that(conditions),
        }
    }

    /// Adds `INNER JOIN` clause to the query.
    ///
    /// ```rust
    /// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
    /// let join = "posts".on(("posts", "visible").equals(true));
    /// let query = Select::from_table("users").inner_join(join);
    /// let (sql, params) = Sqlite::build(query).unwrap();
    ///
    /// assert_eq!(
    ///     "SELECT `users`.* FROM `users` INNER JOIN `posts` ON `posts`.`visible` = ?",
    ///     sql
    /// );
    /// assert_eq!(vec![ParameterizedValue::from(true)], params);
    /// ```
    pub fn inner_join<J>(mut self, join: J) -> Self
    where
        J: Into<JoinData<'a>>,
    {
        self.joins.push(Join::Inner(join.into()));
        self
    }

    /// Adds `LEFT OUTER JOIN` clause to the query.
    pub fn left_outer_join<J>(mut self, join: J) -> Self
    where
        J: Into<JoinData<'a>>,
    {
        self.joins.push(Join::LeftOuter(join.into()));
        self
    }

    /// Adds an ordering to the `ORDER BY` section.
    pub fn order_by<T>(mut self, value: T) -> Self
    where
        T: IntoOrderDefinition<'a>,
    {
        self.ordering = self.ordering.append(value.into_order_definition());
        self
    }

    /// Adds a grouping to the `GROUP BY` section.
    pub fn group_by<T>(mut self, value: T) -> Self
    where
        T: IntoGroupByDefinition<'a>,
    {
        self.grouping = self.grouping.append(value.into_group_by_definition());
        self
    }

    /// Adds a `HAVING` condition to the query, used together with `GROUP BY`.
    pub fn having<T>(mut self, conditions: T) -> Self
    where
        T: Into<ConditionTree<'a>>,
    {
        self.having = Some(conditions.into());
        self
    }

    /// Sets the `LIMIT` value.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the `OFFSET` value.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Makes the select return only distinct rows.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}
