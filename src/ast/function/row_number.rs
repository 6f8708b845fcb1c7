use crate::ast::{Column, IntoOrderDefinition, Ordering};

/// A window function over a sorted and optionally partitioned set of rows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RowNumber<'a> {
    pub(crate) ordering: Ordering<'a>,
    pub(crate) partitioning: Vec<Column<'a>>,
}

impl<'a> RowNumber<'a> {
    /// Define the order of the row number. Is the row order if not set.
    pub fn order_by<T>(mut self, value: T) -> Self
    where
        T: IntoOrderDefinition<'a>,
    {
        self.ordering = self.ordering.append(value.into_order_definition());
        self
    }

    /// Define the partitioning of the row number.
    pub fn partition_by<T>(mut self, partition: T) -> Self
    where
        T: Into<Column<'a>>,
    {
        self.partitioning.push(partition.into());
        self
    }
}

/// A number from 1 to n in order of the window.
///
/// ```rust
/// # use flex_sql::{ast::*, visitor::{Visitor, Sqlite}};
/// let query = Select::from_table("users")
///     .column("id")
///     .value(row_number().order_by("created_at").partition_by("group_id"));
/// let (sql, _) = Sqlite::build(query).unwrap();
/// assert_eq!(
///     "SELECT `id`, ROW_NUMBER() OVER(PARTITION BY `group_id` ORDER BY `created_at`) FROM `users`",
///     sql
/// );
/// ```
#[inline]
pub fn row_number<'a>() -> RowNumber<'a> {
    RowNumber::default()
}
