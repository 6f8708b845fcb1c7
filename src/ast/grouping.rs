use crate::ast::{Column, DatabaseValue};

/// A list of column definitions for the `GROUP BY` statement.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Grouping<'a>(pub Vec<DatabaseValue<'a>>);

impl<'a> Grouping<'a> {
    #[doc(hidden)]
    pub fn append(mut self, value: DatabaseValue<'a>) -> Self {
        self.0.push(value);
        self
    }

    #[inline]
    pub fn new(values: Vec<DatabaseValue<'a>>) -> Self {
        Self(values)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An item that can be used in the `GROUP BY` statement
pub trait IntoGroupByDefinition<'a> {
    fn into_group_by_definition(self) -> DatabaseValue<'a>;
}

impl<'a> IntoGroupByDefinition<'a> for &'a str {
    #[inline]
    fn into_group_by_definition(self) -> DatabaseValue<'a> {
        let column: Column<'a> = self.into();
        column.into()
    }
}

impl<'a> IntoGroupByDefinition<'a> for Column<'a> {
    #[inline]
    fn into_group_by_definition(self) -> DatabaseValue<'a> {
        self.into()
    }
}

impl<'a> IntoGroupByDefinition<'a> for DatabaseValue<'a> {
    #[inline]
    fn into_group_by_definition(self) -> DatabaseValue<'a> {
        self
    }
}
