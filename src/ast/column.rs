use crate::ast::{Aliasable, DatabaseValue, Table};
use std::borrow::Cow;

/// A column definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Column<'a> {
    pub name: Cow<'a, str>,
    pub(crate) table: Option<Table<'a>>,
    pub(crate) alias: Option<Cow<'a, str>>,
}

impl<'a> Column<'a> {
    /// Create a column definition.
    pub fn new<S>(name: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        Column {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Include the table name in the column expression.
    pub fn table<T>(mut self, table: T) -> Self
    where
        T: Into<Table<'a>>,
    {
        self.table = Some(table.into());
        self
    }

    /// Include the table name in the column expression, if table is defined.
    pub fn opt_table<T>(mut self, table: Option<T>) -> Self
    where
        T: Into<Table<'a>>,
    {
        if let Some(table) = table {
            self.table = Some(table.into());
        }

        self
    }
}

impl<'a> Aliasable<'a> for Column<'a> {
    type Target = Column<'a>;

    fn alias<T>(mut self, alias: T) -> Self::Target
    where
        T: Into<Cow<'a, str>>,
    {
        self.alias = Some(alias.into());
        self
    }
}

impl<'a> From<&'a str> for Column<'a> {
    fn from(name: &'a str) -> Self {
        Column::new(name)
    }
}

impl<'a> From<String> for Column<'a> {
    fn from(name: String) -> Self {
        Column::new(name)
    }
}

impl<'a, T> From<(T, &'a str)> for Column<'a>
where
    T: Into<Table<'a>>,
{
    fn from(pair: (T, &'a str)) -> Self {
        Column::new(pair.1).table(pair.0)
    }
}

impl<'a> From<(&'a str, &'a str, &'a str)> for Column<'a> {
    fn from(path: (&'a str, &'a str, &'a str)) -> Self {
        let table: Table<'a> = (path.0, path.1).into();
        Column::new(path.2).table(table)
    }
}

impl<'a> From<Column<'a>> for Cow<'a, str> {
    fn from(column: Column<'a>) -> Self {
        column.name
    }
}

impl<'a> Column<'a> {
    /// Converts the column into a value usable as a `DatabaseValue`.
    #[inline]
    pub fn into_value(self) -> DatabaseValue<'a> {
        self.into()
    }
}
