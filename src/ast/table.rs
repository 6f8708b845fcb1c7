use crate::ast::Aliasable;
use std::borrow::Cow;

/// An object that can be queried: either a plain table name or a
/// database-qualified one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table<'a> {
    pub name: Cow<'a, str>,
    pub(crate) alias: Option<Cow<'a, str>>,
    pub(crate) database: Option<Cow<'a, str>>,
}

impl<'a> Table<'a> {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        Table {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Prefix the table reference with the database it belongs to.
    pub fn database<S>(mut self, database: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        self.database = Some(database.into());
        self
    }
}

impl<'a> Aliasable<'a> for Table<'a> {
    type Target = Table<'a>;

    fn alias<T>(mut self, alias: T) -> Self::Target
    where
        T: Into<Cow<'a, str>>,
    {
        self.alias = Some(alias.into());
        self
    }
}

impl<'a> From<&'a str> for Table<'a> {
    fn from(name: &'a str) -> Self {
        Table::new(name)
    }
}

impl<'a> From<String> for Table<'a> {
    fn from(name: String) -> Self {
        Table::new(name)
    }
}

impl<'a> From<(&'a str, &'a str)> for Table<'a> {
    fn from(pair: (&'a str, &'a str)) -> Self {
        Table::new(pair.1).database(pair.0)
    }
}

impl<'a> From<(String, String)> for Table<'a> {
    fn from(pair: (String, String)) -> Self {
        Table::new(pair.1).database(pair.0)
    }
}
