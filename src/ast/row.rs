use crate::ast::DatabaseValue;

/// A list of values, e.g. to be used in an `IN` comparison or as a `VALUES`
/// tuple in an `INSERT`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row<'a> {
    pub values: Vec<DatabaseValue<'a>>,
}

impl<'a> Row<'a> {
    pub fn new() -> Self {
        Row { values: Vec::new() }
    }

    pub fn push<T>(mut self, value: T) -> Self
    where
        T: Into<DatabaseValue<'a>>,
    {
        self.values.push(value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for Row<'a> {
    type Item = DatabaseValue<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> From<Vec<T>> for Row<'a>
where
    T: Into<DatabaseValue<'a>>,
{
    fn from(vals: Vec<T>) -> Self {
        let mut row = Row::new();

        for val in vals {
            row = row.push(val);
        }

        row
    }
}

impl<'a, A, B> From<(A, B)> for Row<'a>
where
    A: Into<DatabaseValue<'a>>,
    B: Into<DatabaseValue<'a>>,
{
    fn from(vals: (A, B)) -> Self {
        Row::new().push(vals.0).push(vals.1)
    }
}

impl<'a, A, B, C> From<(A, B, C)> for Row<'a>
where
    A: Into<DatabaseValue<'a>>,
    B: Into<DatabaseValue<'a>>,
    C: Into<DatabaseValue<'a>>,
{
    fn from(vals: (A, B, C)) -> Self {
        Row::new().push(vals.0).push(vals.1).push(vals.2)
    }
}

impl<'a, A, B, C, D> From<(A, B, C, D)> for Row<'a>
where
    A: Into<DatabaseValue<'a>>,
    B: Into<DatabaseValue<'a>>,
    C: Into<DatabaseValue<'a>>,
    D: Into<DatabaseValue<'a>>,
{
    fn from(vals: (A, B, C, D)) -> Self {
        Row::new().push(vals.0).push(vals.1).push(vals.2).push(vals.3)
    }
}

impl<'a, A, B, C, D, E> From<(A, B, C, D, E)> for Row<'a>
where
    A: Into<DatabaseValue<'a>>,
    B: Into<DatabaseValue<'a>>,
    C: Into<DatabaseValue<'a>>,
    D: Into<DatabaseValue<'a>>,
    E: Into<DatabaseValue<'a>>,
{
    fn from(vals: (A, B, C, D, E)) -> Self {
        Row::new()
            .push(vals.0)
            .push(vals.1)
            .push(vals.2)
            .push(vals.3)
            .push(vals.4)
    }
}
