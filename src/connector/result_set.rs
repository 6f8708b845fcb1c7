use crate::ast::ParameterizedValue;
use serde_json::{Map, Value};
use std::{ops::Index, sync::Arc};

/// Encapsulates a set of results and their respective column names.
#[derive(Debug, Default)]
pub struct ResultSet {
    pub(crate) columns: Arc<Vec<String>>,
    pub(crate) rows: Vec<Vec<ParameterizedValue<'static>>>,
    pub(crate) last_insert_id: Option<u64>,
}

impl ResultSet {
    /// Creates a new instance, bound to the given column names and result
    /// rows.
    pub fn new(names: Vec<String>, rows: Vec<Vec<ParameterizedValue<'static>>>) -> Self {
        Self {
            columns: Arc::new(names),
            rows,
            last_insert_id: None,
        }
    }

    pub(crate) fn set_last_insert_id(&mut self, id: u64) {
        self.last_insert_id = Some(id);
    }

    /// The last id inserted, if available. Only works on SQLite and MySQL.
    pub fn last_insert_id(&self) -> Option<u64> {
        self.last_insert_id
    }

    /// The names of the columns, in the order they appear in the rows.
    pub fn columns(&self) -> &Vec<String> {
        &self.columns
    }

    /// The number of rows in the result set.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the result set holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the first row of the result set, if any.
    pub fn first(&self) -> Option<ResultRowRef<'_>> {
        self.get(0)
    }

    /// Returns a reference to a row in a given position.
    pub fn get(&self, index: usize) -> Option<ResultRowRef<'_>> {
        self.rows.get(index).map(|row| ResultRowRef {
            columns: Arc::clone(&self.columns),
            values: row,
        })
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultRow;
    type IntoIter = ResultSetIterator;

    fn into_iter(self) -> Self::IntoIter {
        ResultSetIterator {
            columns: self.columns,
            internal_iterator: self.rows.into_iter(),
        }
    }
}

/// Thin iterator for ResultSet rows.
pub struct ResultSetIterator {
    pub(crate) columns: Arc<Vec<String>>,
    pub(crate) internal_iterator: std::vec::IntoIter<Vec<ParameterizedValue<'static>>>,
}

impl Iterator for ResultSetIterator {
    type Item = ResultRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.internal_iterator.next().map(|row| ResultRow {
            columns: Arc::clone(&self.columns),
            values: row,
        })
    }
}

/// A single owned row of a result set.
#[derive(Debug, PartialEq)]
pub struct ResultRow {
    pub(crate) columns: Arc<Vec<String>>,
    pub(crate) values: Vec<ParameterizedValue<'static>>,
}

/// A reference to a row in a result set.
#[derive(Debug, PartialEq)]
pub struct ResultRowRef<'a> {
    pub(crate) columns: Arc<Vec<String>>,
    pub(crate) values: &'a Vec<ParameterizedValue<'static>>,
}

impl ResultRow {
    /// Gets a value with the given column name, if available.
    pub fn get(&self, name: &str) -> Option<&ParameterizedValue<'static>> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Gets a value in the given position, if available.
    pub fn at(&self, index: usize) -> Option<&ParameterizedValue<'static>> {
        self.values.get(index)
    }

    /// The number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the row holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<usize> for ResultRow {
    type Output = ParameterizedValue<'static>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl Index<&str> for ResultRow {
    type Output = ParameterizedValue<'static>;

    fn index(&self, index: &str) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!("No column found with the name {index}"),
        }
    }
}

impl<'a> ResultRowRef<'a> {
    /// Gets a value with the given column name, if available.
    pub fn get(&self, name: &str) -> Option<&ParameterizedValue<'static>> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Gets a value in the given position, if available.
    pub fn at(&self, index: usize) -> Option<&ParameterizedValue<'static>> {
        self.values.get(index)
    }
}

impl<'a> Index<usize> for ResultRowRef<'a> {
    type Output = ParameterizedValue<'static>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<'a> Index<&str> for ResultRowRef<'a> {
    type Output = ParameterizedValue<'static>;

    fn index(&self, index: &str) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!("No column found with the name {index}"),
        }
    }
}

impl From<ResultRow> for Value {
    fn from(row: ResultRow) -> Self {
        let columns = Arc::clone(&row.columns);
        let mut object = Map::new();

        for (idx, value) in row.values.into_iter().enumerate() {
            let name = columns
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("f{idx}"));

            object.insert(name, Value::from(value));
        }

        Value::Object(object)
    }
}

impl From<ResultSet> for Value {
    fn from(result_set: ResultSet) -> Self {
        Value::Array(result_set.into_iter().map(Value::from).collect())
    }
}
