use crate::ast::*;
use chrono::{DateTime, Utc};
use serde_json::{Number, Value};
use std::borrow::{Borrow, Cow};
use std::fmt;
use uuid::Uuid;

/// A value we must parameterize for the prepared statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterizedValue<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Text(Cow<'a, str>),
    Boolean(bool),
    Bytes(Cow<'a, [u8]>),
    Array(Vec<ParameterizedValue<'a>>),
    Json(Value),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
}

/// A wrapper for formatting a parameter list in logs.
pub struct Params<'a>(pub &'a [ParameterizedValue<'a>]);

impl fmt::Display for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.0.len();

        write!(f, "[")?;
        for (i, val) in self.0.iter().enumerate() {
            write!(f, "{val}")?;

            if i < (len - 1) {
                write!(f, ",")?;
            }
        }
        write!(f, "]")
    }
}

impl fmt::Display for ParameterizedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterizedValue::Null => write!(f, "null"),
            ParameterizedValue::Integer(val) => write!(f, "{val}"),
            ParameterizedValue::Real(val) => write!(f, "{val}"),
            ParameterizedValue::Text(val) => write!(f, "\"{val}\""),
            ParameterizedValue::Boolean(val) => write!(f, "{val}"),
            ParameterizedValue::Bytes(val) => write!(f, "<{} bytes blob>", val.len()),
            ParameterizedValue::Array(vals) => {
                let len = vals.len();

                write!(f, "[")?;
                for (i, val) in vals.iter().enumerate() {
                    write!(f, "{val}")?;

                    if i < (len - 1) {
                        write!(f, ",")?;
                    }
                }
                write!(f, "]")
            }
            ParameterizedValue::Json(val) => write!(f, "{val}"),
            ParameterizedValue::Uuid(val) => write!(f, "{val}"),
            ParameterizedValue::DateTime(val) => write!(f, "{val}"),
        }
    }
}

impl<'a> From<ParameterizedValue<'a>> for Value {
    fn from(pv: ParameterizedValue<'a>) -> Self {
        match pv {
            ParameterizedValue::Null => Value::Null,
            ParameterizedValue::Integer(i) => Value::Number(Number::from(i)),
            ParameterizedValue::Real(f) => match Number::from_f64(f) {
                Some(num) => Value::Number(num),
                None => Value::Null,
            },
            ParameterizedValue::Text(cow) => Value::String(cow.into_owned()),
            ParameterizedValue::Boolean(b) => Value::Bool(b),
            ParameterizedValue::Bytes(bytes) => Value::Array(
                bytes
                    .iter()
                    .map(|byte| Value::Number(Number::from(*byte)))
                    .collect(),
            ),
            ParameterizedValue::Array(v) => Value::Array(v.into_iter().map(Value::from).collect()),
            ParameterizedValue::Json(v) => v,
            ParameterizedValue::Uuid(u) => Value::String(u.hyphenated().to_string()),
            ParameterizedValue::DateTime(dt) => Value::String(dt.to_rfc3339()),
        }
    }
}

impl<'a> ParameterizedValue<'a> {
    /// `true` if the `ParameterizedValue` is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ParameterizedValue::Null)
    }

    /// `true` if the `ParameterizedValue` is text.
    pub fn is_text(&self) -> bool {
        matches!(self, ParameterizedValue::Text(_))
    }

    /// Returns a &str if the value is text, otherwise `None`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterizedValue::Text(cow) => Some(cow.borrow()),
            _ => None,
        }
    }

    /// Returns a cloned String if the value is text, otherwise `None`.
    pub fn to_string(&self) -> Option<String> {
        match self {
            ParameterizedValue::Text(cow) => Some(cow.to_string()),
            _ => None,
        }
    }

    /// Transforms the `ParameterizedValue` to a `String` if it's text,
    /// otherwise `None`.
    pub fn into_string(self) -> Option<String> {
        match self {
            ParameterizedValue::Text(cow) => Some(cow.into_owned()),
            _ => None,
        }
    }

    /// `true` if the `ParameterizedValue` is an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, ParameterizedValue::Integer(_))
    }

    /// Returns an i64 if the value is an integer, otherwise `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParameterizedValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// `true` if the `ParameterizedValue` is a real value.
    pub fn is_real(&self) -> bool {
        matches!(self, ParameterizedValue::Real(_))
    }

    /// Returns a f64 if the value is a real value, otherwise `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterizedValue::Real(f) => Some(*f),
            _ => None,
        }
    }

    /// `true` if the `ParameterizedValue` is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, ParameterizedValue::Boolean(_))
    }

    /// Returns a bool if the value is a boolean, otherwise `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParameterizedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// `true` if the `ParameterizedValue` is a byte blob.
    pub fn is_bytes(&self) -> bool {
        matches!(self, ParameterizedValue::Bytes(_))
    }

    /// Returns the bytes if the value is a byte blob, otherwise `None`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ParameterizedValue::Bytes(cow) => Some(cow.borrow()),
            _ => None,
        }
    }

    /// `true` if the `ParameterizedValue` is of UUID type.
    pub fn is_uuid(&self) -> bool {
        matches!(self, ParameterizedValue::Uuid(_))
    }

    /// Returns an UUID if the value is of UUID type, otherwise `None`.
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            ParameterizedValue::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// `true` if the `ParameterizedValue` is a DateTime.
    pub fn is_datetime(&self) -> bool {
        matches!(self, ParameterizedValue::DateTime(_))
    }

    /// Returns a DateTime if the value is a DateTime, otherwise `None`.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            ParameterizedValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// `true` if the `ParameterizedValue` is a JSON value.
    pub fn is_json(&self) -> bool {
        matches!(self, ParameterizedValue::Json(_))
    }

    /// Returns a reference to a JSON Value if of Json type, otherwise `None`.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ParameterizedValue::Json(j) => Some(j),
            _ => None,
        }
    }

    /// Transforms to a JSON Value if of Json type, otherwise `None`.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ParameterizedValue::Json(j) => Some(j),
            _ => None,
        }
    }
}

/// A value we can compare and use in database queries.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseValue<'a> {
    /// Anything that we must parameterize before querying
    Parameterized(ParameterizedValue<'a>),
    /// A database column
    Column(Box<Column<'a>>),
    /// Data in a row form, e.g. (1, 2, 3)
    Row(Row<'a>),
    /// A nested `SELECT` statement
    Select(Select<'a>),
    /// A database function call
    Function(Function<'a>),
    /// A qualified asterisk to a table
    Asterisk(Option<Table<'a>>),
}

/// A quick alias to create an asterisk to a table.
#[inline]
pub fn asterisk() -> DatabaseValue<'static> {
    DatabaseValue::Asterisk(None)
}

/*
 * Here be the parameterized value converters.
 */

impl<'a> From<&'a str> for ParameterizedValue<'a> {
    fn from(that: &'a str) -> Self {
        ParameterizedValue::Text(that.into())
    }
}

impl<'a> From<String> for ParameterizedValue<'a> {
    fn from(that: String) -> Self {
        ParameterizedValue::Text(that.into())
    }
}

impl<'a> From<Cow<'a, str>> for ParameterizedValue<'a> {
    fn from(that: Cow<'a, str>) -> Self {
        ParameterizedValue::Text(that)
    }
}

impl<'a> From<usize> for ParameterizedValue<'a> {
    #[inline]
    fn from(that: usize) -> Self {
        ParameterizedValue::Integer(that as i64)
    }
}

impl<'a> From<i32> for ParameterizedValue<'a> {
    #[inline]
    fn from(that: i32) -> Self {
        ParameterizedValue::Integer(i64::from(that))
    }
}

impl<'a> From<&'a [u8]> for ParameterizedValue<'a> {
    fn from(that: &'a [u8]) -> Self {
        ParameterizedValue::Bytes(that.into())
    }
}

impl<'a> From<Vec<u8>> for ParameterizedValue<'a> {
    fn from(that: Vec<u8>) -> Self {
        ParameterizedValue::Bytes(that.into())
    }
}

macro_rules! parameterized_value {
    ($kind:ident,$paramkind:ident) => {
        impl<'a> From<$kind> for ParameterizedValue<'a> {
            fn from(that: $kind) -> Self {
                ParameterizedValue::$paramkind(that)
            }
        }
    };
}

parameterized_value!(i64, Integer);
parameterized_value!(f64, Real);
parameterized_value!(bool, Boolean);
parameterized_value!(Value, Json);
parameterized_value!(Uuid, Uuid);

impl<'a> From<DateTime<Utc>> for ParameterizedValue<'a> {
    #[inline]
    fn from(that: DateTime<Utc>) -> Self {
        ParameterizedValue::DateTime(that)
    }
}

/*
 * Here be the database value converters.
 */

macro_rules! database_value {
    ($kind:ident,$paramkind:ident) => {
        impl<'a> From<$kind<'a>> for DatabaseValue<'a> {
            fn from(that: $kind<'a>) -> Self {
                DatabaseValue::$paramkind(that)
            }
        }
    };
}

database_value!(Row, Row);
database_value!(Function, Function);
database_value!(Select, Select);

impl<'a> From<Column<'a>> for DatabaseValue<'a> {
    fn from(that: Column<'a>) -> Self {
        DatabaseValue::Column(Box::new(that))
    }
}

impl<'a, T> From<T> for DatabaseValue<'a>
where
    T: Into<ParameterizedValue<'a>>,
{
    #[inline]
    fn from(p: T) -> Self {
        DatabaseValue::Parameterized(p.into())
    }
}

impl<'a, T> From<Vec<T>> for DatabaseValue<'a>
where
    T: Into<DatabaseValue<'a>>,
{
    #[inline]
    fn from(v: Vec<T>) -> Self {
        let row: Row<'a> = v.into();
        row.into()
    }
}

impl<'a> Comparable<'a> for DatabaseValue<'a> {
    #[inline]
    fn equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::Equals(Box::new(self), Box::new(comparison.into()))
    }

    #[inline]
    fn not_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::NotEquals(Box::new(self), Box::new(comparison.into()))
    }

    #[inline]
    fn less_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::LessThan(Box::new(self), Box::new(comparison.into()))
    }

    #[inline]
    fn less_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::LessThanOrEquals(Box::new(self), Box::new(comparison.into()))
    }

    #[inline]
    fn greater_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::GreaterThan(Box::new(self), Box::new(comparison.into()))
    }

    #[inline]
    fn greater_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::GreaterThanOrEquals(Box::new(self), Box::new(comparison.into()))
    }

    #[inline]
    fn in_selection<T>(self, selection: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::In(Box::new(self), Box::new(selection.into()))
    }

    #[inline]
    fn not_in_selection<T>(self, selection: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::NotIn(Box::new(self), Box::new(selection.into()))
    }

    #[inline]
    fn like<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        Compare::Like(Box::new(self), pattern.into())
    }

    #[inline]
    fn not_like<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        Compare::NotLike(Box::new(self), pattern.into())
    }

    #[inline]
    fn begins_with<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        Compare::BeginsWith(Box::new(self), pattern.into())
    }

    #[inline]
    fn not_begins_with<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        Compare::NotBeginsWith(Box::new(self), pattern.into())
    }

    #[inline]
    fn ends_into<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        Compare::EndsInto(Box::new(self), pattern.into())
    }

    #[inline]
    fn not_ends_into<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        Compare::NotEndsInto(Box::new(self), pattern.into())
    }

    #[inline]
    fn is_null(self) -> Compare<'a> {
        Compare::Null(Box::new(self))
    }

    #[inline]
    fn is_not_null(self) -> Compare<'a> {
        Compare::NotNull(Box::new(self))
    }

    #[inline]
    fn between<T, V>(self, left: T, right: V) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
        V: Into<DatabaseValue<'a>>,
    {
        Compare::Between(
            Box::new(self),
            Box::new(left.into()),
            Box::new(right.into()),
        )
    }

    #[inline]
    fn not_between<T, V>(self, left: T, right: V) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
        V: Into<DatabaseValue<'a>>,
    {
        Compare::NotBetween(
            Box::new(self),
            Box::new(left.into()),
            Box::new(right.into()),
        )
    }
}
