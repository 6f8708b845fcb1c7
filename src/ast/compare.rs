use crate::ast::{Column, ConditionTree, DatabaseValue, Expression};
use std::borrow::Cow;

/// For modeling comparison expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Compare<'a> {
    /// `left = right`
    Equals(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left <> right`
    NotEquals(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left < right`
    LessThan(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left <= right`
    LessThanOrEquals(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left > right`
    GreaterThan(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left >= right`
    GreaterThanOrEquals(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left IN (..)`
    In(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left NOT IN (..)`
    NotIn(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left LIKE %..%`
    Like(Box<DatabaseValue<'a>>, Cow<'a, str>),
    /// `left NOT LIKE %..%`
    NotLike(Box<DatabaseValue<'a>>, Cow<'a, str>),
    /// `left LIKE ..%`
    BeginsWith(Box<DatabaseValue<'a>>, Cow<'a, str>),
    /// `left NOT LIKE ..%`
    NotBeginsWith(Box<DatabaseValue<'a>>, Cow<'a, str>),
    /// `left LIKE %..`
    EndsInto(Box<DatabaseValue<'a>>, Cow<'a, str>),
    /// `left NOT LIKE %..`
    NotEndsInto(Box<DatabaseValue<'a>>, Cow<'a, str>),
    /// `value IS NULL`
    Null(Box<DatabaseValue<'a>>),
    /// `value IS NOT NULL`
    NotNull(Box<DatabaseValue<'a>>),
    /// `value BETWEEN left AND right`
    Between(
        Box<DatabaseValue<'a>>,
        Box<DatabaseValue<'a>>,
        Box<DatabaseValue<'a>>,
    ),
    /// `value NOT BETWEEN left AND right`
    NotBetween(
        Box<DatabaseValue<'a>>,
        Box<DatabaseValue<'a>>,
        Box<DatabaseValue<'a>>,
    ),
}

impl<'a> From<Compare<'a>> for ConditionTree<'a> {
    fn from(cmp: Compare<'a>) -> Self {
        ConditionTree::single(Expression::Compare(cmp))
    }
}

impl<'a> From<Compare<'a>> for Expression<'a> {
    fn from(cmp: Compare<'a>) -> Self {
        Expression::Compare(cmp)
    }
}

/// An item that can be compared against other values in the database.
pub trait Comparable<'a> {
    /// Tests if both sides are the same value.
    fn equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if both sides are not the same value.
    fn not_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is smaller than the right side.
    fn less_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is smaller than the right side or the same.
    fn less_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is bigger than the right side.
    fn greater_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is bigger than the right side or the same.
    fn greater_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is included in the right side collection.
    fn in_selection<T>(self, selection: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is not included in the right side collection.
    fn not_in_selection<T>(self, selection: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side includes the right side string.
    fn like<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Tests if the left side does not include the right side string.
    fn not_like<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Tests if the left side starts with the right side string.
    fn begins_with<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Tests if the left side doesn't start with the right side string.
    fn not_begins_with<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Tests if the left side ends into the right side string.
    fn ends_into<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Tests if the left side does not end into the right side string.
    fn not_ends_into<T>(self, pattern: T) -> Compare<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Tests if the left side is `NULL`.
    fn is_null(self) -> Compare<'a>;

    /// Tests if the left side is not `NULL`.
    fn is_not_null(self) -> Compare<'a>;

    /// Tests if the value is between two given values.
    fn between<T, V>(self, left: T, right: V) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
        V: Into<DatabaseValue<'a>>;

    /// Tests if the value is not between two given values.
    fn not_between<T, V>(self, left: T, right: V) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
        V: Into<DatabaseValue<'a>>;
}

macro_rules! delegate_to_database_value {
    () => {
        #[inline]
        fn equals<T>(self, comparison: T) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.equals(comparison)
        }

        #[inline]
        fn not_equals<T>(self, comparison: T) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.not_equals(comparison)
        }

        #[inline]
        fn less_than<T>(self, comparison: T) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.less_than(comparison)
        }

        #[inline]
        fn less_than_or_equals<T>(self, comparison: T) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.less_than_or_equals(comparison)
        }

        #[inline]
        fn greater_than<T>(self, comparison: T) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.greater_than(comparison)
        }

        #[inline]
        fn greater_than_or_equals<T>(self, comparison: T) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.greater_than_or_equals(comparison)
        }

        #[inline]
        fn in_selection<T>(self, selection: T) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.in_selection(selection)
        }

        #[inline]
        fn not_in_selection<T>(self, selection: T) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.not_in_selection(selection)
        }

        #[inline]
        fn like<T>(self, pattern: T) -> Compare<'a>
        where
            T: Into<Cow<'a, str>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.like(pattern)
        }

        #[inline]
        fn not_like<T>(self, pattern: T) -> Compare<'a>
        where
            T: Into<Cow<'a, str>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.not_like(pattern)
        }

        #[inline]
        fn begins_with<T>(self, pattern: T) -> Compare<'a>
        where
            T: Into<Cow<'a, str>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.begins_with(pattern)
        }

        #[inline]
        fn not_begins_with<T>(self, pattern: T) -> Compare<'a>
        where
            T: Into<Cow<'a, str>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.not_begins_with(pattern)
        }

        #[inline]
        fn ends_into<T>(self, pattern: T) -> Compare<'a>
        where
            T: Into<Cow<'a, str>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.ends_into(pattern)
        }

        #[inline]
        fn not_ends_into<T>(self, pattern: T) -> Compare<'a>
        where
            T: Into<Cow<'a, str>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.not_ends_into(pattern)
        }

        #[inline]
        fn is_null(self) -> Compare<'a> {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.is_null()
        }

        #[inline]
        fn is_not_null(self) -> Compare<'a> {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.is_not_null()
        }

        #[inline]
        fn between<T, V>(self, left: T, right: V) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
            V: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.between(left, right)
        }

        #[inline]
        fn not_between<T, V>(self, left: T, right: V) -> Compare<'a>
        where
            T: Into<DatabaseValue<'a>>,
            V: Into<DatabaseValue<'a>>,
        {
            let col: Column<'a> = self.into();
            let value: DatabaseValue<'a> = col.into();
            value.not_between(left, right)
        }
    };
}

impl<'a> Comparable<'a> for Column<'a> {
    delegate_to_database_value!();
}

impl<'a> Comparable<'a> for &'a str {
    delegate_to_database_value!();
}

impl<'a> Comparable<'a> for (&'a str, &'a str) {
    delegate_to_database_value!();
}
