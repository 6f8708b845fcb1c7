use crate::ast::{Compare, ConditionTree, DatabaseValue};

/// An expression we can compare and use in database queries.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression<'a> {
    /// A tree of expressions to evaluate from the deepest value to up
    ConditionTree(ConditionTree<'a>),
    /// A comparison expression
    Compare(Compare<'a>),
    /// A single value, column, row or a nested select
    Value(DatabaseValue<'a>),
}

impl<'a, T> From<T> for Expression<'a>
where
    T: Into<DatabaseValue<'a>>,
{
    #[inline]
    fn from(that: T) -> Self {
        Expression::Value(that.into())
    }
}
