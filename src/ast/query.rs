use crate::ast::{Delete, Insert, Select, Update};
use std::borrow::Cow;

/// A database query
#[derive(Debug, Clone, PartialEq)]
pub enum Query<'a> {
    Select(Select<'a>),
    Insert(Box<Insert<'a>>),
    Update(Box<Update<'a>>),
    Delete(Box<Delete<'a>>),
    /// An already rendered query, executed as-is without parameters.
    Raw(Cow<'a, str>),
}

impl<'a> From<Select<'a>> for Query<'a> {
    #[inline]
    fn from(sel: Select<'a>) -> Query<'a> {
        Query::Select(sel)
    }
}

impl<'a> From<Insert<'a>> for Query<'a> {
    #[inline]
    fn from(ins: Insert<'a>) -> Query<'a> {
        Query::Insert(Box::new(ins))
    }
}

impl<'a> From<Update<'a>> for Query<'a> {
    #[inline]
    fn from(upd: Update<'a>) -> Query<'a> {
        Query::Update(Box::new(upd))
    }
}

impl<'a> From<Delete<'a>> for Query<'a> {
    #[inline]
    fn from(del: Delete<'a>) -> Query<'a> {
        Query::Delete(Box::new(del))
    }
}

impl<'a> From<&'a str> for Query<'a> {
    #[inline]
    fn from(raw: &'a str) -> Query<'a> {
        Query::Raw(raw.into())
    }
}

impl<'a> From<String> for Query<'a> {
    #[inline]
    fn from(raw: String) -> Query<'a> {
        Query::Raw(raw.into())
    }
}

impl<'a> Query<'a> {
    pub fn is_select(&self) -> bool {
        matches!(self, Query::Select(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Query::Insert(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Query::Update(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Query::Delete(_))
    }
}
