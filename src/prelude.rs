//! A "prelude" for users of the crate.

pub use crate::ast::*;
pub use crate::visitor::Visitor;

#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
pub use crate::connector::{
    Queryable, ResultRow, ResultRowRef, ResultSet, Transaction, TransactionCapable,
};

#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
pub use crate::{Builder, ConnectionInfo, Database};
