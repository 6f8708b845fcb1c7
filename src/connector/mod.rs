//! The connectors executing AST queries against a live database.
//!
//! Each connector renders the query with its visitor, binds the parameters
//! through sqlx and translates the native errors into the crate's
//! [`Error`](../error/struct.Error.html) type.

mod bind;
mod metrics;
mod queryable;
mod result_set;
mod timeout;
mod transaction;

#[cfg(feature = "mysql")]
pub(crate) mod mysql;
#[cfg(feature = "postgres")]
pub(crate) mod postgres;
#[cfg(feature = "sqlite")]
pub(crate) mod sqlite;

pub use queryable::{Queryable, TransactionCapable};
pub use result_set::{ResultRow, ResultRowRef, ResultSet, ResultSetIterator};
pub use transaction::Transaction;

#[cfg(feature = "mysql")]
pub use mysql::{Mysql, MysqlParams};
#[cfg(feature = "postgres")]
pub use postgres::{PostgreSql, PostgresParams};
#[cfg(feature = "sqlite")]
pub use sqlite::{Sqlite, SqliteParams};

#[cfg(feature = "mysql")]
pub(crate) use mysql::error::map_error as mysql_error_to_error;
#[cfg(feature = "postgres")]
pub(crate) use postgres::error::map_error as postgres_error_to_error;
#[cfg(feature = "sqlite")]
pub(crate) use sqlite::error::map_error as sqlite_error_to_error;

pub(crate) use transaction::TransactionInner;
