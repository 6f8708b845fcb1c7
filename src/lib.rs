//! # flex-sql
//!
//! A database client abstraction for reading and writing to a SQL database
//! when the database and the query shape are only known at runtime.
//!
//! ### Goals
//!
//! - Query generation when the database and conditions are not known at
//!   compile time.
//! - Parameterized queries, always. Values are bound, never interpolated.
//! - A modular design: a generic AST for query building and a visitor per
//!   database generating the correct SQL syntax.
//! - Database support behind feature flags.
//!
//! ### Non-goals
//!
//! - Database-level type-safety in query building or being an ORM.
//!
//! ## Databases
//!
//! - SQLite
//! - PostgreSQL
//! - MySQL
//!
//! ## Querying
//!
//! The [`Database`](struct.Database.html) client parses a connection URL,
//! manages a connection pool and executes queries built with the
//! [ast](ast/index.html) module:
//!
//! ```no_run
//! use flex_sql::{prelude::*, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), flex_sql::error::Error> {
//!     let db = Database::new("file:///tmp/example.db").await?;
//!     let result = db.select(Select::default().value(1)).await?;
//!
//!     assert_eq!(
//!         Some(1),
//!         result.into_iter().next().and_then(|row| row[0].as_i64()),
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building SQL strings
//!
//! The crate can be used as a plain SQL string builder with the
//! [ast](ast/index.html) and [visitor](visitor/index.html) modules. The AST
//! is generic for all databases; the visitor returns the query as a string
//! together with its parameters in bind order.
//!
//! ```
//! use flex_sql::{ast::*, visitor::{Sqlite, Visitor}};
//!
//! let conditions = "word"
//!     .equals("meow")
//!     .and("age".less_than(10))
//!     .and("paw".equals("warm"));
//!
//! let query = Select::from_table("naukio").so_that(conditions);
//! let (sql, params) = Sqlite::build(query).unwrap();
//!
//! assert_eq!(
//!     "SELECT `naukio`.* FROM `naukio` WHERE ((`word` = ? AND `age` < ?) AND `paw` = ?)",
//!     sql,
//! );
//!
//! assert_eq!(
//!     vec![
//!         ParameterizedValue::from("meow"),
//!         ParameterizedValue::from(10),
//!         ParameterizedValue::from("warm"),
//!     ],
//!     params,
//! );
//! ```

pub mod ast;
#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
pub mod connector;
pub mod error;
pub mod prelude;
#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
pub mod serde_support;
pub mod visitor;

#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
mod database_structs;
#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
pub use database_structs::*;

pub use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, error::Error>;

#[cfg(test)]
mod tests;
