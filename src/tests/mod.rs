mod _logger;

#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
mod config;
#[cfg(feature = "sqlite")]
mod delete;
#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
mod deserialize;
mod error;
#[cfg(feature = "sqlite")]
mod functions;
#[cfg(feature = "sqlite")]
mod insert;
#[cfg(feature = "mysql")]
mod mysql;
#[cfg(feature = "postgres")]
mod postgres;
#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
mod result_set;
#[cfg(feature = "sqlite")]
mod select;
#[cfg(feature = "sqlite")]
mod sqlite;
#[cfg(feature = "sqlite")]
mod update;
