use crate::error::{Error, ErrorKind};
use sqlx::sqlite::SqliteConnectOptions;
use std::{path::Path, time::Duration};

/// Connection parameters parsed from an SQLite connection string.
///
/// Accepted forms are `file:dev.db`, `sqlite:dev.db` and a plain path, with
/// optional parameters in the query string.
#[derive(Debug, Clone)]
pub struct SqliteParams {
    pub connection_limit: Option<u32>,
    /// This is not a `PathBuf` because values such as `:memory:` are valid
    /// inputs that are not paths.
    pub file_path: String,
    pub socket_timeout: Option<Duration>,
    pub statement_cache_size: usize,
}

impl TryFrom<&str> for SqliteParams {
    type Error = Error;

    fn try_from(path: &str) -> crate::Result<Self> {
        let path = if let Some(stripped) = path.strip_prefix("file:") {
            stripped.trim_start_matches("//")
        } else {
            path.trim_start_matches("sqlite:").trim_start_matches("//")
        };

        let mut path_parts = path.split('?');
        let file_path = path_parts.next().unwrap_or_default();

        if Path::new(file_path).is_dir() {
            return Err(
                Error::builder(ErrorKind::DatabaseUrlIsInvalid(file_path.to_string())).build(),
            );
        }

        let mut connection_limit = None;
        let mut socket_timeout = None;
        let mut statement_cache_size = 500;

        if let Some(params) = path_parts.next() {
            for kv in params.split('&') {
                let mut splitted = kv.split('=');
                let k = splitted.next().unwrap_or_default();
                let v = splitted.next().unwrap_or_default();

                match k {
                    "connection_limit" => {
                        let as_int: u32 = v.parse().map_err(|_| {
                            Error::builder(ErrorKind::InvalidConnectionArguments).build()
                        })?;

                        connection_limit = Some(as_int);
                    }
                    "socket_timeout" => {
                        let as_int: u64 = v.parse().map_err(|_| {
                            Error::builder(ErrorKind::InvalidConnectionArguments).build()
                        })?;

                        socket_timeout = Some(Duration::from_secs(as_int));
                    }
                    "statement_cache_size" => {
                        statement_cache_size = v.parse().map_err(|_| {
                            Error::builder(ErrorKind::InvalidConnectionArguments).build()
                        })?;
                    }
                    _ => {
                        tracing::warn!(
                            message = "Discarding connection string param",
                            param = k
                        );
                    }
                }
            }
        }

        Ok(Self {
            connection_limit,
            file_path: file_path.to_owned(),
            socket_timeout,
            statement_cache_size,
        })
    }
}

impl SqliteParams {
    pub(crate) fn connect_options(&self) -> SqliteConnectOptions {
        let options = SqliteConnectOptions::new()
            .statement_cache_capacity(self.statement_cache_size)
            .foreign_keys(true)
            .create_if_missing(true);

        if self.file_path == ":memory:" {
            options.in_memory(true)
        } else {
            options.filename(&self.file_path)
        }
    }
}
