use crate::error::{Error, ErrorKind};
use std::fmt;

#[cfg(feature = "mysql")]
use crate::connector::MysqlParams;
#[cfg(feature = "postgres")]
use crate::connector::PostgresParams;
#[cfg(feature = "sqlite")]
use crate::connector::SqliteParams;

/// General information about the target of a connection URL, parsed
/// upfront so it is available without a live connection.
#[derive(Debug, Clone)]
pub enum ConnectionInfo {
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteParams),
    #[cfg(feature = "postgres")]
    Postgres(PostgresParams),
    #[cfg(feature = "mysql")]
    Mysql(MysqlParams),
}

impl ConnectionInfo {
    /// Parse the connection string, picking the database from the URL
    /// scheme. `sqlite:` and `file:` open an SQLite database, `postgres:`
    /// and `postgresql:` a PostgreSQL database and `mysql:` a MySQL
    /// database.
    pub fn from_url(url: &str) -> crate::Result<Self> {
        let scheme = url.split(':').next().unwrap_or_default();

        match scheme {
            #[cfg(feature = "sqlite")]
            "file" | "sqlite" => Ok(ConnectionInfo::Sqlite(SqliteParams::try_from(url)?)),
            #[cfg(feature = "postgres")]
            "postgres" | "postgresql" => {
                Ok(ConnectionInfo::Postgres(PostgresParams::try_from(url)?))
            }
            #[cfg(feature = "mysql")]
            "mysql" => Ok(ConnectionInfo::Mysql(MysqlParams::try_from(url)?)),
            scheme => Err(Error::builder(ErrorKind::DatabaseUrlIsInvalid(format!(
                "Unsupported connection URL scheme: {scheme}"
            )))
            .build()),
        }
    }

    /// The name of the SQL flavour behind the connection.
    pub fn sql_family(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            ConnectionInfo::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            ConnectionInfo::Postgres(_) => "postgres",
            #[cfg(feature = "mysql")]
            ConnectionInfo::Mysql(_) => "mysql",
        }
    }

    /// The connection limit requested in the URL, if any.
    pub fn connection_limit(&self) -> Option<u32> {
        match self {
            #[cfg(feature = "sqlite")]
            ConnectionInfo::Sqlite(params) => params.connection_limit,
            #[cfg(feature = "postgres")]
            ConnectionInfo::Postgres(params) => params.connection_limit,
            #[cfg(feature = "mysql")]
            ConnectionInfo::Mysql(params) => params.connection_limit,
        }
    }

    /// The timeout for checking a connection out of the pool requested in
    /// the URL, if any.
    pub fn pool_timeout(&self) -> Option<std::time::Duration> {
        match self {
            #[cfg(feature = "sqlite")]
            ConnectionInfo::Sqlite(_) => None,
            #[cfg(feature = "postgres")]
            ConnectionInfo::Postgres(params) => params.pool_timeout,
            #[cfg(feature = "mysql")]
            ConnectionInfo::Mysql(params) => params.pool_timeout,
        }
    }
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "sqlite")]
            ConnectionInfo::Sqlite(params) => write!(f, "{}", params.file_path),
            #[cfg(feature = "postgres")]
            ConnectionInfo::Postgres(params) => {
                write!(f, "{}:{}/{}", params.host, params.port, params.dbname)
            }
            #[cfg(feature = "mysql")]
            ConnectionInfo::Mysql(params) => {
                write!(f, "{}:{}/{}", params.host, params.port, params.dbname)
            }
        }
    }
}
