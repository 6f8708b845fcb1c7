//! Error handling for database I/O, connections and query building.
//!
//! Every connector translates its native errors into [`Error`], so matching
//! on [`ErrorKind`] works the same way no matter which database is behind
//! the connection.

use std::{borrow::Cow, fmt, io, num};
use thiserror::Error;

#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
use sqlx::error::DatabaseError as _;

/// The constraint a constraint violation error refers to.
#[derive(Debug, PartialEq, Eq)]
pub enum DatabaseConstraint {
    /// The fields the constraint covers.
    Fields(Vec<String>),
    /// The name of the index the constraint covers.
    Index(String),
    ForeignKey,
}

impl fmt::Display for DatabaseConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(fields) => write!(f, "({})", fields.join(",")),
            Self::Index(index) => index.fmt(f),
            Self::ForeignKey => "FOREIGN KEY".fmt(f),
        }
    }
}

/// The error type for database I/O, connection handling and query
/// parameter construction.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
    original_code: Option<String>,
    original_message: Option<String>,
}

pub(crate) struct ErrorBuilder {
    kind: ErrorKind,
    original_code: Option<String>,
    original_message: Option<String>,
}

impl ErrorBuilder {
    pub(crate) fn set_original_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.original_code = Some(code.into());
        self
    }

    pub(crate) fn set_original_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.original_message = Some(message.into());
        self
    }

    pub(crate) fn build(self) -> Error {
        Error {
            kind: self.kind,
            original_code: self.original_code,
            original_message: self.original_message,
        }
    }
}

impl Error {
    pub(crate) fn builder(kind: ErrorKind) -> ErrorBuilder {
        ErrorBuilder {
            kind,
            original_code: None,
            original_message: None,
        }
    }

    /// The error code sent by the database, if available.
    pub fn original_code(&self) -> Option<&str> {
        self.original_code.as_deref()
    }

    /// The original error message sent by the database, if available.
    pub fn original_message(&self) -> Option<&str> {
        self.original_message.as_deref()
    }

    /// A more specific error type for matching.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("Error querying the database: {0}")]
    QueryError(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Database '{db_name}' does not exist.")]
    DatabaseDoesNotExist { db_name: String },

    #[error("Access denied to database '{db_name}'")]
    DatabaseAccessDenied { db_name: String },

    #[error("Database '{db_name}' already exists")]
    DatabaseAlreadyExists { db_name: String },

    #[error("Authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    #[error("Query returned no data")]
    NotFound,

    #[error("No such table: {table}")]
    TableDoesNotExist { table: String },

    #[error("Unique constraint failed: {constraint}")]
    UniqueConstraintViolation { constraint: DatabaseConstraint },

    #[error("Null constraint failed: {constraint}")]
    NullConstraintViolation { constraint: DatabaseConstraint },

    #[error("Foreign key constraint failed: {constraint}")]
    ForeignKeyConstraintViolation { constraint: DatabaseConstraint },

    #[error("Error creating a database connection.")]
    ConnectionError(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Error reading the column value: {0}")]
    ColumnReadFailure(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Error accessing result set, index out of bounds: {0}")]
    ResultIndexOutOfBounds(usize),

    #[error("Error accessing result set, column not found: {column}")]
    ColumnNotFound { column: String },

    #[error("Error accessing result set, type mismatch, expected: {0}")]
    ResultTypeMismatch(&'static str),

    #[error("Error parsing connection string: {0}")]
    DatabaseUrlIsInvalid(String),

    #[error("Conversion failed: {0}")]
    ConversionError(Cow<'static, str>),

    #[error("The value provided for column {column:?} is too long.")]
    LengthMismatch { column: Option<String> },

    #[error("The provided arguments are not supported")]
    InvalidConnectionArguments,

    #[error("Error in an I/O operation: {0}")]
    IoError(io::Error),

    #[error("Connect timed out ({0})")]
    ConnectTimeout(String),

    #[error("Timed out fetching a connection from the pool")]
    PoolTimeout,

    #[error("Operation timed out ({0})")]
    Timeout(String),

    #[error("Error opening a TLS connection. {message}")]
    TlsError { message: String },

    #[error("Value out of range error. {message}")]
    ValueOutOfRange { message: String },

    #[error("Deserializing a result row: {0}")]
    FromRowError(serde_json::Error),
}

impl ErrorKind {
    pub(crate) fn conversion(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::ConversionError(msg.into())
    }

    #[cfg(feature = "mysql")]
    pub(crate) fn value_out_of_range(msg: impl Into<String>) -> Self {
        Self::ValueOutOfRange { message: msg.into() }
    }
}

impl From<Error> for ErrorKind {
    fn from(e: Error) -> Self {
        e.kind
    }
}

impl From<std::fmt::Error> for Error {
    fn from(_: std::fmt::Error) -> Self {
        Self::builder(ErrorKind::conversion(
            "Problems writing AST into a query string.",
        ))
        .build()
    }
}

impl From<num::TryFromIntError> for Error {
    fn from(_: num::TryFromIntError) -> Self {
        Self::builder(ErrorKind::conversion(
            "Couldn't convert an integer (possible overflow).",
        ))
        .build()
    }
}

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Self {
        Self::builder(ErrorKind::conversion("Malformed JSON data.")).build()
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Self::builder(ErrorKind::DatabaseUrlIsInvalid(e.to_string())).build()
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Self::builder(ErrorKind::IoError(e)).build()
    }
}

impl From<tokio::time::error::Elapsed> for Error {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        let kind = ErrorKind::Timeout("query timeout".into());

        let mut builder = Error::builder(kind);
        builder.set_original_message("The operation timed out.");

        builder.build()
    }
}

impl From<num::ParseIntError> for Error {
    fn from(_: num::ParseIntError) -> Error {
        Self::builder(ErrorKind::conversion("Couldn't convert data to an integer")).build()
    }
}

impl From<std::str::ParseBoolError> for Error {
    fn from(_: std::str::ParseBoolError) -> Error {
        Self::builder(ErrorKind::conversion("Couldn't convert data to a boolean")).build()
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Error {
        Self::builder(ErrorKind::conversion("Couldn't convert data to UTF-8")).build()
    }
}

#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mysql"))]
impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::builder(ErrorKind::NotFound).build(),

            sqlx::Error::ColumnNotFound(column) => {
                Self::builder(ErrorKind::ColumnNotFound { column }).build()
            }

            sqlx::Error::ColumnIndexOutOfBounds { index, .. } => {
                Self::builder(ErrorKind::ResultIndexOutOfBounds(index)).build()
            }

            sqlx::Error::PoolTimedOut => Self::builder(ErrorKind::PoolTimeout).build(),

            sqlx::Error::Io(io_error) => io_error.into(),

            sqlx::Error::Tls(e) => {
                let message = e.to_string();
                Self::builder(ErrorKind::TlsError { message }).build()
            }

            sqlx::Error::Configuration(e) => {
                Self::builder(ErrorKind::DatabaseUrlIsInvalid(e.to_string())).build()
            }

            sqlx::Error::ColumnDecode { source, .. } => {
                Self::builder(ErrorKind::ColumnReadFailure(source)).build()
            }

            sqlx::Error::Decode(source) => {
                Self::builder(ErrorKind::ColumnReadFailure(source)).build()
            }

            sqlx::Error::Database(e) => {
                #[cfg(feature = "sqlite")]
                if let Some(sqlite_error) = e.try_downcast_ref::<sqlx::sqlite::SqliteError>() {
                    return crate::connector::sqlite_error_to_error(sqlite_error);
                }

                #[cfg(feature = "postgres")]
                if let Some(pg_error) = e.try_downcast_ref::<sqlx::postgres::PgDatabaseError>() {
                    return crate::connector::postgres_error_to_error(pg_error);
                }

                #[cfg(feature = "mysql")]
                if let Some(mysql_error) = e.try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>() {
                    return crate::connector::mysql_error_to_error(mysql_error);
                }

                let mut builder = Self::builder(ErrorKind::QueryError(e.to_string().into()));

                if let Some(code) = e.code() {
                    builder.set_original_code(code.into_owned());
                }

                builder.set_original_message(e.message());
                builder.build()
            }

            e => Self::builder(ErrorKind::QueryError(Box::new(e))).build(),
        }
    }
}
