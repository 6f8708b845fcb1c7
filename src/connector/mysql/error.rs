use crate::error::{DatabaseConstraint, Error, ErrorKind};
use sqlx::{error::DatabaseError, mysql::MySqlDatabaseError};

/// The identifier inside the first pair of single quotes of the message,
/// e.g. the `x` of `Unknown database 'x'`.
fn quoted_identifier(message: &str) -> String {
    message.split('\'').nth(1).unwrap_or_default().to_string()
}

pub(crate) fn map_error(e: &MySqlDatabaseError) -> Error {
    let code = e.number();

    match code {
        // Duplicate entry 'x' for key 'table.key_name'
        1062 => {
            let index = e
                .message()
                .rsplit('\'')
                .nth(1)
                .unwrap_or_default()
                .split('.')
                .last()
                .unwrap_or_default()
                .to_string();

            let mut builder = Error::builder(ErrorKind::UniqueConstraintViolation {
                constraint: DatabaseConstraint::Index(index),
            });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        // Column 'x' cannot be null / Field 'x' doesn't have a default value
        1048 | 1364 => {
            let column = quoted_identifier(e.message());

            let mut builder = Error::builder(ErrorKind::NullConstraintViolation {
                constraint: DatabaseConstraint::Fields(vec![column]),
            });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        1451 | 1452 => {
            let mut builder = Error::builder(ErrorKind::ForeignKeyConstraintViolation {
                constraint: DatabaseConstraint::ForeignKey,
            });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        1049 => {
            let mut builder = Error::builder(ErrorKind::DatabaseDoesNotExist {
                db_name: quoted_identifier(e.message()),
            });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        1007 => {
            let mut builder = Error::builder(ErrorKind::DatabaseAlreadyExists {
                db_name: quoted_identifier(e.message()),
            });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        1044 => {
            let mut builder = Error::builder(ErrorKind::DatabaseAccessDenied {
                db_name: quoted_identifier(e.message()),
            });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        1045 => {
            let mut builder = Error::builder(ErrorKind::AuthenticationFailed {
                user: quoted_identifier(e.message()),
            });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        1146 => {
            let table = quoted_identifier(e.message())
                .split('.')
                .last()
                .unwrap_or_default()
                .to_string();

            let mut builder = Error::builder(ErrorKind::TableDoesNotExist { table });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        1406 => {
            let mut builder = Error::builder(ErrorKind::LengthMismatch {
                column: Some(quoted_identifier(e.message())),
            });

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }

        _ => {
            let mut builder = Error::builder(ErrorKind::QueryError(e.to_string().into()));

            builder.set_original_code(code.to_string());
            builder.set_original_message(e.message());

            builder.build()
        }
    }
}
