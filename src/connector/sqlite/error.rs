use crate::error::{DatabaseConstraint, Error, ErrorKind};
use sqlx::{error::DatabaseError, sqlite::SqliteError};

fn constraint_fields(message: &str) -> Vec<String> {
    // "UNIQUE constraint failed: users.name, users.email"
    message
        .split(": ")
        .nth(1)
        .map(|fields| {
            fields
                .split(", ")
                .map(|field| field.split('.').last().unwrap_or(field).to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn map_error(e: &SqliteError) -> Error {
    match e.code().map(|code| code.into_owned()) {
        // SQLITE_CONSTRAINT_UNIQUE and SQLITE_CONSTRAINT_PRIMARYKEY
        Some(code) if code == "2067" || code == "1555" => {
            let mut builder = Error::builder(ErrorKind::UniqueConstraintViolation {
                constraint: DatabaseConstraint::Fields(constraint_fields(e.message())),
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        // SQLITE_CONSTRAINT_NOTNULL
        Some(code) if code == "1299" => {
            let mut builder = Error::builder(ErrorKind::NullConstraintViolation {
                constraint: DatabaseConstraint::Fields(constraint_fields(e.message())),
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        // SQLITE_CONSTRAINT_FOREIGNKEY
        Some(code) if code == "787" => {
            let mut builder = Error::builder(ErrorKind::ForeignKeyConstraintViolation {
                constraint: DatabaseConstraint::ForeignKey,
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        // SQLITE_BUSY and its extended codes
        Some(code) if code == "5" || code == "261" || code == "517" => {
            let mut builder =
                Error::builder(ErrorKind::Timeout("SQLite database is busy".into()));

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        Some(code) => {
            let message = e.message().to_string();

            if message.starts_with("UNIQUE constraint failed") {
                let mut builder = Error::builder(ErrorKind::UniqueConstraintViolation {
                    constraint: DatabaseConstraint::Fields(constraint_fields(&message)),
                });

                builder.set_original_code(code);
                builder.set_original_message(message);

                builder.build()
            } else if message.starts_with("NOT NULL constraint failed") {
                let mut builder = Error::builder(ErrorKind::NullConstraintViolation {
                    constraint: DatabaseConstraint::Fields(constraint_fields(&message)),
                });

                builder.set_original_code(code);
                builder.set_original_message(message);

                builder.build()
            } else if message.starts_with("FOREIGN KEY constraint failed") {
                let mut builder = Error::builder(ErrorKind::ForeignKeyConstraintViolation {
                    constraint: DatabaseConstraint::ForeignKey,
                });

                builder.set_original_code(code);
                builder.set_original_message(message);

                builder.build()
            } else if message.starts_with("no such table") {
                let table = message
                    .split(": ")
                    .last()
                    .unwrap_or_default()
                    .to_string();

                let mut builder = Error::builder(ErrorKind::TableDoesNotExist { table });
                builder.set_original_code(code);
                builder.set_original_message(message);

                builder.build()
            } else {
                let mut builder = Error::builder(ErrorKind::QueryError(message.clone().into()));
                builder.set_original_code(code);
                builder.set_original_message(message);

                builder.build()
            }
        }

        None => Error::builder(ErrorKind::QueryError(e.to_string().into())).build(),
    }
}
