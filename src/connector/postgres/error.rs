use crate::error::{DatabaseConstraint, Error, ErrorKind};
use sqlx::postgres::PgDatabaseError;

/// The identifier inside the first quoted part of the message, e.g. the
/// `x` of `database "x" does not exist`.
fn quoted_identifier(message: &str) -> String {
    message.split('"').nth(1).unwrap_or_default().to_string()
}

/// Field names from a unique violation detail of the form
/// `Key (a, b)=(1, 2) already exists.`
fn detail_fields(detail: &str) -> Option<Vec<String>> {
    let fields = detail.split(")=(").next()?.split(" (").nth(1)?;

    Some(
        fields
            .replace('"', "")
            .split(", ")
            .map(|s| s.to_string())
            .collect(),
    )
}

pub(crate) fn map_error(e: &PgDatabaseError) -> Error {
    let code = e.code().to_string();

    match code.as_str() {
        "22001" => {
            let mut builder = Error::builder(ErrorKind::LengthMismatch {
                column: e.column().map(|c| c.to_string()),
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        "23505" => {
            let constraint = e
                .detail()
                .and_then(detail_fields)
                .map(DatabaseConstraint::Fields)
                .or_else(|| e.constraint().map(|c| DatabaseConstraint::Index(c.to_string())))
                .unwrap_or(DatabaseConstraint::Fields(Vec::new()));

            let mut builder =
                Error::builder(ErrorKind::UniqueConstraintViolation { constraint });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        "23502" => {
            let constraint = e
                .column()
                .map(|column| DatabaseConstraint::Fields(vec![column.to_string()]))
                .unwrap_or(DatabaseConstraint::Fields(Vec::new()));

            let mut builder = Error::builder(ErrorKind::NullConstraintViolation { constraint });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        "23503" => {
            let constraint = match e.column() {
                Some(column) => DatabaseConstraint::Fields(vec![column.to_string()]),
                None => e
                    .constraint()
                    .map(|c| DatabaseConstraint::Index(c.to_string()))
                    .unwrap_or(DatabaseConstraint::ForeignKey),
            };

            let mut builder =
                Error::builder(ErrorKind::ForeignKeyConstraintViolation { constraint });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        "3D000" => {
            let mut builder = Error::builder(ErrorKind::DatabaseDoesNotExist {
                db_name: quoted_identifier(e.message()),
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        "42P04" => {
            let mut builder = Error::builder(ErrorKind::DatabaseAlreadyExists {
                db_name: quoted_identifier(e.message()),
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        "42501" => {
            let mut builder = Error::builder(ErrorKind::DatabaseAccessDenied {
                db_name: quoted_identifier(e.message()),
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        "28P01" | "28000" => {
            let mut builder = Error::builder(ErrorKind::AuthenticationFailed {
                user: quoted_identifier(e.message()),
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        "42P01" => {
            let mut builder = Error::builder(ErrorKind::TableDoesNotExist {
                table: quoted_identifier(e.message()),
            });

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }

        _ => {
            let mut builder = Error::builder(ErrorKind::QueryError(e.to_string().into()));

            builder.set_original_code(code);
            builder.set_original_message(e.message());

            builder.build()
        }
    }
}
