use crate::{
    ast::ParameterizedValue,
    connector::bind::Bind,
    error::{Error, ErrorKind},
};
use sqlx::{
    query::Query,
    sqlite::{Sqlite, SqliteArguments, SqliteRow, SqliteTypeInfo},
    Column as _, Row as _, TypeInfo as _, ValueRef as _,
};
use std::borrow::Cow;

impl<'a> Bind<'a, Sqlite> for Query<'a, Sqlite, SqliteArguments<'a>> {
    fn bind_value(
        self,
        value: ParameterizedValue<'a>,
        _: Option<&SqliteTypeInfo>,
    ) -> crate::Result<Self> {
        let query = match value {
            ParameterizedValue::Null => self.bind(Option::<i64>::None),
            ParameterizedValue::Integer(i) => self.bind(i),
            ParameterizedValue::Real(r) => self.bind(r),
            ParameterizedValue::Text(s) => self.bind(s.into_owned()),
            ParameterizedValue::Boolean(b) => self.bind(b),
            ParameterizedValue::Bytes(b) => self.bind(b.into_owned()),
            ParameterizedValue::Array(_) => {
                let msg = "Arrays are not supported in SQLite.";
                let kind = ErrorKind::conversion(msg);

                let mut builder = Error::builder(kind);
                builder.set_original_message(msg);

                return Err(builder.build());
            }
            ParameterizedValue::Json(json) => {
                let stringified = serde_json::to_string(&json)?;
                self.bind(stringified)
            }
            ParameterizedValue::Uuid(uuid) => self.bind(uuid.hyphenated().to_string()),
            ParameterizedValue::DateTime(dt) => self.bind(dt.timestamp_millis()),
        };

        Ok(query)
    }
}

pub(crate) fn map_row(row: SqliteRow) -> crate::Result<Vec<ParameterizedValue<'static>>> {
    let mut result = Vec::with_capacity(row.len());

    for i in 0..row.len() {
        let column = &row.columns()[i];

        let (is_null, value_type) = {
            let raw = row.try_get_raw(i)?;
            (raw.is_null(), raw.type_info().name().to_string())
        };

        if is_null {
            result.push(ParameterizedValue::Null);
            continue;
        }

        // Expression columns carry no declared type, so the type of the
        // value in the row decides instead.
        let declared = column.type_info().name();
        let type_name = if declared == "NULL" {
            value_type.as_str()
        } else {
            declared
        };

        let value = match type_name {
            "INTEGER" | "INT" | "BIGINT" => {
                ParameterizedValue::Integer(row.try_get_unchecked::<i64, _>(i)?)
            }

            "REAL" | "NUMERIC" => ParameterizedValue::Real(row.try_get_unchecked::<f64, _>(i)?),

            "TEXT" => ParameterizedValue::Text(Cow::from(row.try_get_unchecked::<String, _>(i)?)),

            "BLOB" => {
                ParameterizedValue::Bytes(Cow::from(row.try_get_unchecked::<Vec<u8>, _>(i)?))
            }

            "BOOLEAN" | "BOOL" => {
                ParameterizedValue::Boolean(row.try_get_unchecked::<bool, _>(i)?)
            }

            // Date and time values are stored as unix timestamps in
            // milliseconds, matching the encoding on the binding side.
            "DATE" | "DATETIME" | "TIMESTAMP" => {
                let ms = row.try_get_unchecked::<i64, _>(i)?;

                let dt = chrono::DateTime::from_timestamp_millis(ms).ok_or_else(|| {
                    Error::builder(ErrorKind::conversion(
                        "Timestamp out of the supported range",
                    ))
                    .build()
                })?;

                ParameterizedValue::DateTime(dt)
            }

            name => {
                let msg = format!("Type {name} is not yet supported in the SQLite connector.");
                let kind = ErrorKind::conversion(msg.clone());

                let mut builder = Error::builder(kind);
                builder.set_original_message(msg);

                return Err(builder.build());
            }
        };

        result.push(value);
    }

    Ok(result)
}
