use crate::{
    ast::ParameterizedValue,
    connector::bind::Bind,
    error::{Error, ErrorKind},
};
use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{
    mysql::{MySql, MySqlArguments, MySqlRow, MySqlTypeInfo},
    query::Query,
    Column as _, Row as _, TypeInfo as _,
};
use std::borrow::Cow;

impl<'a> Bind<'a, MySql> for Query<'a, MySql, MySqlArguments> {
    fn bind_value(
        self,
        value: ParameterizedValue<'a>,
        _: Option<&MySqlTypeInfo>,
    ) -> crate::Result<Self> {
        let query = match value {
            ParameterizedValue::Null => self.bind(Option::<i64>::None),
            ParameterizedValue::Integer(i) => self.bind(i),
            ParameterizedValue::Real(r) => self.bind(r),
            ParameterizedValue::Text(s) => self.bind(s.into_owned()),
            ParameterizedValue::Boolean(b) => self.bind(b),
            ParameterizedValue::Bytes(b) => self.bind(b.into_owned()),
            ParameterizedValue::Array(_) => {
                let msg = "Arrays are not supported in MySQL.";
                let kind = ErrorKind::conversion(msg);

                let mut builder = Error::builder(kind);
                builder.set_original_message(msg);

                return Err(builder.build());
            }
            ParameterizedValue::Json(json) => self.bind(json),
            ParameterizedValue::Uuid(uuid) => self.bind(uuid.hyphenated().to_string()),
            ParameterizedValue::DateTime(dt) => self.bind(dt),
        };

        Ok(query)
    }
}

fn out_of_range(msg: impl Into<String>) -> Error {
    Error::builder(ErrorKind::value_out_of_range(msg)).build()
}

pub(crate) fn map_row(row: MySqlRow) -> crate::Result<Vec<ParameterizedValue<'static>>> {
    let mut result = Vec::with_capacity(row.len());

    for i in 0..row.len() {
        let column = &row.columns()[i];

        let value = match column.type_info().name() {
            "BOOLEAN" => match row.try_get::<Option<bool>, _>(i)? {
                Some(b) => ParameterizedValue::Boolean(b),
                None => ParameterizedValue::Null,
            },

            "TINYINT" => match row.try_get::<Option<i8>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i64::from(i)),
                None => ParameterizedValue::Null,
            },

            "TINYINT UNSIGNED" => match row.try_get::<Option<u8>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i64::from(i)),
                None => ParameterizedValue::Null,
            },

            "SMALLINT" => match row.try_get::<Option<i16>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i64::from(i)),
                None => ParameterizedValue::Null,
            },

            "SMALLINT UNSIGNED" => match row.try_get::<Option<u16>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i64::from(i)),
                None => ParameterizedValue::Null,
            },

            "MEDIUMINT" | "INT" => match row.try_get::<Option<i32>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i64::from(i)),
                None => ParameterizedValue::Null,
            },

            "MEDIUMINT UNSIGNED" | "INT UNSIGNED" => match row.try_get::<Option<u32>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i64::from(i)),
                None => ParameterizedValue::Null,
            },

            "BIGINT" => match row.try_get::<Option<i64>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i),
                None => ParameterizedValue::Null,
            },

            "BIGINT UNSIGNED" => match row.try_get::<Option<u64>, _>(i)? {
                Some(i) => {
                    let converted = i64::try_from(i).map_err(|_| {
                        out_of_range(format!(
                            "Unsigned integer {i} does not fit in a 64-bit signed integer"
                        ))
                    })?;

                    ParameterizedValue::Integer(converted)
                }
                None => ParameterizedValue::Null,
            },

            "YEAR" => match row.try_get::<Option<u16>, _>(i)? {
                Some(year) => ParameterizedValue::Integer(i64::from(year)),
                None => ParameterizedValue::Null,
            },

            "FLOAT" => match row.try_get::<Option<f32>, _>(i)? {
                Some(f) => ParameterizedValue::Real(f64::from(f)),
                None => ParameterizedValue::Null,
            },

            "DOUBLE" => match row.try_get::<Option<f64>, _>(i)? {
                Some(f) => ParameterizedValue::Real(f),
                None => ParameterizedValue::Null,
            },

            "DECIMAL" => match row.try_get::<Option<BigDecimal>, _>(i)? {
                Some(decimal) => {
                    let converted = decimal.to_f64().ok_or_else(|| {
                        Error::builder(ErrorKind::conversion(
                            "Could not convert `DECIMAL` to `f64`.",
                        ))
                        .build()
                    })?;

                    ParameterizedValue::Real(converted)
                }
                None => ParameterizedValue::Null,
            },

            "CHAR" | "VARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" => {
                match row.try_get::<Option<String>, _>(i)? {
                    Some(s) => ParameterizedValue::Text(Cow::from(s)),
                    None => ParameterizedValue::Null,
                }
            }

            "BINARY" | "VARBINARY" | "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
                match row.try_get::<Option<Vec<u8>>, _>(i)? {
                    Some(bytes) => ParameterizedValue::Bytes(Cow::from(bytes)),
                    None => ParameterizedValue::Null,
                }
            }

            "DATETIME" => match row.try_get::<Option<chrono::NaiveDateTime>, _>(i)? {
                Some(dt) => {
                    ParameterizedValue::DateTime(DateTime::from_naive_utc_and_offset(dt, Utc))
                }
                None => ParameterizedValue::Null,
            },

            "TIMESTAMP" => match row.try_get::<Option<DateTime<Utc>>, _>(i)? {
                Some(dt) => ParameterizedValue::DateTime(dt),
                None => ParameterizedValue::Null,
            },

            "DATE" => match row.try_get::<Option<NaiveDate>, _>(i)? {
                Some(date) => {
                    let dt = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
                        Error::builder(ErrorKind::conversion(
                            "Could not convert `DATE` to a timestamp.",
                        ))
                        .build()
                    })?;

                    ParameterizedValue::DateTime(DateTime::from_naive_utc_and_offset(dt, Utc))
                }
                None => ParameterizedValue::Null,
            },

            "TIME" => match row.try_get::<Option<chrono::NaiveTime>, _>(i)? {
                Some(time) => {
                    let base_date = NaiveDate::from_ymd_opt(1970, 1, 1).ok_or_else(|| {
                        Error::builder(ErrorKind::conversion(
                            "Could not create the unix epoch date.",
                        ))
                        .build()
                    })?;

                    let dt = base_date.and_time(time);
                    ParameterizedValue::DateTime(DateTime::from_naive_utc_and_offset(dt, Utc))
                }
                None => ParameterizedValue::Null,
            },

            "JSON" => match row.try_get::<Option<serde_json::Value>, _>(i)? {
                Some(json) => ParameterizedValue::Json(json),
                None => ParameterizedValue::Null,
            },

            "NULL" => ParameterizedValue::Null,

            name => {
                let msg = format!("Type {name} is not yet supported in the MySQL connector.");
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
