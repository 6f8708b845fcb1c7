use crate::{
    ast::ParameterizedValue,
    connector::bind::Bind,
    error::{Error, ErrorKind},
};
use bigdecimal::{BigDecimal, FromPrimitive, ToPrimitive};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{
    postgres::{types::Oid, PgArguments, PgRow, PgTypeInfo, Postgres},
    query::Query,
    Column as _, Row as _, TypeInfo as _,
};
use std::borrow::Cow;

fn conversion_error(message: impl Into<std::borrow::Cow<'static, str>>) -> Error {
    Error::builder(ErrorKind::conversion(message)).build()
}

fn bind_array<'a>(
    query: Query<'a, Postgres, PgArguments>,
    values: Vec<ParameterizedValue<'a>>,
) -> crate::Result<Query<'a, Postgres, PgArguments>> {
    // The wire format needs a uniformly typed array; the variant of the
    // first element decides the type.
    let query = match values.first() {
        None => query.bind(Vec::<String>::new()),
        Some(ParameterizedValue::Integer(_)) => {
            let mut ints = Vec::with_capacity(values.len());

            for value in values.into_iter() {
                match value.as_i64() {
                    Some(int) => ints.push(int),
                    None => {
                        return Err(conversion_error(
                            "Non-integer parameter when storing an integer array",
                        ))
                    }
                }
            }

            query.bind(ints)
        }
        Some(ParameterizedValue::Real(_)) => {
            let mut floats = Vec::with_capacity(values.len());

            for value in values.into_iter() {
                match value.as_f64() {
                    Some(float) => floats.push(float),
                    None => {
                        return Err(conversion_error(
                            "Non-float parameter when storing a float array",
                        ))
                    }
                }
            }

            query.bind(floats)
        }
        Some(ParameterizedValue::Text(_)) => {
            let mut strings = Vec::with_capacity(values.len());

            for value in values.into_iter() {
                match value.into_string() {
                    Some(string) => strings.push(string),
                    None => {
                        return Err(conversion_error(
                            "Non-string parameter when storing a string array",
                        ))
                    }
                }
            }

            query.bind(strings)
        }
        Some(ParameterizedValue::Boolean(_)) => {
            let mut bools = Vec::with_capacity(values.len());

            for value in values.into_iter() {
                match value.as_bool() {
                    Some(b) => bools.push(b),
                    None => {
                        return Err(conversion_error(
                            "Non-boolean parameter when storing a boolean array",
                        ))
                    }
                }
            }

            query.bind(bools)
        }
        Some(ParameterizedValue::Uuid(_)) => {
            let mut uuids = Vec::with_capacity(values.len());

            for value in values.into_iter() {
                match value.as_uuid() {
                    Some(uuid) => uuids.push(uuid),
                    None => {
                        return Err(conversion_error(
                            "Non-uuid parameter when storing an uuid array",
                        ))
                    }
                }
            }

            query.bind(uuids)
        }
        Some(ParameterizedValue::DateTime(_)) => {
            let mut datetimes = Vec::with_capacity(values.len());

            for value in values.into_iter() {
                match value.as_datetime() {
                    Some(dt) => datetimes.push(dt),
                    None => {
                        return Err(conversion_error(
                            "Non-datetime parameter when storing a datetime array",
                        ))
                    }
                }
            }

            query.bind(datetimes)
        }
        Some(_) => {
            return Err(conversion_error(
                "The array parameter type is not supported in PostgreSQL.",
            ))
        }
    };

    Ok(query)
}

impl<'a> Bind<'a, Postgres> for Query<'a, Postgres, PgArguments> {
    fn bind_value(
        self,
        value: ParameterizedValue<'a>,
        type_info: Option<&PgTypeInfo>,
    ) -> crate::Result<Self> {
        let query = match (value, type_info.map(|ti| ti.name())) {
            (ParameterizedValue::Null, Some("TEXT") | Some("VARCHAR")) => {
                self.bind(Option::<String>::None)
            }
            (ParameterizedValue::Null, Some("BOOL")) => self.bind(Option::<bool>::None),
            (ParameterizedValue::Null, Some("INT2")) => self.bind(Option::<i16>::None),
            (ParameterizedValue::Null, Some("INT4")) => self.bind(Option::<i32>::None),
            (ParameterizedValue::Null, Some("FLOAT4")) => self.bind(Option::<f32>::None),
            (ParameterizedValue::Null, Some("FLOAT8")) => self.bind(Option::<f64>::None),
            (ParameterizedValue::Null, Some("UUID")) => self.bind(Option::<uuid::Uuid>::None),
            (ParameterizedValue::Null, Some("BYTEA")) => self.bind(Option::<Vec<u8>>::None),
            (ParameterizedValue::Null, Some("JSON") | Some("JSONB")) => {
                self.bind(Option::<serde_json::Value>::None)
            }
            (ParameterizedValue::Null, Some("DATE")) => self.bind(Option::<NaiveDate>::None),
            (ParameterizedValue::Null, Some("TIMESTAMP")) => {
                self.bind(Option::<chrono::NaiveDateTime>::None)
            }
            (ParameterizedValue::Null, _) => self.bind(Option::<i64>::None),

            // integers
            (ParameterizedValue::Integer(i), Some("INT2")) => self.bind(i as i16),
            (ParameterizedValue::Integer(i), Some("INT4")) => self.bind(i as i32),
            (ParameterizedValue::Integer(i), Some("OID")) => self.bind(Oid(i as u32)),
            (ParameterizedValue::Integer(i), Some("TEXT")) => self.bind(format!("{i}")),
            (ParameterizedValue::Integer(i), _) => self.bind(i),

            // floating point
            (ParameterizedValue::Real(r), Some("FLOAT4")) => self.bind(r as f32),
            (ParameterizedValue::Real(r), Some("NUMERIC")) => {
                let decimal = BigDecimal::from_f64(r)
                    .ok_or_else(|| conversion_error("Could not convert `f64` to `NUMERIC`."))?;

                self.bind(decimal)
            }
            (ParameterizedValue::Real(r), _) => self.bind(r),

            (ParameterizedValue::Text(text), Some("UUID")) => {
                let id: uuid::Uuid = text.parse().map_err(|_| {
                    conversion_error(format!(
                        "The given string '{text}' could not be converted to UUID."
                    ))
                })?;

                self.bind(id)
            }
            (ParameterizedValue::Text(text), _) => self.bind(text.into_owned()),

            (ParameterizedValue::Boolean(b), _) => self.bind(b),
            (ParameterizedValue::Bytes(bytes), _) => self.bind(bytes.into_owned()),
            (ParameterizedValue::Json(json), _) => self.bind(json),
            (ParameterizedValue::Uuid(uuid), _) => self.bind(uuid),

            (ParameterizedValue::DateTime(dt), Some("DATE")) => self.bind(dt.date_naive()),
            (ParameterizedValue::DateTime(dt), Some("TIME")) => self.bind(dt.time()),
            (ParameterizedValue::DateTime(dt), Some("TIMESTAMP")) => self.bind(dt.naive_utc()),
            (ParameterizedValue::DateTime(dt), _) => self.bind(dt),

            (ParameterizedValue::Array(values), _) => return bind_array(self, values),
        };

        Ok(query)
    }
}

pub(crate) fn map_row(row: &PgRow) -> crate::Result<Vec<ParameterizedValue<'static>>> {
    let mut result = Vec::with_capacity(row.len());

    for i in 0..row.len() {
        let column = &row.columns()[i];

        let value = match column.type_info().name() {
            "BOOL" => match row.try_get::<Option<bool>, _>(i)? {
                Some(b) => ParameterizedValue::Boolean(b),
                None => ParameterizedValue::Null,
            },

            "INT2" => match row.try_get::<Option<i16>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i64::from(i)),
                None => ParameterizedValue::Null,
            },

            "INT4" => match row.try_get::<Option<i32>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i64::from(i)),
                None => ParameterizedValue::Null,
            },

            "INT8" => match row.try_get::<Option<i64>, _>(i)? {
                Some(i) => ParameterizedValue::Integer(i),
                None => ParameterizedValue::Null,
            },

            "OID" => match row.try_get::<Option<Oid>, _>(i)? {
                Some(oid) => ParameterizedValue::Integer(i64::from(oid.0)),
                None => ParameterizedValue::Null,
            },

            "FLOAT4" => match row.try_get::<Option<f32>, _>(i)? {
                Some(f) => ParameterizedValue::Real(f64::from(f)),
                None => ParameterizedValue::Null,
            },

            "FLOAT8" => match row.try_get::<Option<f64>, _>(i)? {
                Some(f) => ParameterizedValue::Real(f),
                None => ParameterizedValue::Null,
            },

            "NUMERIC" | "MONEY" => match row.try_get::<Option<BigDecimal>, _>(i)? {
                Some(decimal) => {
                    let converted = decimal.to_f64().ok_or_else(|| {
                        conversion_error("Could not convert `NUMERIC` to `f64`.")
                    })?;

                    ParameterizedValue::Real(converted)
                }
                None => ParameterizedValue::Null,
            },

            "TEXT" | "VARCHAR" | "CHAR" | "NAME" | "UNKNOWN" => {
                match row.try_get::<Option<String>, _>(i)? {
                    Some(s) => ParameterizedValue::Text(Cow::from(s)),
                    None => ParameterizedValue::Null,
                }
            }

            "UUID" => match row.try_get::<Option<uuid::Uuid>, _>(i)? {
                Some(uuid) => ParameterizedValue::Uuid(uuid),
                None => ParameterizedValue::Null,
            },

            "JSON" | "JSONB" => match row.try_get::<Option<serde_json::Value>, _>(i)? {
                Some(json) => ParameterizedValue::Json(json),
                None => ParameterizedValue::Null,
            },

            "BYTEA" => match row.try_get::<Option<Vec<u8>>, _>(i)? {
                Some(bytes) => ParameterizedValue::Bytes(Cow::from(bytes)),
                None => ParameterizedValue::Null,
            },

            "TIMESTAMP" => match row.try_get::<Option<chrono::NaiveDateTime>, _>(i)? {
                Some(dt) => {
                    ParameterizedValue::DateTime(DateTime::from_naive_utc_and_offset(dt, Utc))
                }
                None => ParameterizedValue::Null,
            },

            "TIMESTAMPTZ" => match row.try_get::<Option<DateTime<Utc>>, _>(i)? {
                Some(dt) => ParameterizedValue::DateTime(dt),
                None => ParameterizedValue::Null,
            },

            "DATE" => match row.try_get::<Option<NaiveDate>, _>(i)? {
                Some(date) => {
                    let dt = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
                        conversion_error("Could not convert `DATE` to a timestamp.")
                    })?;

                    ParameterizedValue::DateTime(DateTime::from_naive_utc_and_offset(dt, Utc))
                }
                None => ParameterizedValue::Null,
            },

            "TIME" => match row.try_get::<Option<chrono::NaiveTime>, _>(i)? {
                Some(time) => {
                    let base_date = NaiveDate::from_ymd_opt(1970, 1, 1).ok_or_else(|| {
                        conversion_error("Could not create the unix epoch date.")
                    })?;

                    let dt = base_date.and_time(time);
                    ParameterizedValue::DateTime(DateTime::from_naive_utc_and_offset(dt, Utc))
                }
                None => ParameterizedValue::Null,
            },

            "INT2[]" => match row.try_get::<Option<Vec<i16>>, _>(i)? {
                Some(ints) => ParameterizedValue::Array(
                    ints.into_iter()
                        .map(|i| ParameterizedValue::Integer(i64::from(i)))
                        .collect(),
                ),
                None => ParameterizedValue::Null,
            },

            "INT4[]" => match row.try_get::<Option<Vec<i32>>, _>(i)? {
                Some(ints) => ParameterizedValue::Array(
                    ints.into_iter()
                        .map(|i| ParameterizedValue::Integer(i64::from(i)))
                        .collect(),
                ),
                None => ParameterizedValue::Null,
            },

            "INT8[]" => match row.try_get::<Option<Vec<i64>>, _>(i)? {
                Some(ints) => ParameterizedValue::Array(
                    ints.into_iter().map(ParameterizedValue::Integer).collect(),
                ),
                None => ParameterizedValue::Null,
            },

            "FLOAT4[]" => match row.try_get::<Option<Vec<f32>>, _>(i)? {
                Some(floats) => ParameterizedValue::Array(
                    floats
                        .into_iter()
                        .map(|f| ParameterizedValue::Real(f64::from(f)))
                        .collect(),
                ),
                None => ParameterizedValue::Null,
            },

            "FLOAT8[]" => match row.try_get::<Option<Vec<f64>>, _>(i)? {
                Some(floats) => ParameterizedValue::Array(
                    floats.into_iter().map(ParameterizedValue::Real).collect(),
                ),
                None => ParameterizedValue::Null,
            },

            "TEXT[]" | "VARCHAR[]" => match row.try_get::<Option<Vec<String>>, _>(i)? {
                Some(strings) => ParameterizedValue::Array(
                    strings
                        .into_iter()
                        .map(|s| ParameterizedValue::Text(Cow::from(s)))
                        .collect(),
                ),
                None => ParameterizedValue::Null,
            },

            "BOOL[]" => match row.try_get::<Option<Vec<bool>>, _>(i)? {
                Some(bools) => ParameterizedValue::Array(
                    bools.into_iter().map(ParameterizedValue::Boolean).collect(),
                ),
                None => ParameterizedValue::Null,
            },

            "UUID[]" => match row.try_get::<Option<Vec<uuid::Uuid>>, _>(i)? {
                Some(uuids) => ParameterizedValue::Array(
                    uuids.into_iter().map(ParameterizedValue::Uuid).collect(),
                ),
                None => ParameterizedValue::Null,
            },

            name => {
                let msg =
                    format!("Type {name} is not yet supported in the PostgreSQL connector.");
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
