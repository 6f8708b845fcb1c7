mod config;
mod conversion;
pub(crate) mod error;

pub use config::PostgresParams;

use crate::{
    ast::{Insert, ParameterizedValue, Query},
    connector::{
        bind::Bind,
        metrics,
        timeout::{connect, timeout},
        Queryable, ResultSet, Transaction, TransactionCapable, TransactionInner,
    },
    visitor::{self, Visitor},
};
use async_trait::async_trait;
use sqlx::{pool::PoolOptions, Column as _, Either, Executor, PgConnection, Statement};
use std::time::Duration;

/// A connector interface for the PostgreSQL database.
pub struct PostgreSql {
    pool: sqlx::PgPool,
    socket_timeout: Option<Duration>,
}

impl PostgreSql {
    /// Create a new pooled connector to a PostgreSQL database, with the
    /// pool configured from the connection string parameters.
    pub async fn new(url: &str) -> crate::Result<PostgreSql> {
        let params = PostgresParams::try_from(url)?;

        let pool_options = PoolOptions::<sqlx::Postgres>::new()
            .max_connections(params.connection_limit.unwrap_or(10));

        Self::from_params(params, pool_options).await
    }

    pub(crate) async fn from_params(
        params: PostgresParams,
        pool_options: PoolOptions<sqlx::Postgres>,
    ) -> crate::Result<PostgreSql> {
        let schema = params.schema.clone();

        // The search path has to be set for every connection in the pool.
        let pool_options = pool_options.after_connect(move |conn, _meta| {
            let set_search_path = format!("SET search_path = \"{schema}\"");

            Box::pin(async move {
                conn.execute(set_search_path.as_str()).await?;
                Ok(())
            })
        });

        let pool = connect(
            params.connect_timeout,
            pool_options.connect_with(params.connect_options()),
        )
        .await?;

        Ok(PostgreSql {
            pool,
            socket_timeout: params.socket_timeout,
        })
    }
}

pub(crate) async fn query_raw(
    conn: &mut PgConnection,
    sql: &str,
    params: Vec<ParameterizedValue<'_>>,
    socket_timeout: Option<Duration>,
) -> crate::Result<ResultSet> {
    let stmt = timeout(socket_timeout, conn.prepare(sql)).await?;

    let columns = stmt
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    let mut query = stmt.query();

    match stmt.parameters() {
        Some(Either::Left(type_infos)) => {
            for (param, type_info) in params.into_iter().zip(type_infos.iter().map(Some)) {
                query = query.bind_value(param, type_info)?;
            }
        }
        _ => {
            for param in params.into_iter() {
                query = query.bind_value(param, None)?;
            }
        }
    }

    let rows = timeout(socket_timeout, query.fetch_all(&mut *conn)).await?;

    let mut values = Vec::with_capacity(rows.len());

    for row in rows.iter() {
        values.push(conversion::map_row(row)?);
    }

    Ok(ResultSet::new(columns, values))
}

pub(crate) async fn execute_raw(
    conn: &mut PgConnection,
    sql: &str,
    params: Vec<ParameterizedValue<'_>>,
    socket_timeout: Option<Duration>,
) -> crate::Result<u64> {
    let stmt = timeout(socket_timeout, conn.prepare(sql)).await?;

    let mut query = stmt.query();

    match stmt.parameters() {
        Some(Either::Left(type_infos)) => {
            for (param, type_info) in params.into_iter().zip(type_infos.iter().map(Some)) {
                query = query.bind_value(param, type_info)?;
            }
        }
        _ => {
            for param in params.into_iter() {
                query = query.bind_value(param, None)?;
            }
        }
    }

    let done = timeout(socket_timeout, query.execute(&mut *conn)).await?;

    Ok(done.rows_affected())
}

pub(crate) async fn raw_cmd(
    conn: &mut PgConnection,
    cmd: &str,
    socket_timeout: Option<Duration>,
) -> crate::Result<()> {
    timeout(socket_timeout, sqlx::raw_sql(cmd).execute(&mut *conn)).await?;
    Ok(())
}

#[async_trait]
impl Queryable for PostgreSql {
    async fn query(&self, q: Query<'_>) -> crate::Result<ResultSet> {
        let (sql, params) = visitor::Postgres::build(q)?;
        self.query_raw(&sql, params).await
    }

    async fn execute(&self, q: Query<'_>) -> crate::Result<u64> {
        let (sql, params) = visitor::Postgres::build(q)?;
        self.execute_raw(&sql, params).await
    }

    async fn insert(&self, q: Insert<'_>) -> crate::Result<ResultSet> {
        self.query(q.into()).await
    }

    async fn query_raw(
        &self,
        sql: &str,
        params: Vec<ParameterizedValue<'_>>,
    ) -> crate::Result<ResultSet> {
        metrics::query("postgres.query_raw", sql, params, |params| async move {
            let mut conn = self.pool.acquire().await?;
            query_raw(&mut conn, sql, params, self.socket_timeout).await
        })
        .await
    }

    async fn execute_raw(
        &self,
        sql: &str,
        params: Vec<ParameterizedValue<'_>>,
    ) -> crate::Result<u64> {
        metrics::query("postgres.execute_raw", sql, params, |params| async move {
            let mut conn = self.pool.acquire().await?;
            execute_raw(&mut conn, sql, params, self.socket_timeout).await
        })
        .await
    }

    async fn raw_cmd(&self, cmd: &str) -> crate::Result<()> {
        metrics::query("postgres.raw_cmd", cmd, Vec::new(), |_| async move {
            let mut conn = self.pool.acquire().await?;
            raw_cmd(&mut conn, cmd, self.socket_timeout).await
        })
        .await
    }

    async fn version(&self) -> crate::Result<Option<String>> {
        let query = r#"SELECT version() version"#;
        let rows = self.query_raw(query, vec![]).await?;

        let version_string = rows
            .first()
            .and_then(|row| row.get("version").and_then(|version| version.to_string()));

        Ok(version_string)
    }
}

#[async_trait]
impl TransactionCapable for PostgreSql {
    async fn start_transaction(&self) -> crate::Result<Transaction<'_>> {
        let tx = self.pool.begin().await?;
        Ok(Transaction::new(TransactionInner::Postgres(tx)))
    }
}
