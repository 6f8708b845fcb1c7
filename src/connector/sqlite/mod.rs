mod config;
mod conversion;
pub(crate) mod error;

pub use config::SqliteParams;

use crate::{
    ast::{Insert, ParameterizedValue, Query},
    connector::{
        bind::Bind, metrics, timeout::timeout, Queryable, ResultSet, Transaction,
        TransactionCapable, TransactionInner,
    },
    visitor::{self, Visitor},
};
use async_trait::async_trait;
use sqlx::{Column as _, Row as _, SqliteConnection};
use std::time::Duration;

/// A connector interface for the SQLite database.
pub struct Sqlite {
    pool: sqlx::SqlitePool,
    socket_timeout: Option<Duration>,
}

impl Sqlite {
    /// Create a new pooled connector to an SQLite database, with the pool
    /// configured from the connection string parameters.
    pub async fn new(url: &str) -> crate::Result<Sqlite> {
        let params = SqliteParams::try_from(url)?;

        let pool_options = sqlx::pool::PoolOptions::<sqlx::Sqlite>::new()
            .max_connections(params.connection_limit.unwrap_or(10));

        Self::from_params(params, pool_options).await
    }

    pub(crate) async fn from_params(
        params: SqliteParams,
        pool_options: sqlx::pool::PoolOptions<sqlx::Sqlite>,
    ) -> crate::Result<Sqlite> {
        let pool = pool_options.connect_with(params.connect_options()).await?;

        Ok(Sqlite {
            pool,
            socket_timeout: params.socket_timeout,
        })
    }
}

pub(crate) async fn query_raw(
    conn: &mut SqliteConnection,
    sql: &str,
    params: Vec<ParameterizedValue<'_>>,
    socket_timeout: Option<Duration>,
) -> crate::Result<ResultSet> {
    let mut query = sqlx::query(sql);

    for param in params.into_iter() {
        query = query.bind_value(param, None)?;
    }

    let rows = timeout(socket_timeout, query.fetch_all(&mut *conn)).await?;

    let mut columns = Vec::new();
    let mut values = Vec::new();

    for row in rows.into_iter() {
        if columns.is_empty() {
            columns = row.columns().iter().map(|c| c.name().to_string()).collect();
        }

        values.push(conversion::map_row(row)?);
    }

    Ok(ResultSet::new(columns, values))
}

pub(crate) async fn execute_raw(
    conn: &mut SqliteConnection,
    sql: &str,
    params: Vec<ParameterizedValue<'_>>,
    socket_timeout: Option<Duration>,
) -> crate::Result<u64> {
    let mut query = sqlx::query(sql);

    for param in params.into_iter() {
        query = query.bind_value(param, None)?;
    }

    let done = timeout(socket_timeout, query.execute(&mut *conn)).await?;

    Ok(done.rows_affected())
}

pub(crate) async fn insert_raw(
    conn: &mut SqliteConnection,
    sql: &str,
    params: Vec<ParameterizedValue<'_>>,
    socket_timeout: Option<Duration>,
) -> crate::Result<ResultSet> {
    let mut query = sqlx::query(sql);

    for param in params.into_iter() {
        query = query.bind_value(param, None)?;
    }

    let done = timeout(socket_timeout, query.execute(&mut *conn)).await?;

    let mut result_set = ResultSet::default();
    result_set.set_last_insert_id(done.last_insert_rowid() as u64);

    Ok(result_set)
}

pub(crate) async fn raw_cmd(
    conn: &mut SqliteConnection,
    cmd: &str,
    socket_timeout: Option<Duration>,
) -> crate::Result<()> {
    timeout(socket_timeout, sqlx::raw_sql(cmd).execute(&mut *conn)).await?;
    Ok(())
}

#[async_trait]
impl Queryable for Sqlite {
    async fn query(&self, q: Query<'_>) -> crate::Result<ResultSet> {
        let (sql, params) = visitor::Sqlite::build(q)?;
        self.query_raw(&sql, params).await
    }

    async fn execute(&self, q: Query<'_>) -> crate::Result<u64> {
        let (sql, params) = visitor::Sqlite::build(q)?;
        self.execute_raw(&sql, params).await
    }

    async fn insert(&self, q: Insert<'_>) -> crate::Result<ResultSet> {
        let has_returning = q.returning.is_some();
        let (sql, params) = visitor::Sqlite::build(q)?;

        if has_returning {
            self.query_raw(&sql, params).await
        } else {
            metrics::query("sqlite.insert", &sql, params, |params| async move {
                let mut conn = self.pool.acquire().await?;
                insert_raw(&mut conn, &sql, params, self.socket_timeout).await
            })
            .await
        }
    }

    async fn query_raw(
        &self,
        sql: &str,
        params: Vec<ParameterizedValue<'_>>,
    ) -> crate::Result<ResultSet> {
        metrics::query("sqlite.query_raw", sql, params, |params| async move {
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
        metrics::query("sqlite.execute_raw", sql, params, |params| async move {
            let mut conn = self.pool.acquire().await?;
            execute_raw(&mut conn, sql, params, self.socket_timeout).await
        })
        .await
    }

    async fn raw_cmd(&self, cmd: &str) -> crate::Result<()> {
        metrics::query("sqlite.raw_cmd", cmd, Vec::new(), |_| async move {
            let mut conn = self.pool.acquire().await?;
            raw_cmd(&mut conn, cmd, self.socket_timeout).await
        })
        .await
    }

    async fn version(&self) -> crate::Result<Option<String>> {
        let query = r#"SELECT sqlite_version() version"#;
        let rows = self.query_raw(query, vec![]).await?;

        let version_string = rows
            .first()
            .and_then(|row| row.get("version").and_then(|version| version.to_string()));

        Ok(version_string)
    }
}

#[async_trait]
impl TransactionCapable for Sqlite {
    async fn start_transaction(&self) -> crate::Result<Transaction<'_>> {
        let tx = self.pool.begin().await?;
        Ok(Transaction::new(TransactionInner::Sqlite(tx)))
    }
}
