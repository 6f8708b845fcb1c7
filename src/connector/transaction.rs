use crate::{
    ast::{Insert, ParameterizedValue, Query},
    connector::{Queryable, ResultSet},
    visitor::Visitor,
};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// A set of queries run against the same checked out connection, committed
/// or rolled back as one unit.
pub struct Transaction<'a> {
    inner: Mutex<TransactionInner<'a>>,
}

pub(crate) enum TransactionInner<'a> {
    #[cfg(feature = "sqlite")]
    Sqlite(sqlx::Transaction<'a, sqlx::Sqlite>),
    #[cfg(feature = "postgres")]
    Postgres(sqlx::Transaction<'a, sqlx::Postgres>),
    #[cfg(feature = "mysql")]
    Mysql(sqlx::Transaction<'a, sqlx::MySql>),
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(inner: TransactionInner<'a>) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Commit the changes to the database and consume the transaction.
    pub async fn commit(self) -> crate::Result<()> {
        match self.inner.into_inner() {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(tx) => tx.commit().await?,
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(tx) => tx.commit().await?,
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(tx) => tx.commit().await?,
        }

        Ok(())
    }

    /// Roll back the changes to the database and consume the transaction.
    pub async fn rollback(self) -> crate::Result<()> {
        match self.inner.into_inner() {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(tx) => tx.rollback().await?,
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(tx) => tx.rollback().await?,
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(tx) => tx.rollback().await?,
        }

        Ok(())
    }
}

impl TransactionInner<'_> {
    async fn query(&mut self, q: Query<'_>) -> crate::Result<ResultSet> {
        match self {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(tx) => {
                let (sql, params) = crate::visitor::Sqlite::build(q)?;
                crate::connector::sqlite::query_raw(&mut **tx, &sql, params, None).await
            }
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(tx) => {
                let (sql, params) = crate::visitor::Postgres::build(q)?;
                crate::connector::postgres::query_raw(&mut **tx, &sql, params, None).await
            }
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(tx) => {
                let (sql, params) = crate::visitor::Mysql::build(q)?;
                crate::connector::mysql::query_raw(&mut **tx, &sql, params, None).await
            }
        }
    }

    async fn query_raw(
        &mut self,
        sql: &str,
        params: Vec<ParameterizedValue<'_>>,
    ) -> crate::Result<ResultSet> {
        match self {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(tx) => {
                crate::connector::sqlite::query_raw(&mut **tx, sql, params, None).await
            }
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(tx) => {
                crate::connector::postgres::query_raw(&mut **tx, sql, params, None).await
            }
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(tx) => {
                crate::connector::mysql::query_raw(&mut **tx, sql, params, None).await
            }
        }
    }

    async fn execute(&mut self, q: Query<'_>) -> crate::Result<u64> {
        match self {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(tx) => {
                let (sql, params) = crate::visitor::Sqlite::build(q)?;
                crate::connector::sqlite::execute_raw(&mut **tx, &sql, params, None).await
            }
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(tx) => {
                let (sql, params) = crate::visitor::Postgres::build(q)?;
                crate::connector::postgres::execute_raw(&mut **tx, &sql, params, None).await
            }
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(tx) => {
                let (sql, params) = crate::visitor::Mysql::build(q)?;
                crate::connector::mysql::execute_raw(&mut **tx, &sql, params, None).await
            }
        }
    }

    async fn execute_raw(
        &mut self,
        sql: &str,
        params: Vec<ParameterizedValue<'_>>,
    ) -> crate::Result<u64> {
        match self {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(tx) => {
                crate::connector::sqlite::execute_raw(&mut **tx, sql, params, None).await
            }
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(tx) => {
                crate::connector::postgres::execute_raw(&mut **tx, sql, params, None).await
            }
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(tx) => {
                crate::connector::mysql::execute_raw(&mut **tx, sql, params, None).await
            }
        }
    }

    async fn insert(&mut self, q: Insert<'_>) -> crate::Result<ResultSet> {
        let has_returning = q.returning.is_some();

        match self {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(tx) => {
                let (sql, params) = crate::visitor::Sqlite::build(q)?;

                if has_returning {
                    crate::connector::sqlite::query_raw(&mut **tx, &sql, params, None).await
                } else {
                    crate::connector::sqlite::insert_raw(&mut **tx, &sql, params, None).await
                }
            }
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(tx) => {
                let (sql, params) = crate::visitor::Postgres::build(q)?;
                crate::connector::postgres::query_raw(&mut **tx, &sql, params, None).await
            }
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(tx) => {
                let (sql, params) = crate::visitor::Mysql::build(q)?;
                crate::connector::mysql::insert_raw(&mut **tx, &sql, params, None).await
            }
        }
    }

    async fn raw_cmd(&mut self, cmd: &str) -> crate::Result<()> {
        match self {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(tx) => {
                crate::connector::sqlite::raw_cmd(&mut **tx, cmd, None).await
            }
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(tx) => {
                crate::connector::postgres::raw_cmd(&mut **tx, cmd, None).await
            }
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(tx) => {
                crate::connector::mysql::raw_cmd(&mut **tx, cmd, None).await
            }
        }
    }

    async fn version(&mut self) -> crate::Result<Option<String>> {
        let (sql, version_column) = match self {
            #[cfg(feature = "sqlite")]
            TransactionInner::Sqlite(_) => ("SELECT sqlite_version() version", "version"),
            #[cfg(feature = "postgres")]
            TransactionInner::Postgres(_) => ("SELECT version() version", "version"),
            #[cfg(feature = "mysql")]
            TransactionInner::Mysql(_) => ("SELECT @@GLOBAL.version version", "version"),
        };

        let rows = self.query_raw(sql, vec![]).await?;

        let version_string = rows
            .first()
            .and_then(|row| row.get(version_column).and_then(|version| version.to_string()));

        Ok(version_string)
    }
}

#[async_trait]
impl<'t> Queryable for Transaction<'t> {
    async fn query(&self, q: Query<'_>) -> crate::Result<ResultSet> {
        let mut inner = self.inner.lock().await;
        inner.query(q).await
    }

    async fn query_raw(
        &self,
        sql: &str,
        params: Vec<ParameterizedValue<'_>>,
    ) -> crate::Result<ResultSet> {
        let mut inner = self.inner.lock().await;
        inner.query_raw(sql, params).await
    }

    async fn execute(&self, q: Query<'_>) -> crate::Result<u64> {
        let mut inner = self.inner.lock().await;
        inner.execute(q).await
    }

    async fn execute_raw(
        &self,
        sql: &str,
        params: Vec<ParameterizedValue<'_>>,
    ) -> crate::Result<u64> {
        let mut inner = self.inner.lock().await;
        inner.execute_raw(sql, params).await
    }

    async fn raw_cmd(&self, cmd: &str) -> crate::Result<()> {
        let mut inner = self.inner.lock().await;
        inner.raw_cmd(cmd).await
    }

    async fn version(&self) -> crate::Result<Option<String>> {
        let mut inner = self.inner.lock().await;
        inner.version().await
    }

    async fn insert(&self, q: Insert<'_>) -> crate::Result<ResultSet> {
        let mut inner = self.inner.lock().await;
        inner.insert(q).await
    }
}
