//! The connection seam DAOs and bound queries run on.

use crate::error::{OrmError, OrmResult};
use crate::row::RowExt;
use std::future::Future;
use tokio_postgres::Row;
use tokio_postgres::types::{FromSql, ToSql};

/// Anything that can run numbered SQL: a connection, a transaction or a
/// pooled connection.
///
/// Only [`query`](Self::query) and [`execute`](Self::execute) are required;
/// the single-row forms are derived from `query`.
pub trait GenericClient: Send + Sync {
    fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl Future<Output = OrmResult<Vec<Row>>> + Send;

    /// Affected row count.
    fn execute(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl Future<Output = OrmResult<u64>> + Send;

    /// First row, or `None` when the statement matched nothing.
    fn query_opt(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl Future<Output = OrmResult<Option<Row>>> + Send {
        async move { Ok(self.query(sql, params).await?.into_iter().next()) }
    }

    /// First row; [`OrmError::NotFound`] names the statement when there is none.
    fn query_one(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl Future<Output = OrmResult<Row>> + Send {
        async move {
            self.query_opt(sql, params)
                .await?
                .ok_or_else(|| OrmError::not_found(format!("no row returned by `{sql}`")))
        }
    }

    /// First column of the first row, e.g. the key of `insert ... returning id`.
    fn query_scalar<T>(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl Future<Output = OrmResult<T>> + Send
    where
        T: for<'a> FromSql<'a> + Send,
    {
        async move { self.query_one(sql, params).await?.try_get_index(0) }
    }
}

macro_rules! driver_client {
    ($($ty:ty),+ $(,)?) => {$(
        impl GenericClient for $ty {
            async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<Vec<Row>> {
                <$ty>::query(self, sql, params).await.map_err(OrmError::from_db_error)
            }

            async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<u64> {
                <$ty>::execute(self, sql, params).await.map_err(OrmError::from_db_error)
            }
        }
    )+};
}

driver_client!(tokio_postgres::Client, tokio_postgres::Transaction<'_>);

// Pooled handles deref to `tokio_postgres::Client`.
#[cfg(feature = "pool")]
macro_rules! pooled_client {
    ($($ty:ty),+ $(,)?) => {$(
        impl GenericClient for $ty {
            async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<Vec<Row>> {
                let client: &tokio_postgres::Client = self;
                GenericClient::query(client, sql, params).await
            }

            async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<u64> {
                let client: &tokio_postgres::Client = self;
                GenericClient::execute(client, sql, params).await
            }
        }
    )+};
}

#[cfg(feature = "pool")]
pooled_client!(deadpool_postgres::Client, deadpool_postgres::ClientWrapper);

impl<C: GenericClient> GenericClient for &C {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<Vec<Row>> {
        C::query(self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<u64> {
        C::execute(self, sql, params).await
    }

    async fn query_scalar<T>(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<T>
    where
        T: for<'a> FromSql<'a> + Send,
    {
        C::query_scalar(self, sql, params).await
    }
}
