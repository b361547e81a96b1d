//! Rendered SQL templates and value binding.
//!
//! Builders never hand out a bare string: they return a [`SqlTemplate`] that
//! carries the `?` template together with one [`BindSlot`] per placeholder.
//! The n-th slot names the column whose value the n-th `?` expects, which
//! turns the positional-binding convention into something that can be
//! checked before the statement reaches the database.
//!
//! ```rust
//! use instaorm::model::{Column, DataConfigContainer};
//! use instaorm::builder::{InsertQueryBuilder, QueryRenderer};
//!
//! let config = DataConfigContainer::builder("post_like")
//!     .columns([Column::new("post_id"), Column::new("liked_by")])
//!     .build()?;
//! let template = InsertQueryBuilder::new().render(&config)?;
//!
//! assert_eq!(template.sql(), "insert into post_like (post_id, liked_by) values (? ,?)");
//! assert_eq!(template.to_numbered(), "insert into post_like (post_id, liked_by) values ($1 ,$2)");
//!
//! let (post_id, liked_by) = (7_i64, 42_i64);
//! let bound = template.bind_named(&[("liked_by", &liked_by), ("post_id", &post_id)])?;
//! assert_eq!(bound.params().len(), 2);
//! # Ok::<(), instaorm::OrmError>(())
//! ```

use crate::client::GenericClient;
use crate::error::{OrmError, OrmResult};
use crate::model::Keyword;
use crate::row::FromRow;
use std::fmt;
use tokio_postgres::Row;
use tokio_postgres::types::{FromSql, ToSql};

/// Statement kind of a rendered template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl QueryKind {
    pub const fn keyword(self) -> Keyword {
        match self {
            QueryKind::Select => Keyword::Select,
            QueryKind::Insert => Keyword::Insert,
            QueryKind::Update => Keyword::Update,
            QueryKind::Delete => Keyword::Delete,
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().as_str())
    }
}

/// The column a placeholder stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindSlot {
    table_name: Option<String>,
    column_name: String,
}

impl BindSlot {
    pub fn new(table_name: Option<&str>, column_name: &str) -> Self {
        Self {
            table_name: table_name.map(str::to_string),
            column_name: column_name.to_string(),
        }
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// `table.column`, or `column` when unqualified.
    pub fn qualified_name(&self) -> String {
        crate::model::dotted(self.table_name(), &self.column_name)
    }

    /// Whether a caller-supplied bind name addresses this slot.
    ///
    /// Both the bare column name and the qualified `table.column` form match.
    pub fn matches(&self, name: &str) -> bool {
        if name == self.column_name {
            return true;
        }
        match (&self.table_name, name.split_once('.')) {
            (Some(table), Some((t, c))) => t == table && c == self.column_name,
            _ => false,
        }
    }
}

/// A rendered SQL template with `?` placeholders and their bind slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlTemplate {
    kind: QueryKind,
    sql: String,
    binds: Vec<BindSlot>,
}

impl SqlTemplate {
    pub(crate) fn new(kind: QueryKind, sql: String, binds: Vec<BindSlot>) -> Self {
        debug_assert_eq!(
            count_placeholders(&sql),
            binds.len(),
            "placeholder count must match bind slots"
        );
        tracing::debug!(
            target: "instaorm.sql",
            kind = %kind,
            bind_count = binds.len(),
            sql = %sql,
            "rendered template"
        );
        Self { kind, sql, binds }
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// The template with `?` placeholders.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bind slots in placeholder order.
    pub fn binds(&self) -> &[BindSlot] {
        &self.binds
    }

    /// Number of values the template expects.
    pub fn bind_count(&self) -> usize {
        self.binds.len()
    }

    pub fn into_sql(self) -> String {
        self.sql
    }

    /// The template with PostgreSQL-style `$1, $2, ...` placeholders.
    pub fn to_numbered(&self) -> String {
        let mut out = String::with_capacity(self.sql.len() + self.binds.len() * 2);
        let mut idx = 0usize;
        for ch in self.sql.chars() {
            if ch == '?' {
                idx += 1;
                out.push('$');
                out.push_str(&idx.to_string());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Bind values positionally; the count must equal [`Self::bind_count`].
    pub fn bind<'a>(&self, params: &[&'a (dyn ToSql + Sync)]) -> OrmResult<BoundQuery<'a>> {
        if params.len() != self.binds.len() {
            return Err(OrmError::BindMismatch {
                expected: self.binds.len(),
                got: params.len(),
            });
        }
        Ok(BoundQuery {
            kind: self.kind,
            sql: self.to_numbered(),
            params: params.to_vec(),
        })
    }

    /// Bind values by column name, in any order.
    ///
    /// Names are matched against each slot's bare or qualified column name.
    /// A slot that appears several times reuses the same value. Every name
    /// must address a slot and every slot must receive a value.
    pub fn bind_named<'a>(
        &self,
        values: &[(&str, &'a (dyn ToSql + Sync))],
    ) -> OrmResult<BoundQuery<'a>> {
        if let Some((name, _)) = values
            .iter()
            .find(|(name, _)| !self.binds.iter().any(|slot| slot.matches(name)))
        {
            return Err(OrmError::UnknownBind((*name).to_string()));
        }

        let mut params = Vec::with_capacity(self.binds.len());
        for slot in &self.binds {
            let (_, value) = values
                .iter()
                .find(|(name, _)| slot.matches(name))
                .ok_or_else(|| OrmError::MissingBind(slot.qualified_name()))?;
            params.push(*value);
        }

        Ok(BoundQuery {
            kind: self.kind,
            sql: self.to_numbered(),
            params,
        })
    }
}

impl fmt::Display for SqlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl AsRef<str> for SqlTemplate {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}

pub(crate) fn count_placeholders(sql: &str) -> usize {
    sql.matches(Keyword::Placeholder.as_str()).count()
}

/// A numbered statement with its parameters, ready to run.
pub struct BoundQuery<'a> {
    kind: QueryKind,
    sql: String,
    params: Vec<&'a (dyn ToSql + Sync)>,
}

impl<'a> BoundQuery<'a> {
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    /// Numbered SQL (`$1, $2, ...`).
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[&'a (dyn ToSql + Sync)] {
        &self.params
    }

    fn trace(&self) {
        tracing::debug!(
            target: "instaorm.sql",
            kind = %self.kind,
            param_count = self.params.len(),
            sql = %self.sql,
            "executing"
        );
    }

    /// Execute and return the affected row count.
    pub async fn execute(&self, conn: &impl GenericClient) -> OrmResult<u64> {
        self.trace();
        conn.execute(&self.sql, &self.params).await
    }

    /// Execute and return all rows.
    pub async fn fetch_all(&self, conn: &impl GenericClient) -> OrmResult<Vec<Row>> {
        self.trace();
        conn.query(&self.sql, &self.params).await
    }

    /// Execute and return the first row, or [`OrmError::NotFound`].
    pub async fn fetch_one(&self, conn: &impl GenericClient) -> OrmResult<Row> {
        self.trace();
        conn.query_one(&self.sql, &self.params).await
    }

    /// Execute and return the first row, if any.
    pub async fn fetch_opt(&self, conn: &impl GenericClient) -> OrmResult<Option<Row>> {
        self.trace();
        conn.query_opt(&self.sql, &self.params).await
    }

    /// Execute and map all rows to `T`.
    pub async fn fetch_all_as<T: FromRow>(&self, conn: &impl GenericClient) -> OrmResult<Vec<T>> {
        let rows = self.fetch_all(conn).await?;
        rows.iter().map(T::from_row).collect()
    }

    /// Execute and map the first row to `T`, if any.
    pub async fn fetch_opt_as<T: FromRow>(
        &self,
        conn: &impl GenericClient,
    ) -> OrmResult<Option<T>> {
        let row = self.fetch_opt(conn).await?;
        row.as_ref().map(T::from_row).transpose()
    }

    /// Execute and map the first row to `T`.
    pub async fn fetch_one_as<T: FromRow>(&self, conn: &impl GenericClient) -> OrmResult<T> {
        let row = self.fetch_one(conn).await?;
        T::from_row(&row)
    }

    /// Execute and read the first column of the first row.
    pub async fn fetch_scalar_one<T>(&self, conn: &impl GenericClient) -> OrmResult<T>
    where
        T: for<'b> FromSql<'b> + Send,
    {
        self.trace();
        conn.query_scalar(&self.sql, &self.params).await
    }
}

impl fmt::Debug for BoundQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundQuery")
            .field("kind", &self.kind)
            .field("sql", &self.sql)
            .field("param_count", &self.params.len())
            .finish()
    }
}
