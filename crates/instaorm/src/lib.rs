//! # instaorm
//!
//! Descriptor-driven SQL builders and data access for the insta backend.
//!
//! ## Features
//!
//! - **Descriptors, not strings**: a [`DataConfigContainer`] names the table,
//!   columns, joins and WHERE clauses of one query
//! - **Six stateless builders**: INSERT, SELECT, UPDATE, DELETE plus the WHERE
//!   and JOIN fragment renderers
//! - **Checked binding**: every `?` carries a [`BindSlot`]; values are bound
//!   positionally with a count check, or by column name in any order
//! - **Transaction-friendly**: DAOs run on any [`GenericClient`]
//! - **Safe defaults**: DELETE requires WHERE, UPDATE requires SET and WHERE
//!
//! ## Rendering
//!
//! ```rust
//! use instaorm::builder::{QueryRenderer, SelectQueryBuilder};
//! use instaorm::model::{Column, DataConfigContainer, JoinClause, JoinType, WhereClause};
//!
//! let config = DataConfigContainer::builder("post")
//!     .columns([Column::qualified("id", "post"), Column::qualified("name", "account")])
//!     .join(JoinClause::new("post", "user_id", "account", "id", JoinType::Left))
//!     .where_clause(WhereClause::qualified("id", "post"))
//!     .build()?;
//!
//! let template = SelectQueryBuilder::new().render(&config)?;
//! assert_eq!(
//!     template.sql(),
//!     "select post.id, account.name from post left join account on post.user_id = account.id where post.id = ?"
//! );
//! assert_eq!(template.bind_count(), 1);
//! # Ok::<(), instaorm::OrmError>(())
//! ```
//!
//! ## Data access
//!
//! ```ignore
//! use instaorm::dao::PostDao;
//!
//! let pool = instaorm::create_pool(&database_url)?;
//! let client = pool.get().await?;
//! if let Some(post) = PostDao::new().get(&client, post_id).await? {
//!     println!("{} by {:?}", post.caption, post.user_name);
//! }
//! ```

pub mod builder;
pub mod client;
pub mod dao;
pub mod domain;
pub mod error;
pub mod injector;
pub mod model;
pub mod row;
pub mod template;

pub use builder::{
    DeleteQueryBuilder, InsertQueryBuilder, JoinQueryBuilder, QueryBuilders, QueryRenderer,
    SelectQueryBuilder, UpdateQueryBuilder, WhereQueryBuilder,
};
pub use client::GenericClient;
pub use error::{OrmError, OrmResult};
pub use model::DataConfigContainer;
pub use row::{FromRow, RowExt};
pub use template::{BindSlot, BoundQuery, QueryKind, SqlTemplate};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config};
