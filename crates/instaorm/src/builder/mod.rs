//! Query builders.
//!
//! Each builder turns a [`DataConfigContainer`](crate::model::DataConfigContainer)
//! into a [`SqlTemplate`](crate::SqlTemplate) with `?` placeholders.
//!
//! ## Design
//!
//! - Builders are stateless. One instance can render any number of
//!   descriptors, from any number of threads.
//! - SQL is assembled from [`Keyword`](crate::model::Keyword) literals and
//!   caller-supplied identifiers only. Values never reach the SQL text.
//! - Safe defaults: DELETE requires WHERE; UPDATE requires SET and WHERE.
//! - Every `?` has a matching [`BindSlot`](crate::BindSlot), in order.

pub mod delete;
pub mod insert;
pub mod join;
pub mod select;
pub mod traits;
pub mod update;
pub mod where_builder;

pub use delete::DeleteQueryBuilder;
pub use insert::InsertQueryBuilder;
pub use join::JoinQueryBuilder;
pub use select::SelectQueryBuilder;
pub use traits::QueryRenderer;
pub use update::UpdateQueryBuilder;
pub use where_builder::WhereQueryBuilder;

/// One instance of every statement builder.
///
/// Injectors hold a `QueryBuilders` instead of constructing builders per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilders {
    pub insert: InsertQueryBuilder,
    pub select: SelectQueryBuilder,
    pub update: UpdateQueryBuilder,
    pub delete: DeleteQueryBuilder,
}

impl QueryBuilders {
    pub const fn new() -> Self {
        Self {
            insert: InsertQueryBuilder::new(),
            select: SelectQueryBuilder::new(),
            update: UpdateQueryBuilder::new(),
            delete: DeleteQueryBuilder::new(),
        }
    }
}

#[cfg(test)]
mod tests;
