//! Query descriptors.
//!
//! A descriptor describes the shape of exactly one query before rendering:
//! the target table, the ordered columns, joins and WHERE clauses. The
//! builders in [`crate::builder`] consume a [`DataConfigContainer`] and turn
//! it into a [`crate::SqlTemplate`].
//!
//! Descriptors are plain values. They are built once per query, never
//! mutated after [`DataConfigContainerBuilder::build`] and dropped after
//! rendering.

mod column;
mod container;
mod join;
mod keyword;
mod table;
mod where_clause;

pub use column::Column;
pub use container::{DataConfigContainer, DataConfigContainerBuilder};
pub(crate) use container::require_ident;
pub use join::{JoinClause, JoinType};
pub use keyword::Keyword;
pub use table::Table;
pub use where_clause::WhereClause;

/// Render `table.column`, or a bare `column` when no table is given.
pub(crate) fn dotted(table: Option<&str>, column: &str) -> String {
    match table {
        Some(table) => format!("{table}.{column}"),
        None => column.to_string(),
    }
}
