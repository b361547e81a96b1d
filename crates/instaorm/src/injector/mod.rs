//! Domain SQL injectors.
//!
//! An injector owns the table layout of one entity. Each method assembles a
//! descriptor and renders it with the matching builder, so DAOs only ever
//! see finished [`SqlTemplate`]s.

mod account;
mod content;
mod engagement;

pub use account::{AccountSqlInjector, AddressSqlInjector};
pub use content::{PostSqlInjector, ReelSqlInjector, StorySqlInjector};
pub use engagement::{ContentKind, Engagement, EngagementSqlInjector};

use crate::builder::{DeleteQueryBuilder, QueryRenderer};
use crate::error::OrmResult;
use crate::model::{DataConfigContainer, WhereClause};
use crate::template::SqlTemplate;

/// `delete from <table> where <table>.id = ?`
pub(crate) fn delete_by_id(delete: &DeleteQueryBuilder, table: &str) -> OrmResult<SqlTemplate> {
    let config = DataConfigContainer::builder(table)
        .where_clause(WhereClause::qualified("id", table))
        .build()?;
    delete.render(&config)
}

/// Every injector query, rendered and labelled `<entity>.<operation>`.
pub fn catalog() -> OrmResult<Vec<(String, SqlTemplate)>> {
    let post = PostSqlInjector::new();
    let reel = ReelSqlInjector::new();
    let story = StorySqlInjector::new();
    let account = AccountSqlInjector::new();
    let address = AddressSqlInjector::new();
    let engagement = EngagementSqlInjector::new();

    let mut out = vec![
        ("post.insert".to_string(), post.insert_query()?),
        ("post.retrieve".to_string(), post.retrieve_query()?),
        ("post.delete".to_string(), post.delete_query()?),
        ("reel.insert".to_string(), reel.insert_query()?),
        ("reel.select".to_string(), reel.select_query()?),
        ("reel.delete".to_string(), reel.delete_query()?),
        ("story.insert".to_string(), story.insert_query()?),
        ("story.select".to_string(), story.select_query()?),
        ("story.delete".to_string(), story.delete_query()?),
    ];

    for (parent, kind) in engagement.supported() {
        let label = format!("{}.{}", parent.table_prefix(), kind.table_suffix());
        out.push((format!("{label}.insert"), engagement.insert_query(parent, kind)?));
        out.push((format!("{label}.delete"), engagement.delete_query(parent, kind)?));
    }

    out.extend([
        ("account.insert".to_string(), account.insert_query()?),
        ("account.update".to_string(), account.update_query()?),
        ("account.retrieve".to_string(), account.retrieve_query()?),
        ("account.delete".to_string(), account.delete_query()?),
        ("account.select_for_mobile".to_string(), account.select_for_mobile()?),
        ("account.select_for_email".to_string(), account.select_for_email()?),
        ("account.select_for_name".to_string(), account.select_for_name()?),
        ("address.create".to_string(), address.create_query()?),
        ("address.delete".to_string(), address.delete_query()?),
        ("address.delete_for_user".to_string(), address.delete_for_user_query()?),
    ]);

    Ok(out)
}

#[cfg(test)]
mod tests;
