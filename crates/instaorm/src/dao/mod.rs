//! Data access objects.
//!
//! A DAO takes a template from its injector, binds values by column name and
//! runs it on any [`GenericClient`](crate::GenericClient). Methods that write
//! several tables do not open a transaction themselves; pass a
//! `tokio_postgres::Transaction` when the writes must commit together.
//!
//! Failures are logged on the `instaorm.dao` target and then returned.

mod account;
mod content;
mod engagement;

pub use account::{AccountDao, AddressDao};
pub use content::{PostDao, ReelDao, StoryDao};
pub use engagement::EngagementDao;

use crate::error::OrmResult;

/// Log a failed operation and hand the result back unchanged.
pub(crate) fn logged<T>(operation: &'static str, result: OrmResult<T>) -> OrmResult<T> {
    if let Err(err) = &result {
        tracing::error!(target: "instaorm.dao", operation, error = %err, "{operation} failed");
    }
    result
}
