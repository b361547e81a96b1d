//! Domain records.
//!
//! Records read back from the database implement [`FromRow`](crate::FromRow)
//! against the column order of the matching injector query. `New*` structs
//! carry the values an insert binds.

mod account;
mod content;

pub use account::{Account, AccountUpdate, Address, NewAccount};
pub use content::{Comment, Media, NewPost, NewReel, NewStory, Post, Reel, Story};
