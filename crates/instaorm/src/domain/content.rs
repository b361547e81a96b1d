use crate::error::{OrmError, OrmResult};
use crate::row::{FromRow, RowExt};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Media type of a post or story, stored as an integer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Media {
    Image,
    Video,
}

impl Media {
    pub const fn id(self) -> i32 {
        match self {
            Media::Image => 1,
            Media::Video => 2,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Media::Image),
            2 => Some(Media::Video),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub caption: String,
    pub media: Media,
    pub is_private: bool,
    pub created_at: NaiveDateTime,
}

/// Column order of `PostSqlInjector::retrieve_query`.
impl FromRow for Post {
    fn from_row(row: &Row) -> OrmResult<Self> {
        let media_id: i32 = row.try_get_index(4)?;
        let media = Media::from_id(media_id)
            .ok_or_else(|| OrmError::decode("type", format!("unknown media id {media_id}")))?;
        Ok(Self {
            id: row.try_get_index(0)?,
            user_id: row.try_get_index(1)?,
            user_name: row.try_get_index(2)?,
            caption: row.try_get_index(3)?,
            media,
            is_private: row.try_get_index(5)?,
            created_at: row.try_get_index(6)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: i64,
    pub caption: String,
    pub is_private: bool,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reel {
    pub id: i64,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub caption: String,
    pub is_private: bool,
    pub created_at: NaiveDateTime,
    pub duration: String,
}

/// Column order of `ReelSqlInjector::select_query`.
impl FromRow for Reel {
    fn from_row(row: &Row) -> OrmResult<Self> {
        Ok(Self {
            id: row.try_get_index(0)?,
            user_id: row.try_get_index(1)?,
            user_name: row.try_get_index(2)?,
            caption: row.try_get_index(3)?,
            is_private: row.try_get_index(4)?,
            created_at: row.try_get_index(5)?,
            duration: row.try_get_index(6)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReel {
    pub user_id: i64,
    pub caption: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub id: i64,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub caption: String,
    pub is_private: bool,
    pub music: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Column order of `StorySqlInjector::select_query`.
impl FromRow for Story {
    fn from_row(row: &Row) -> OrmResult<Self> {
        Ok(Self {
            id: row.try_get_index(0)?,
            user_id: row.try_get_index(1)?,
            user_name: row.try_get_index(2)?,
            caption: row.try_get_index(3)?,
            is_private: row.try_get_index(4)?,
            music: row.try_get_index(5)?,
            created_at: row.try_get_index(6)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStory {
    pub user_id: i64,
    pub caption: String,
    pub is_private: bool,
    pub music: Option<String>,
    pub media: Media,
}

/// A comment on a post or reel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Id of the commented post or reel.
    pub content_id: i64,
    pub commented_by: i64,
    pub content: String,
}
