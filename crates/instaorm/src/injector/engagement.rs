use super::delete_by_id;
use crate::builder::{QueryBuilders, QueryRenderer};
use crate::error::{OrmError, OrmResult};
use crate::model::{Column, DataConfigContainer};
use crate::template::SqlTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content that can be liked, shared or commented on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Post,
    Reel,
    Story,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Post, ContentKind::Reel, ContentKind::Story];

    /// Prefix of the engagement tables, e.g. `reel` in `reel_like`.
    pub const fn table_prefix(self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Reel => "reel",
            ContentKind::Story => "story",
        }
    }

    /// Foreign key column pointing at the content row.
    pub fn id_column(self) -> String {
        format!("{}_id", self.table_prefix())
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_prefix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engagement {
    Like,
    Share,
    Comment,
}

impl Engagement {
    pub const ALL: [Engagement; 3] = [Engagement::Like, Engagement::Share, Engagement::Comment];

    pub const fn table_suffix(self) -> &'static str {
        match self {
            Engagement::Like => "like",
            Engagement::Share => "share",
            Engagement::Comment => "comment",
        }
    }

    /// Columns written after the content id.
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Engagement::Like => &["liked_by"],
            Engagement::Share => &["shared_by"],
            Engagement::Comment => &["commented_by", "content"],
        }
    }
}

/// Queries for the `<content>_<engagement>` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngagementSqlInjector {
    builders: QueryBuilders,
}

impl EngagementSqlInjector {
    pub const fn new() -> Self {
        Self {
            builders: QueryBuilders::new(),
        }
    }

    /// Whether `parent` has a table for `kind`. Stories cannot be commented on.
    pub fn is_supported(&self, parent: ContentKind, kind: Engagement) -> bool {
        !matches!((parent, kind), (ContentKind::Story, Engagement::Comment))
    }

    /// Every supported `(parent, engagement)` pair.
    pub fn supported(&self) -> impl Iterator<Item = (ContentKind, Engagement)> + '_ {
        ContentKind::ALL
            .into_iter()
            .flat_map(|parent| Engagement::ALL.into_iter().map(move |kind| (parent, kind)))
            .filter(|(parent, kind)| self.is_supported(*parent, *kind))
    }

    pub fn table_name(&self, parent: ContentKind, kind: Engagement) -> OrmResult<String> {
        if !self.is_supported(parent, kind) {
            return Err(OrmError::validation(format!(
                "EngagementSqlInjector: {parent} has no {} table",
                kind.table_suffix()
            )));
        }
        Ok(format!("{}_{}", parent.table_prefix(), kind.table_suffix()))
    }

    /// Binds `<parent>_id` followed by the engagement's own columns.
    pub fn insert_query(&self, parent: ContentKind, kind: Engagement) -> OrmResult<SqlTemplate> {
        self.builders.insert.render(&self.insert_config(parent, kind)?)
    }

    pub fn insert_returning_id(
        &self,
        parent: ContentKind,
        kind: Engagement,
    ) -> OrmResult<SqlTemplate> {
        self.builders
            .insert
            .render_returning(&self.insert_config(parent, kind)?, "id")
    }

    fn insert_config(&self, parent: ContentKind, kind: Engagement) -> OrmResult<DataConfigContainer> {
        let table = self.table_name(parent, kind)?;
        DataConfigContainer::builder(table.as_str())
            .column(Column::qualified(parent.id_column(), table.as_str()))
            .columns(
                kind.columns()
                    .iter()
                    .map(|name| Column::qualified(*name, table.as_str())),
            )
            .build()
    }

    pub fn delete_query(&self, parent: ContentKind, kind: Engagement) -> OrmResult<SqlTemplate> {
        let table = self.table_name(parent, kind)?;
        delete_by_id(&self.builders.delete, &table)
    }
}
