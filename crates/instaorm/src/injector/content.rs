use super::delete_by_id;
use crate::builder::{QueryBuilders, QueryRenderer};
use crate::error::OrmResult;
use crate::model::{Column, DataConfigContainer, JoinClause, JoinType, WhereClause};
use crate::template::SqlTemplate;

/// Queries for the `post` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostSqlInjector {
    builders: QueryBuilders,
}

impl PostSqlInjector {
    const TABLE: &'static str = "post";

    pub const fn new() -> Self {
        Self {
            builders: QueryBuilders::new(),
        }
    }

    /// Binds `user_id, caption, is_private, type`.
    pub fn insert_query(&self) -> OrmResult<SqlTemplate> {
        self.builders.insert.render(&self.insert_config()?)
    }

    /// [`Self::insert_query`] returning the generated `id`.
    pub fn insert_returning_id(&self) -> OrmResult<SqlTemplate> {
        self.builders
            .insert
            .render_returning(&self.insert_config()?, "id")
    }

    fn insert_config(&self) -> OrmResult<DataConfigContainer> {
        DataConfigContainer::builder(Self::TABLE)
            .columns(qualified(Self::TABLE, &["user_id", "caption", "is_private", "type"]))
            .build()
    }

    /// One post with its author's name; binds `post.id`.
    pub fn retrieve_query(&self) -> OrmResult<SqlTemplate> {
        let config = DataConfigContainer::builder(Self::TABLE)
            .columns(qualified(Self::TABLE, &["id", "user_id"]))
            .column(Column::qualified("name", "account"))
            .columns(qualified(
                Self::TABLE,
                &["caption", "type", "is_private", "created_at"],
            ))
            .join(author_join(Self::TABLE))
            .where_clause(WhereClause::qualified("id", Self::TABLE))
            .build()?;
        self.builders.select.render(&config)
    }

    pub fn delete_query(&self) -> OrmResult<SqlTemplate> {
        delete_by_id(&self.builders.delete, Self::TABLE)
    }
}

/// Queries for the `reels` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReelSqlInjector {
    builders: QueryBuilders,
}

impl ReelSqlInjector {
    const TABLE: &'static str = "reels";

    pub const fn new() -> Self {
        Self {
            builders: QueryBuilders::new(),
        }
    }

    /// Binds `user_id, caption, duration`.
    pub fn insert_query(&self) -> OrmResult<SqlTemplate> {
        self.builders.insert.render(&self.insert_config()?)
    }

    pub fn insert_returning_id(&self) -> OrmResult<SqlTemplate> {
        self.builders
            .insert
            .render_returning(&self.insert_config()?, "id")
    }

    fn insert_config(&self) -> OrmResult<DataConfigContainer> {
        DataConfigContainer::builder(Self::TABLE)
            .columns(qualified(Self::TABLE, &["user_id", "caption", "duration"]))
            .build()
    }

    pub fn select_query(&self) -> OrmResult<SqlTemplate> {
        let config = DataConfigContainer::builder(Self::TABLE)
            .columns(qualified(Self::TABLE, &["id", "user_id"]))
            .column(Column::qualified("name", "account"))
            .columns(qualified(
                Self::TABLE,
                &["caption", "is_private", "created_at", "duration"],
            ))
            .join(author_join(Self::TABLE))
            .where_clause(WhereClause::qualified("id", Self::TABLE))
            .build()?;
        self.builders.select.render(&config)
    }

    pub fn delete_query(&self) -> OrmResult<SqlTemplate> {
        delete_by_id(&self.builders.delete, Self::TABLE)
    }
}

/// Queries for the `story` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorySqlInjector {
    builders: QueryBuilders,
}

impl StorySqlInjector {
    const TABLE: &'static str = "story";

    pub const fn new() -> Self {
        Self {
            builders: QueryBuilders::new(),
        }
    }

    /// Binds `user_id, caption, is_private, music, media`.
    pub fn insert_query(&self) -> OrmResult<SqlTemplate> {
        self.builders.insert.render(&self.insert_config()?)
    }

    pub fn insert_returning_id(&self) -> OrmResult<SqlTemplate> {
        self.builders
            .insert
            .render_returning(&self.insert_config()?, "id")
    }

    fn insert_config(&self) -> OrmResult<DataConfigContainer> {
        DataConfigContainer::builder(Self::TABLE)
            .columns(qualified(
                Self::TABLE,
                &["user_id", "caption", "is_private", "music", "media"],
            ))
            .build()
    }

    pub fn select_query(&self) -> OrmResult<SqlTemplate> {
        let config = DataConfigContainer::builder(Self::TABLE)
            .columns(qualified(Self::TABLE, &["id", "user_id"]))
            .column(Column::qualified("name", "account"))
            .columns(qualified(
                Self::TABLE,
                &["caption", "is_private", "music", "created_at"],
            ))
            .join(author_join(Self::TABLE))
            .where_clause(WhereClause::qualified("id", Self::TABLE))
            .build()?;
        self.builders.select.render(&config)
    }

    pub fn delete_query(&self) -> OrmResult<SqlTemplate> {
        delete_by_id(&self.builders.delete, Self::TABLE)
    }
}

fn qualified<'a>(table: &'a str, names: &'a [&'a str]) -> impl Iterator<Item = Column> + 'a {
    names.iter().map(move |name| Column::qualified(*name, table))
}

/// `left join account on <table>.user_id = account.id`
fn author_join(table: &str) -> JoinClause {
    JoinClause::new(table, "user_id", "account", "id", JoinType::Left)
}
