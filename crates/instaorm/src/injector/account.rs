use super::delete_by_id;
use crate::builder::{QueryBuilders, QueryRenderer};
use crate::error::OrmResult;
use crate::model::{Column, DataConfigContainer, JoinClause, JoinType, WhereClause};
use crate::template::SqlTemplate;

const ACCOUNT: &str = "account";
const ADDRESS: &str = "address";
const PROFILE_COLUMNS: [&str; 4] = ["name", "mobile", "email", "password"];

/// Queries for the `account` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountSqlInjector {
    builders: QueryBuilders,
}

impl AccountSqlInjector {
    pub const fn new() -> Self {
        Self {
            builders: QueryBuilders::new(),
        }
    }

    /// Binds `name, mobile, email, password`.
    pub fn insert_query(&self) -> OrmResult<SqlTemplate> {
        self.builders.insert.render(&self.insert_config()?)
    }

    pub fn insert_returning_id(&self) -> OrmResult<SqlTemplate> {
        self.builders
            .insert
            .render_returning(&self.insert_config()?, "id")
    }

    fn insert_config(&self) -> OrmResult<DataConfigContainer> {
        DataConfigContainer::builder(ACCOUNT)
            .columns(PROFILE_COLUMNS.map(Column::new))
            .build()
    }

    /// Binds the profile columns, then `account.id`.
    pub fn update_query(&self) -> OrmResult<SqlTemplate> {
        let config = DataConfigContainer::builder(ACCOUNT)
            .columns(PROFILE_COLUMNS.map(Column::new))
            .where_clause(WhereClause::qualified("id", ACCOUNT))
            .build()?;
        self.builders.update.render(&config)
    }

    /// The account row together with its address, if any.
    pub fn retrieve_query(&self) -> OrmResult<SqlTemplate> {
        let config = DataConfigContainer::builder(ACCOUNT)
            .join(JoinClause::new(ACCOUNT, "id", ADDRESS, "user_id", JoinType::Left))
            .where_clause(WhereClause::qualified("id", ACCOUNT))
            .build()?;
        self.builders.select.render(&config)
    }

    pub fn delete_query(&self) -> OrmResult<SqlTemplate> {
        delete_by_id(&self.builders.delete, ACCOUNT)
    }

    pub fn select_for_mobile(&self) -> OrmResult<SqlTemplate> {
        self.select_for("mobile")
    }

    pub fn select_for_email(&self) -> OrmResult<SqlTemplate> {
        self.select_for("email")
    }

    pub fn select_for_name(&self) -> OrmResult<SqlTemplate> {
        self.select_for("name")
    }

    fn select_for(&self, column: &str) -> OrmResult<SqlTemplate> {
        let config = DataConfigContainer::builder(ACCOUNT)
            .column(Column::qualified(column, ACCOUNT))
            .where_clause(WhereClause::qualified(column, ACCOUNT))
            .build()?;
        self.builders.select.render(&config)
    }
}

/// Queries for the `address` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressSqlInjector {
    builders: QueryBuilders,
}

impl AddressSqlInjector {
    pub const fn new() -> Self {
        Self {
            builders: QueryBuilders::new(),
        }
    }

    /// Binds `door_no, state, user_id`.
    pub fn create_query(&self) -> OrmResult<SqlTemplate> {
        let config = DataConfigContainer::builder(ADDRESS)
            .columns(
                ["door_no", "state", "user_id"]
                    .map(|name| Column::qualified(name, ADDRESS)),
            )
            .build()?;
        self.builders.insert.render(&config)
    }

    pub fn delete_query(&self) -> OrmResult<SqlTemplate> {
        delete_by_id(&self.builders.delete, ADDRESS)
    }

    /// Every address of one account; binds `address.user_id`.
    pub fn delete_for_user_query(&self) -> OrmResult<SqlTemplate> {
        let config = DataConfigContainer::builder(ADDRESS)
            .where_clause(WhereClause::qualified("user_id", ADDRESS))
            .build()?;
        self.builders.delete.render(&config)
    }
}
