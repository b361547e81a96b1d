use super::join::JoinQueryBuilder;
use super::traits::QueryRenderer;
use super::where_builder::WhereQueryBuilder;
use crate::error::OrmResult;
use crate::model::{Column, DataConfigContainer, Keyword};
use crate::template::{QueryKind, SqlTemplate};

/// SELECT renderer.
///
/// `select <t.c>, <t.c> from <table> <joins> <where>`
///
/// The projection is `*` when no columns are given. The join and WHERE
/// segments are always separated by a space, even when empty, so a bare
/// select ends in two spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectQueryBuilder {
    join_builder: JoinQueryBuilder,
    where_builder: WhereQueryBuilder,
}

impl SelectQueryBuilder {
    pub const fn new() -> Self {
        Self {
            join_builder: JoinQueryBuilder::new(),
            where_builder: WhereQueryBuilder::new(),
        }
    }
}

impl QueryRenderer for SelectQueryBuilder {
    fn kind(&self) -> QueryKind {
        QueryKind::Select
    }

    fn render(&self, config: &DataConfigContainer) -> OrmResult<SqlTemplate> {
        let projection = if config.column_list().is_empty() {
            "*".to_string()
        } else {
            config
                .column_list()
                .iter()
                .map(Column::qualified_name)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let joins = self.join_builder.render(config.join_clause_list());
        let filter = if config.where_clauses().is_empty() {
            String::new()
        } else {
            self.where_builder.render(config.where_clauses())
        };

        let sql = [
            Keyword::Select.as_str(),
            projection.as_str(),
            Keyword::From.as_str(),
            config.table_name(),
            joins.as_str(),
            filter.as_str(),
        ]
        .join(" ");
        let binds = self.where_builder.bind_slots(config.where_clauses());

        Ok(SqlTemplate::new(QueryKind::Select, sql, binds))
    }
}
