use super::traits::QueryRenderer;
use super::where_builder::WhereQueryBuilder;
use crate::error::{OrmError, OrmResult};
use crate::model::{DataConfigContainer, Keyword};
use crate::template::{QueryKind, SqlTemplate};

/// DELETE renderer: `delete from <table> where ...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteQueryBuilder {
    where_builder: WhereQueryBuilder,
}

impl DeleteQueryBuilder {
    pub const fn new() -> Self {
        Self {
            where_builder: WhereQueryBuilder::new(),
        }
    }
}

impl QueryRenderer for DeleteQueryBuilder {
    fn kind(&self) -> QueryKind {
        QueryKind::Delete
    }

    fn render(&self, config: &DataConfigContainer) -> OrmResult<SqlTemplate> {
        // A delete without a predicate would empty the table.
        if config.where_clauses().is_empty() {
            return Err(OrmError::validation(
                "DeleteQueryBuilder: WHERE clause cannot be empty",
            ));
        }

        let sql = [
            Keyword::Delete.as_str(),
            Keyword::From.as_str(),
            config.table_name(),
            self.where_builder.render(config.where_clauses()).as_str(),
        ]
        .join(" ");
        let binds = self.where_builder.bind_slots(config.where_clauses());

        Ok(SqlTemplate::new(QueryKind::Delete, sql, binds))
    }
}
