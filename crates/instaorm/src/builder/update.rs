use super::traits::QueryRenderer;
use super::where_builder::WhereQueryBuilder;
use crate::error::{OrmError, OrmResult};
use crate::model::{DataConfigContainer, Keyword};
use crate::template::{BindSlot, QueryKind, SqlTemplate};

/// UPDATE renderer.
///
/// `update <table> set <c1> = ?, <c2> = ? where ...`
///
/// Bind order is the SET columns followed by the WHERE clauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateQueryBuilder {
    where_builder: WhereQueryBuilder,
}

impl UpdateQueryBuilder {
    pub const fn new() -> Self {
        Self {
            where_builder: WhereQueryBuilder::new(),
        }
    }
}

impl QueryRenderer for UpdateQueryBuilder {
    fn kind(&self) -> QueryKind {
        QueryKind::Update
    }

    fn render(&self, config: &DataConfigContainer) -> OrmResult<SqlTemplate> {
        if config.column_list().is_empty() {
            return Err(OrmError::validation(
                "UpdateQueryBuilder: SET clause cannot be empty",
            ));
        }
        if config.where_clauses().is_empty() {
            return Err(OrmError::validation(
                "UpdateQueryBuilder: WHERE clause cannot be empty",
            ));
        }

        let assignments = config
            .column_list()
            .iter()
            .map(|column| {
                [
                    column.name(),
                    Keyword::Equals.as_str(),
                    Keyword::Placeholder.as_str(),
                ]
                .join(" ")
            })
            .collect::<Vec<_>>()
            .join(", ");

        let sql = [
            Keyword::Update.as_str(),
            config.table_name(),
            Keyword::Set.as_str(),
            assignments.as_str(),
            self.where_builder.render(config.where_clauses()).as_str(),
        ]
        .join(" ");

        let mut binds: Vec<BindSlot> = config
            .column_list()
            .iter()
            .map(|column| BindSlot::new(column.table_name(), column.name()))
            .collect();
        binds.extend(self.where_builder.bind_slots(config.where_clauses()));

        Ok(SqlTemplate::new(QueryKind::Update, sql, binds))
    }
}
