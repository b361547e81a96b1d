use super::traits::QueryRenderer;
use super::where_builder::WhereQueryBuilder;
use crate::error::OrmResult;
use crate::model::{Column, DataConfigContainer, Keyword, require_ident};
use crate::template::{BindSlot, QueryKind, SqlTemplate};

/// INSERT renderer.
///
/// `insert into <table> (<c1>, <c2>) values (? ,?)`
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertQueryBuilder {
    where_builder: WhereQueryBuilder,
}

impl InsertQueryBuilder {
    pub const fn new() -> Self {
        Self {
            where_builder: WhereQueryBuilder::new(),
        }
    }

    /// Render and append `returning <key>` so the generated key comes back as a row.
    pub fn render_returning(&self, config: &DataConfigContainer, key: &str) -> OrmResult<SqlTemplate> {
        require_ident("InsertQueryBuilder", "returning column", key)?;
        let template = self.render(config)?;
        let binds = template.binds().to_vec();
        let sql = [template.sql(), Keyword::Returning.as_str(), key].join(" ");
        Ok(SqlTemplate::new(QueryKind::Insert, sql, binds))
    }
}

impl QueryRenderer for InsertQueryBuilder {
    fn kind(&self) -> QueryKind {
        QueryKind::Insert
    }

    fn render(&self, config: &DataConfigContainer) -> OrmResult<SqlTemplate> {
        let columns = config
            .column_list()
            .iter()
            .map(Column::name)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = self.where_builder.placeholder_list(&columns);

        let sql = [
            Keyword::Insert.as_str(),
            Keyword::Into.as_str(),
            config.table_name(),
            self.where_builder.parenthesize(&columns).as_str(),
            Keyword::Values.as_str(),
            self.where_builder.parenthesize(&placeholders).as_str(),
        ]
        .join(" ");

        let binds = config
            .column_list()
            .iter()
            .map(|column| BindSlot::new(column.table_name(), column.name()))
            .collect();

        Ok(SqlTemplate::new(QueryKind::Insert, sql, binds))
    }
}
