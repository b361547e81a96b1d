use crate::error::OrmResult;
use crate::model::DataConfigContainer;
use crate::template::{QueryKind, SqlTemplate};

/// A builder that renders one kind of statement from a descriptor.
pub trait QueryRenderer: Send + Sync {
    /// The statement kind this builder emits.
    fn kind(&self) -> QueryKind;

    /// Render `config` into a template.
    ///
    /// Rendering is pure: the same descriptor always yields the same template.
    fn render(&self, config: &DataConfigContainer) -> OrmResult<SqlTemplate>;

    /// Render and return only the SQL text.
    fn to_sql(&self, config: &DataConfigContainer) -> OrmResult<String> {
        self.render(config).map(SqlTemplate::into_sql)
    }
}
