use serde::{Deserialize, Serialize};

/// One WHERE predicate.
///
/// Without an operator the clause renders as an equality against a
/// placeholder (`post.id = ?`) and consumes one bind value. With an operator
/// the clause renders as `<column> <operator>` and is taken to be a complete
/// predicate (`deleted_at is null`), so it consumes no bind value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhereClause {
    column_name: String,
    table_name: Option<String>,
    operator: Option<String>,
}

impl WhereClause {
    /// Unqualified equality clause.
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            table_name: None,
            operator: None,
        }
    }

    /// Equality clause on `table_name.column_name`.
    pub fn qualified(column_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            table_name: Some(table_name.into()),
            operator: None,
        }
    }

    /// Replace the equality placeholder with a literal operator tail.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    /// Whether rendering this clause emits a `?` placeholder.
    pub fn binds_value(&self) -> bool {
        self.operator.is_none()
    }

    pub(crate) fn qualified_name(&self) -> String {
        super::dotted(self.table_name(), &self.column_name)
    }
}
