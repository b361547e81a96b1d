use serde::{Deserialize, Serialize};

/// A column reference, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    name: String,
    table_name: Option<String>,
}

impl Column {
    /// Unqualified column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: None,
        }
    }

    /// Column qualified by `table_name`.
    pub fn qualified(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: Some(table_name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// `table.name`, or `name` for an unqualified column.
    pub fn qualified_name(&self) -> String {
        super::dotted(self.table_name(), &self.name)
    }
}
