use super::Column;
use serde::{Deserialize, Serialize};

/// A table together with the columns a query touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    table_name: String,
    column_list: Vec<Column>,
}

impl Table {
    pub fn new(table_name: impl Into<String>, column_list: Vec<Column>) -> Self {
        Self {
            table_name: table_name.into(),
            column_list,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn column_list(&self) -> &[Column] {
        &self.column_list
    }
}
