use serde::{Deserialize, Serialize};
use std::fmt;

/// Join flavours understood by the join builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinType {
    Inner,
    Outer,
    Join,
    Left,
}

impl JoinType {
    /// The literal SQL text emitted for this join.
    pub const fn as_str(self) -> &'static str {
        match self {
            JoinType::Inner => "inner",
            JoinType::Outer => "outer",
            JoinType::Join => "join",
            JoinType::Left => "left join",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directional join: `<join_type> <right_table> on <left>.<col> = <right>.<col>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinClause {
    left_table: String,
    left_column: String,
    right_table: String,
    right_column: String,
    join_type: JoinType,
}

impl JoinClause {
    pub fn new(
        left_table: impl Into<String>,
        left_column: impl Into<String>,
        right_table: impl Into<String>,
        right_column: impl Into<String>,
        join_type: JoinType,
    ) -> Self {
        Self {
            left_table: left_table.into(),
            left_column: left_column.into(),
            right_table: right_table.into(),
            right_column: right_column.into(),
            join_type,
        }
    }

    pub fn left_table(&self) -> &str {
        &self.left_table
    }

    pub fn left_column(&self) -> &str {
        &self.left_column
    }

    pub fn right_table(&self) -> &str {
        &self.right_table
    }

    pub fn right_column(&self) -> &str {
        &self.right_column
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }
}
