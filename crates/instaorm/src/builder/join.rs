use crate::model::{JoinClause, Keyword};

/// Renders JOIN fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinQueryBuilder;

impl JoinQueryBuilder {
    pub const fn new() -> Self {
        Self
    }

    /// `<type> <right> on <left>.<lcol> = <right>.<rcol>` per join, space separated.
    ///
    /// No joins yield an empty string.
    pub fn render(&self, joins: &[JoinClause]) -> String {
        joins
            .iter()
            .map(|join| {
                let left = format!("{}.{}", join.left_table(), join.left_column());
                let right = format!("{}.{}", join.right_table(), join.right_column());
                [
                    join.join_type().as_str(),
                    join.right_table(),
                    Keyword::On.as_str(),
                    left.as_str(),
                    Keyword::Equals.as_str(),
                    right.as_str(),
                ]
                .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
