use crate::model::{Keyword, Table, WhereClause};
use crate::template::BindSlot;

/// Renders WHERE fragments and the small list helpers the other builders share.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhereQueryBuilder;

impl WhereQueryBuilder {
    pub const fn new() -> Self {
        Self
    }

    /// `where <t.c> = ? <t.c> <op> ...`
    ///
    /// Clauses are separated by a single space with no connective, so more
    /// than one clause does not form a valid predicate. An empty list still
    /// yields `"where "`; callers that may have no clauses check first.
    pub fn render(&self, clauses: &[WhereClause]) -> String {
        let predicates = clauses
            .iter()
            .map(|clause| match clause.operator() {
                None => [
                    clause.qualified_name().as_str(),
                    Keyword::Equals.as_str(),
                    Keyword::Placeholder.as_str(),
                ]
                .join(" "),
                Some(op) => format!("{} {}", clause.qualified_name(), op),
            })
            .collect::<Vec<_>>()
            .join(" ");
        [Keyword::Where.as_str(), predicates.as_str()].join(" ")
    }

    /// One slot per clause that renders a placeholder, in clause order.
    pub fn bind_slots(&self, clauses: &[WhereClause]) -> Vec<BindSlot> {
        clauses
            .iter()
            .filter(|clause| clause.binds_value())
            .map(|clause| BindSlot::new(clause.table_name(), clause.column_name()))
            .collect()
    }

    /// Correlated form for sub-selects: `where t.c = c`.
    ///
    /// Each clause compares the qualified column with the bare column of the
    /// enclosing query instead of a placeholder.
    pub fn render_correlated(&self, clauses: &[WhereClause]) -> String {
        let predicates = clauses
            .iter()
            .map(|clause| match clause.operator() {
                None => [
                    clause.qualified_name().as_str(),
                    Keyword::Equals.as_str(),
                    clause.column_name(),
                ]
                .join(" "),
                Some(op) => format!("{} {}", clause.qualified_name(), op),
            })
            .collect::<Vec<_>>()
            .join(" ");
        [Keyword::Where.as_str(), predicates.as_str()].join(" ")
    }

    /// `t.a,t.b` for every column of `table`.
    ///
    /// Columns without their own table are qualified with `table`.
    pub fn column_list(&self, table: &Table) -> String {
        table
            .column_list()
            .iter()
            .map(|column| {
                crate::model::dotted(
                    Some(column.table_name().unwrap_or(table.table_name())),
                    column.name(),
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// One `?` per comma-separated entry of `columns`, joined by `" ,"`.
    ///
    /// An empty or blank list yields an empty string.
    pub fn placeholder_list(&self, columns: &str) -> String {
        if columns.trim().is_empty() {
            return String::new();
        }
        columns
            .split(',')
            .map(|_| Keyword::Placeholder.as_str())
            .collect::<Vec<_>>()
            .join(" ,")
    }

    pub fn parenthesize(&self, fragment: &str) -> String {
        format!("({fragment})")
    }
}
