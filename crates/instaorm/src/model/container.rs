use super::{Column, JoinClause, WhereClause};
use crate::error::{OrmError, OrmResult};
use serde::{Deserialize, Serialize};

/// The query descriptor handed to a builder.
///
/// Holds the target table plus ordered columns, joins and WHERE clauses.
/// The order columns and clauses were appended in is the order their
/// placeholders appear in the rendered SQL.
///
/// # Example
///
/// ```rust
/// use instaorm::model::{Column, DataConfigContainer, WhereClause};
///
/// let config = DataConfigContainer::builder("post")
///     .column(Column::qualified("caption", "post"))
///     .where_clause(WhereClause::qualified("id", "post"))
///     .build()?;
/// assert_eq!(config.table_name(), "post");
/// # Ok::<(), instaorm::OrmError>(())
/// ```
///
/// Deserializing goes through [`DataConfigContainerBuilder::build`], so a
/// loaded descriptor is validated like a hand-built one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DataConfigContainerBuilder")]
pub struct DataConfigContainer {
    table_name: String,
    column_list: Vec<Column>,
    join_clause_list: Vec<JoinClause>,
    where_clauses: Vec<WhereClause>,
}

impl DataConfigContainer {
    /// Start describing a query against `table_name`.
    pub fn builder(table_name: impl Into<String>) -> DataConfigContainerBuilder {
        DataConfigContainerBuilder {
            table_name: table_name.into(),
            column_list: Vec::new(),
            join_clause_list: Vec::new(),
            where_clauses: Vec::new(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn column_list(&self) -> &[Column] {
        &self.column_list
    }

    pub fn join_clause_list(&self) -> &[JoinClause] {
        &self.join_clause_list
    }

    pub fn where_clauses(&self) -> &[WhereClause] {
        &self.where_clauses
    }
}

/// Accumulates the parts of a [`DataConfigContainer`].
#[derive(Debug, Clone, Deserialize)]
#[must_use = "call `build()` to obtain the descriptor"]
pub struct DataConfigContainerBuilder {
    table_name: String,
    #[serde(default)]
    column_list: Vec<Column>,
    #[serde(default)]
    join_clause_list: Vec<JoinClause>,
    #[serde(default)]
    where_clauses: Vec<WhereClause>,
}

impl DataConfigContainerBuilder {
    /// Append one column.
    pub fn column(mut self, column: Column) -> Self {
        self.column_list.push(column);
        self
    }

    /// Append several columns, keeping their order.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.column_list.extend(columns);
        self
    }

    /// Append a join.
    pub fn join(mut self, join: JoinClause) -> Self {
        self.join_clause_list.push(join);
        self
    }

    /// Append a WHERE clause.
    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clauses.push(clause);
        self
    }

    /// Validate identifiers and freeze the descriptor.
    pub fn build(self) -> OrmResult<DataConfigContainer> {
        let ident = |what: &str, value: &str| require_ident(OWNER, what, value);
        ident("table name", &self.table_name)?;

        for column in &self.column_list {
            ident("column name", column.name())?;
            if let Some(table) = column.table_name() {
                ident("column table name", table)?;
            }
        }

        for join in &self.join_clause_list {
            ident("join left table", join.left_table())?;
            ident("join left column", join.left_column())?;
            ident("join right table", join.right_table())?;
            ident("join right column", join.right_column())?;
        }

        for clause in &self.where_clauses {
            ident("where column name", clause.column_name())?;
            if let Some(table) = clause.table_name() {
                ident("where table name", table)?;
            }
            if let Some(op) = clause.operator() {
                if op.trim().is_empty() {
                    return Err(OrmError::validation(format!(
                        "DataConfigContainer: operator for '{}' is blank",
                        clause.column_name()
                    )));
                }
                if op.contains('?') {
                    return Err(OrmError::validation(format!(
                        "DataConfigContainer: operator for '{}' must not contain a placeholder",
                        clause.column_name()
                    )));
                }
            }
        }

        Ok(DataConfigContainer {
            table_name: self.table_name,
            column_list: self.column_list,
            join_clause_list: self.join_clause_list,
            where_clauses: self.where_clauses,
        })
    }
}

impl TryFrom<DataConfigContainerBuilder> for DataConfigContainer {
    type Error = OrmError;

    fn try_from(builder: DataConfigContainerBuilder) -> OrmResult<Self> {
        builder.build()
    }
}

const OWNER: &str = "DataConfigContainer";

/// Reject an identifier that is blank or would change the placeholder or
/// list-entry count of the rendered SQL.
pub(crate) fn require_ident(owner: &str, what: &str, value: &str) -> OrmResult<()> {
    if value.trim().is_empty() {
        return Err(OrmError::validation(format!(
            "{owner}: {what} must not be empty"
        )));
    }
    // `?` is reserved for placeholders and `,` separates list entries.
    if let Some(c) = value.chars().find(|c| matches!(c, '?' | ',')) {
        return Err(OrmError::validation(format!(
            "{owner}: {what} '{value}' contains '{c}'"
        )));
    }
    Ok(())
}
