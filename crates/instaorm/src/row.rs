//! Decoding rows into domain records.

use crate::error::{OrmError, OrmResult};
use std::fmt;
use tokio_postgres::Row;
use tokio_postgres::row::RowIndex;
use tokio_postgres::types::FromSql;

/// A record that can be read back from a result row.
///
/// Implementations decode through [`RowExt`] so a bad column surfaces as
/// [`OrmError::Decode`] naming the column:
///
/// ```ignore
/// impl FromRow for Handle {
///     fn from_row(row: &Row) -> OrmResult<Self> {
///         Ok(Self {
///             id: row.try_get_column("id")?,
///             name: row.try_get_column("name")?,
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> OrmResult<Self>;
}

pub trait RowExt {
    /// Read a column by name.
    fn try_get_column<T>(&self, column: &str) -> OrmResult<T>
    where
        T: for<'a> FromSql<'a>;

    /// Read a column by position. Useful for joined selects whose column
    /// names repeat across tables.
    fn try_get_index<T>(&self, idx: usize) -> OrmResult<T>
    where
        T: for<'a> FromSql<'a>;
}

impl RowExt for Row {
    fn try_get_column<T>(&self, column: &str) -> OrmResult<T>
    where
        T: for<'a> FromSql<'a>,
    {
        decode(self, column, column)
    }

    fn try_get_index<T>(&self, idx: usize) -> OrmResult<T>
    where
        T: for<'a> FromSql<'a>,
    {
        decode(self, idx, format!("#{idx}"))
    }
}

fn decode<I, T>(row: &Row, idx: I, label: impl fmt::Display) -> OrmResult<T>
where
    I: RowIndex + fmt::Display,
    T: for<'a> FromSql<'a>,
{
    row.try_get(idx)
        .map_err(|err| OrmError::decode(label.to_string(), err.to_string()))
}
