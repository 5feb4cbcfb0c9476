// used for persistence
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection, Row};
use tracing::debug;

use crate::error::{RecmapError, Result};
use crate::value::Value;

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Value::Null => Ok(ToSqlOutput::from(rusqlite::types::Null)),
            Value::Bool(b) => Ok(ToSqlOutput::from(*b)),
            Value::Integer(i) => Ok(ToSqlOutput::from(*i)),
            Value::Float(x) => Ok(ToSqlOutput::from(*x)),
            Value::String(s) => Ok(ToSqlOutput::from(s.as_str())),
            Value::Date(d) => d.to_sql(),
            Value::DateTime(d) => d.to_sql(),
            Value::Tagged(..) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(
                RecmapError::Sql(format!("tagged value {} has no column form", self)),
            ))),
        }
    }
}

// SQLite has no date or boolean type, dates and timestamps come back as
// text and booleans as the integers 0 and 1
impl FromSql for Value {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Value::Null),
            ValueRef::Integer(i) => Ok(Value::Integer(i)),
            ValueRef::Real(x) => Ok(Value::Float(x)),
            ValueRef::Text(t) => std::str::from_utf8(t)
                .map(|s| Value::String(s.to_owned()))
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

/// Reads the named columns of a result row as a property list.
///
/// SQL `NULL` columns are left out, so they decode as absent fields.
pub fn read_properties(row: &Row, columns: &[&str]) -> Result<Vec<(String, Value)>> {
    let mut properties = Vec::with_capacity(columns.len());
    for column in columns {
        match row.get::<_, Value>(*column)? {
            Value::Null => (),
            value => properties.push((column.to_string(), value)),
        }
    }
    Ok(properties)
}

fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// `INSERT` statement with one positional parameter per property.
///
/// An empty property list inserts a row of column defaults.
pub fn insert_statement(table: &str, properties: &[(String, Value)]) -> String {
    if properties.is_empty() {
        return format!("INSERT INTO {} DEFAULT VALUES", quote(table));
    }
    let columns: Vec<String> = properties.iter().map(|(name, _)| quote(name)).collect();
    let parameters: Vec<String> = (1..=properties.len()).map(|i| format!("?{}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote(table),
        columns.join(", "),
        parameters.join(", ")
    )
}

/// Inserts an encoded property list as a new row of `table`.
pub fn insert(conn: &Connection, table: &str, properties: &[(String, Value)]) -> Result<usize> {
    let statement = insert_statement(table, properties);
    debug!(%statement, "inserting properties");
    let inserted = conn.execute(&statement, params_from_iter(properties.iter().map(|(_, value)| value)))?;
    Ok(inserted)
}
