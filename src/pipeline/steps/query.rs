use crate::display::{format_float, render_table};
use crate::error::{EtlError, Result};
use rusqlite::types::Value;
use rusqlite::Connection;
use std::io::Write;
use tracing::{debug, instrument};

/// Materialized result set of a read query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub fn render(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.iter().map(render_value).collect())
            .collect();
        render_table(&self.columns, &cells)
    }
}

fn render_value(v: &Value) -> String {
    match v {
        Value::Null => "None".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => format_float(*f),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

/// Executes `query` and collects every row.
pub fn fetch(conn: &Connection, query: &str) -> Result<QueryResult> {
    let wrap = |source: rusqlite::Error| EtlError::Query {
        query: query.to_string(),
        source,
    };

    let mut stmt = conn.prepare(query).map_err(wrap)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let mut rows = Vec::new();
    let mut cursor = stmt.query([]).map_err(wrap)?;
    while let Some(row) = cursor.next().map_err(wrap)? {
        let values = (0..width)
            .map(|i| row.get::<_, Value>(i))
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(wrap)?;
        rows.push(values);
    }

    debug!("Query returned {} rows", rows.len());
    Ok(QueryResult { columns, rows })
}

/// Writes the query text, then runs it and writes its result set to `out`.
#[instrument(skip(conn, out))]
pub fn run_query(out: &mut dyn Write, query: &str, conn: &Connection) -> Result<QueryResult> {
    writeln!(out, "{}", query)?;
    let result = fetch(conn, query)?;
    write!(out, "{}", result.render())?;
    Ok(result)
}
