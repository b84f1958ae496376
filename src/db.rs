use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::logger::debug;

/// A fully materialized result set with stringified cell values.
#[derive(Debug, Clone)]
pub struct Records {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>, // each inner Vec is a row of stringified values
}

/// Open a connection to the store at `path` with foreign-key enforcement on.
///
/// SQLite leaves declared foreign keys inert unless the pragma is set per
/// connection, so every connection this crate opens goes through here.
pub fn open(path: &Path) -> Result<Connection> {
    debug(&format!("sqlite: opening {}", path.display()));
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open store at {}", path.display()))?;
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(conn)
}

/// Fetch every row of `table` as stringified records, columns in schema order.
pub fn fetch_records(conn: &Connection, table: &str) -> Result<Records> {
    // columns
    let mut col_stmt = conn.prepare(&format!("PRAGMA table_info({});", table))?;
    let col_iter = col_stmt.query_map([], |row| row.get::<_, String>(1))?; // name is col 1
    let mut columns = Vec::new();
    for c in col_iter {
        columns.push(c?);
    }

    // rows: read ValueRef per column and stringify conservatively
    let mut rows_vec: Vec<Vec<String>> = Vec::new();
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {}", table))
        .with_context(|| format!("no such table: {}", table))?;
    let col_count = stmt.column_count();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut v = Vec::with_capacity(col_count);
        for i in 0..col_count {
            let cell = row.get_ref(i)?;
            let s = match cell {
                ValueRef::Null => String::new(),
                ValueRef::Integer(i) => i.to_string(),
                ValueRef::Real(f) => f.to_string(),
                ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
                ValueRef::Blob(b) => format!("<blob {} bytes>", b.len()),
            };
            v.push(s);
        }
        rows_vec.push(v);
    }

    Ok(Records {
        columns,
        rows: rows_vec,
    })
}
