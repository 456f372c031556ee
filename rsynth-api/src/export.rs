//! Shutdown export of the performance log table to CSV
//!
//! Header row from the column names, one line per row in id order, NULL as
//! an empty field. Text is quoted (inner quotes doubled) only when it
//! contains a comma or a quote.

use rsynth_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};
use std::path::Path;

/// Write every performance log to `path`
///
/// Returns the number of exported rows. An empty table writes no file.
pub async fn export_performance_logs(pool: &SqlitePool, path: &Path) -> Result<usize> {
    let rows = sqlx::query("SELECT * FROM performance_logs ORDER BY id")
        .fetch_all(pool)
        .await?;

    let Some(csv) = render_csv(&rows)? else {
        return Ok(0);
    };

    tokio::fs::write(path, csv).await?;
    Ok(rows.len())
}

/// Render rows as CSV text; `None` when there are no rows
pub fn render_csv(rows: &[SqliteRow]) -> Result<Option<String>> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };

    let header: Vec<&str> = first.columns().iter().map(|col| col.name()).collect();
    let mut out = header.join(",");

    for row in rows {
        let fields = (0..row.len())
            .map(|i| csv_field(row, i))
            .collect::<Result<Vec<_>>>()?;
        out.push('\n');
        out.push_str(&fields.join(","));
    }

    Ok(Some(out))
}

/// Format one column value of a row
fn csv_field(row: &SqliteRow, index: usize) -> Result<String> {
    let storage_class = {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(String::new());
        }
        raw.type_info().name().to_string()
    };

    let field = match storage_class.as_str() {
        "INTEGER" => row.try_get::<i64, _>(index)?.to_string(),
        "REAL" => row.try_get::<f64, _>(index)?.to_string(),
        "BLOB" => csv_escape(&String::from_utf8_lossy(&row.try_get::<Vec<u8>, _>(index)?)),
        _ => csv_escape(&row.try_get::<String, _>(index)?),
    };

    Ok(field)
}

/// Quote a text value if it contains a comma or a double quote
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
