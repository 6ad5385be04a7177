//! Batched inserts of tabular robot output.

use crate::error::{DatabaseError, Result};
use sqlx::SqlitePool;

/// Insert string rows into `table` in batches, returning rows inserted.
///
/// Table and column names are restricted to plain identifiers since they
/// are interpolated into the statement; values are always bound.
pub async fn insert_batch(
    pool: &SqlitePool,
    table: &str,
    columns: &[&str],
    rows: &[Vec<String>],
    batch_size: usize,
) -> Result<u64> {
    validate_identifier(table)?;
    for column in columns {
        validate_identifier(column)?;
    }
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(DatabaseError::RowShape {
                row: idx,
                cells: row.len(),
                columns: columns.len(),
            });
        }
    }

    let batch_size = batch_size.max(1);
    let mut inserted = 0;
    for chunk in rows.chunks(batch_size) {
        let placeholders = std::iter::repeat(format!(
            "({})",
            std::iter::repeat("?").take(columns.len()).collect::<Vec<_>>().join(", ")
        ))
        .take(chunk.len())
        .collect::<Vec<_>>()
        .join(", ");
        let statement = format!(
            "INSERT INTO {table} ({}) VALUES {placeholders}",
            columns.join(", ")
        );

        let mut query = sqlx::query(&statement);
        for row in chunk {
            for value in row {
                query = query.bind(value);
            }
        }
        inserted += query.execute(pool).await?.rows_affected();
    }

    tracing::debug!(table, inserted, "batch insert finished");
    Ok(inserted)
}

fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(DatabaseError::InvalidIdentifier(name.to_string()))
    }
}
