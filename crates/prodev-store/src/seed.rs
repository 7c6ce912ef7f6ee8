//! Idempotent CSV → `user_data` loading.
//!
//! Rows are validated one by one; a malformed row is logged and skipped,
//! never aborting the run. Inserts use `INSERT OR IGNORE` inside a single
//! transaction, so re-seeding the same CSV leaves exactly one row per
//! `user_id`.

use std::path::Path;

use rusqlite::{Connection, params};
use serde::Serialize;
use tracing::{info, warn};

use crate::csv::read_user_rows;
use crate::database::Database;
use crate::error::Result;
use crate::record::UserRecord;

/// Outcome of one seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Data rows seen in the CSV (blank lines excluded).
    pub total_rows: usize,
    /// Rows newly inserted.
    pub inserted: usize,
    /// Valid rows whose `user_id` already existed.
    pub duplicates: usize,
    /// Rows rejected by validation.
    pub invalid: usize,
}

/// Result of a post-seed sanity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupStatus {
    /// Whether the `user_data` table exists.
    pub table_exists: bool,
    /// Number of rows currently stored.
    pub row_count: i64,
}

/// Load a CSV file into `user_data`.
///
/// All inserts run in one transaction: either the whole file's worth of
/// valid rows lands, or none of it does.
pub fn seed_from_csv(db: &Database, csv_path: &Path) -> Result<SeedReport> {
    let rows = read_user_rows(csv_path)?;
    let mut report = SeedReport {
        total_rows: rows.len(),
        ..SeedReport::default()
    };

    db.with_transaction(|tx| {
        for raw in &rows {
            let record = match UserRecord::parse(raw) {
                Ok(record) => record,
                Err(error) => {
                    warn!(line = raw.line, %error, "skipping invalid row");
                    report.invalid += 1;
                    continue;
                }
            };
            if insert_user(tx, &record)? {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
            }
        }
        Ok(())
    })?;

    info!(
        csv = %csv_path.display(),
        total = report.total_rows,
        inserted = report.inserted,
        duplicates = report.duplicates,
        invalid = report.invalid,
        "seeding complete"
    );
    Ok(report)
}

/// Insert one record, ignoring an existing `user_id`.
///
/// Returns `true` if a row was inserted, `false` if it already existed.
pub fn insert_user(conn: &Connection, record: &UserRecord) -> Result<bool> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO user_data (user_id, name, email, age)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            record.user_id.to_string(),
            record.name,
            record.email,
            record.age
        ],
    )?;
    Ok(changed > 0)
}

/// Check that the table exists and report its row count.
pub fn validate_setup(db: &Database) -> Result<SetupStatus> {
    db.with_conn(|conn| {
        let table_exists: bool = conn.query_row(
            "SELECT EXISTS(
                 SELECT 1 FROM sqlite_master WHERE type='table' AND name='user_data'
             )",
            [],
            |row| row.get(0),
        )?;
        let row_count = if table_exists {
            conn.query_row("SELECT COUNT(*) FROM user_data", [], |row| row.get(0))?
        } else {
            0
        };
        Ok(SetupStatus {
            table_exists,
            row_count,
        })
    })
}

/// Total number of stored users.
pub fn count_users(db: &Database) -> Result<i64> {
    db.with_conn(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM user_data", [], |row| row.get(0))?)
    })
}

/// Fetch up to `limit` rows, ordered by `user_id`.
pub fn sample(db: &Database, limit: usize) -> Result<Vec<UserRecord>> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT user_id, name, email, age FROM user_data
             ORDER BY user_id LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit], map_user_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Map a `user_id, name, email, age` row to a [`UserRecord`].
pub(crate) fn map_user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserRecord> {
    let id: String = row.get(0)?;
    let user_id = uuid::Uuid::parse_str(&id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(UserRecord {
        user_id,
        name: row.get(1)?,
        email: row.get(2)?,
        age: row.get(3)?,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
