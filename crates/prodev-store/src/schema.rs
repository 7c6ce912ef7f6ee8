//! SQLite schema for the user store.

/// Default database filename, created in the working directory.
pub const DEFAULT_DB_FILENAME: &str = "alx_prodev.db";

/// Connection pragmas applied on open.
pub const PRAGMAS: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
    PRAGMA foreign_keys = ON;
";

/// Idempotent DDL: table plus secondary index on the primary key column.
pub const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS user_data (
        user_id TEXT PRIMARY KEY,
        name    TEXT NOT NULL,
        email   TEXT NOT NULL,
        age     INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_user_data_user_id ON user_data(user_id);
";
