//! Validated user row type.

use serde::Serialize;
use uuid::Uuid;

use crate::csv::RawUserRow;

/// Lowest accepted age, inclusive.
pub const MIN_AGE: i64 = 0;
/// Highest accepted age, inclusive.
pub const MAX_AGE: i64 = 150;

/// A validated `user_data` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Primary key.
    pub user_id: Uuid,
    /// Display name, non-empty.
    pub name: String,
    /// Email address, non-empty (format not checked).
    pub email: String,
    /// Age in years, within 0–150.
    pub age: i64,
}

/// Why a single row was rejected. The seeding loop logs these and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// A required field was empty after trimming.
    #[error("missing required field {0:?}")]
    MissingField(&'static str),

    /// `user_id` is not a valid UUID.
    #[error("invalid UUID {0:?}")]
    InvalidUserId(String),

    /// `age` is not an integer.
    #[error("age {0:?} is not an integer")]
    InvalidAge(String),

    /// `age` parsed but falls outside 0–150.
    #[error("age {0} out of range ({MIN_AGE}-{MAX_AGE})")]
    AgeOutOfRange(i64),
}

impl UserRecord {
    /// Validate a raw CSV row.
    ///
    /// Fields are trimmed first; the first failing check wins.
    pub fn parse(raw: &RawUserRow) -> Result<Self, RowError> {
        let user_id = raw.user_id.trim();
        let name = raw.name.trim();
        let email = raw.email.trim();
        let age = raw.age.trim();

        if user_id.is_empty() {
            return Err(RowError::MissingField("user_id"));
        }
        if name.is_empty() {
            return Err(RowError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(RowError::MissingField("email"));
        }
        if age.is_empty() {
            return Err(RowError::MissingField("age"));
        }

        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| RowError::InvalidUserId(user_id.to_string()))?;

        let age: i64 = age
            .parse()
            .map_err(|_| RowError::InvalidAge(raw.age.trim().to_string()))?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(RowError::AgeOutOfRange(age));
        }

        Ok(Self {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            age,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
