//! Minimal CSV reading for the `user_id,name,email,age` layout.
//!
//! Handles quoted fields, embedded commas, and doubled quotes; column order
//! is taken from the header line and extra columns are ignored. This is not
//! a general CSV library — just enough for the seeding input format.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, StoreError};

/// Column names the header must contain.
pub const REQUIRED_COLUMNS: [&str; 4] = ["user_id", "name", "email", "age"];

/// One data row, unvalidated, with its 1-based line number for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUserRow {
    /// 1-based line number in the source file.
    pub line: usize,
    /// Raw `user_id` field.
    pub user_id: String,
    /// Raw `name` field.
    pub name: String,
    /// Raw `email` field.
    pub email: String,
    /// Raw `age` field.
    pub age: String,
}

/// Read every data row from a CSV file.
///
/// The header line is required and must contain all of
/// [`REQUIRED_COLUMNS`]; blank lines are skipped. A row shorter than the
/// header yields empty strings for the missing fields, which row validation
/// rejects downstream.
pub fn read_user_rows(path: &Path) -> Result<Vec<RawUserRow>> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines().enumerate();

    let header = loop {
        match lines.next() {
            Some((_, line)) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(StoreError::Csv("empty file, header expected".to_string())),
        }
    };

    let columns = split_fields(&header).map_err(StoreError::Csv)?;
    let mut indexes = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in indexes.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = columns
            .iter()
            .position(|c| c.trim() == name)
            .ok_or_else(|| StoreError::Csv(format!("header is missing column {name:?}")))?;
    }
    let [user_id_idx, name_idx, email_idx, age_idx] = indexes;

    let mut rows = Vec::new();
    for (n, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields =
            split_fields(&line).map_err(|e| StoreError::Csv(format!("line {}: {e}", n + 1)))?;
        let field = |idx: usize| fields.get(idx).cloned().unwrap_or_default();
        rows.push(RawUserRow {
            line: n + 1,
            user_id: field(user_id_idx),
            name: field(name_idx),
            email: field(email_idx),
            age: field(age_idx),
        });
    }
    Ok(rows)
}

/// Split one CSV line into fields.
///
/// Supports double-quoted fields with embedded commas and `""` escapes.
/// Returns an error message for an unterminated quote.
fn split_fields(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    let _ = chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(current);
    Ok(fields)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_simple_rows() {
        let file = write_csv(
            "user_id,name,email,age\n\
             00234e50-34eb-4ce2-94ec-26e3fa749796,Dan,dan@example.com,67\n\
             006bfede-724d-4cdd-a2a6-59700f40d0da,Glenda,glenda@example.com,119\n",
        );
        let rows = read_user_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Dan");
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].age, "119");
    }

    #[test]
    fn header_order_is_free() {
        let file = write_csv("age,email,name,user_id\n30,x@y.z,X,abc\n");
        let rows = read_user_rows(file.path()).unwrap();
        assert_eq!(rows[0].age, "30");
        assert_eq!(rows[0].user_id, "abc");
    }

    #[test]
    fn extra_columns_ignored() {
        let file = write_csv("user_id,name,email,age,notes\nid,N,e@x.y,20,ignored\n");
        let rows = read_user_rows(file.path()).unwrap();
        assert_eq!(rows[0].name, "N");
    }

    #[test]
    fn quoted_field_with_comma() {
        let file = write_csv("user_id,name,email,age\nid,\"Smith, Jane\",j@x.y,40\n");
        let rows = read_user_rows(file.path()).unwrap();
        assert_eq!(rows[0].name, "Smith, Jane");
    }

    #[test]
    fn doubled_quote_escape() {
        let file = write_csv("user_id,name,email,age\nid,\"Jane \"\"JJ\"\" Smith\",j@x.y,40\n");
        let rows = read_user_rows(file.path()).unwrap();
        assert_eq!(rows[0].name, "Jane \"JJ\" Smith");
    }

    #[test]
    fn blank_lines_skipped() {
        let file = write_csv("user_id,name,email,age\n\nid,N,e@x.y,20\n\n");
        let rows = read_user_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn short_row_yields_empty_fields() {
        let file = write_csv("user_id,name,email,age\nid,OnlyName\n");
        let rows = read_user_rows(file.path()).unwrap();
        assert_eq!(rows[0].email, "");
        assert_eq!(rows[0].age, "");
    }

    #[test]
    fn missing_header_column_is_error() {
        let file = write_csv("user_id,name,email\nid,N,e@x.y\n");
        let err = read_user_rows(file.path()).unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn empty_file_is_error() {
        let file = write_csv("");
        assert!(read_user_rows(file.path()).is_err());
    }

    #[test]
    fn unterminated_quote_is_error() {
        let file = write_csv("user_id,name,email,age\nid,\"broken,e@x.y,20\n");
        let err = read_user_rows(file.path()).unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }
}
