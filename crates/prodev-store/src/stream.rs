//! Lazy reads over the seeded table.
//!
//! Pages are fetched only when the iterator reaches them, so arbitrarily
//! large tables can be walked row by row in constant memory. Ordering is by
//! `user_id` throughout.

use rusqlite::params;

use crate::database::Database;
use crate::error::Result;
use crate::record::UserRecord;
use crate::seed::map_user_row;

/// Rows fetched per page unless the caller says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Fetch one page of users, ordered by `user_id`.
pub fn fetch_page(db: &Database, page_size: usize, offset: usize) -> Result<Vec<UserRecord>> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT user_id, name, email, age FROM user_data
             ORDER BY user_id LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt
            .query_map(params![page_size, offset], map_user_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Lazy iterator over pages of users.
///
/// Each call to `next` issues one query; nothing is fetched ahead of time.
pub struct UserPages {
    db: Database,
    page_size: usize,
    offset: usize,
    done: bool,
}

impl Iterator for UserPages {
    type Item = Result<Vec<UserRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match fetch_page(&self.db, self.page_size, self.offset) {
            Ok(page) if page.is_empty() => {
                self.done = true;
                None
            }
            Ok(page) => {
                self.offset += page.len();
                if page.len() < self.page_size {
                    // Short page: the table is exhausted.
                    self.done = true;
                }
                Some(Ok(page))
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

/// Iterate pages of `page_size` users, fetched on demand.
#[must_use]
pub fn paginate(db: &Database, page_size: usize) -> UserPages {
    UserPages {
        db: db.clone(),
        page_size: page_size.max(1),
        offset: 0,
        done: false,
    }
}

/// Row-at-a-time iterator built on lazy pages.
pub struct UserStream {
    pages: UserPages,
    current: std::vec::IntoIter<UserRecord>,
}

impl Iterator for UserStream {
    type Item = Result<UserRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.current.next() {
                return Some(Ok(record));
            }
            match self.pages.next()? {
                Ok(page) => self.current = page.into_iter(),
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

/// Stream every user, one row at a time, in `user_id` order.
#[must_use]
pub fn stream_users(db: &Database) -> UserStream {
    stream_users_paged(db, DEFAULT_PAGE_SIZE)
}

/// Stream every user with an explicit page size.
#[must_use]
pub fn stream_users_paged(db: &Database, page_size: usize) -> UserStream {
    UserStream {
        pages: paginate(db, page_size),
        current: Vec::new().into_iter(),
    }
}

/// Stream users strictly older than `min_age`.
pub fn users_older_than(
    db: &Database,
    min_age: i64,
) -> impl Iterator<Item = Result<UserRecord>> + use<> {
    stream_users(db).filter(move |item| item.as_ref().map_or(true, |user| user.age > min_age))
}

/// Streaming mean age, without loading the whole table.
///
/// Returns `None` for an empty table.
pub fn average_age(db: &Database) -> Result<Option<f64>> {
    let mut sum: i64 = 0;
    let mut count: u64 = 0;
    for user in stream_users(db) {
        sum += user?.age;
        count += 1;
    }
    if count == 0 {
        return Ok(None);
    }
    Ok(Some(sum as f64 / count as f64))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::insert_user;
    use uuid::Uuid;

    /// Seed `n` users with deterministic IDs and ages `20 + i`.
    fn seeded_db(n: usize) -> Database {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| {
            for i in 0..n {
                let record = UserRecord {
                    user_id: Uuid::from_u128(i as u128 + 1),
                    name: format!("User {i}"),
                    email: format!("user{i}@example.com"),
                    age: 20 + i as i64,
                };
                assert!(insert_user(conn, &record).unwrap());
            }
            Ok(())
        })
        .unwrap();
        db
    }

    #[test]
    fn fetch_page_limits_and_offsets() {
        let db = seeded_db(5);
        let page = fetch_page(&db, 2, 0).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "User 0");

        let page = fetch_page(&db, 2, 4).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "User 4");
    }

    #[test]
    fn paginate_visits_every_row_once() {
        let db = seeded_db(7);
        let pages: Vec<_> = paginate(&db, 3).map(Result::unwrap).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 3);
        assert_eq!(pages[2].len(), 1);

        let total: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn paginate_exact_multiple_of_page_size() {
        let db = seeded_db(6);
        let pages: Vec<_> = paginate(&db, 3).map(Result::unwrap).collect();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn paginate_empty_table() {
        let db = Database::in_memory().unwrap();
        assert_eq!(paginate(&db, 10).count(), 0);
    }

    #[test]
    fn stream_yields_rows_in_id_order() {
        let db = seeded_db(10);
        let users: Vec<_> = stream_users_paged(&db, 4).map(Result::unwrap).collect();
        assert_eq!(users.len(), 10);

        let mut ids: Vec<_> = users.iter().map(|u| u.user_id).collect();
        let sorted = {
            let mut s = ids.clone();
            s.sort();
            s
        };
        assert_eq!(ids, sorted);
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn stream_matches_seeded_count() {
        let db = seeded_db(25);
        assert_eq!(stream_users(&db).count(), 25);
    }

    #[test]
    fn older_than_filters_strictly() {
        // Ages are 20..=29.
        let db = seeded_db(10);
        let older: Vec<_> = users_older_than(&db, 25).map(Result::unwrap).collect();
        assert_eq!(older.len(), 4);
        assert!(older.iter().all(|u| u.age > 25));
    }

    #[test]
    fn average_age_of_known_ages() {
        // Ages 20, 21, 22 → mean 21.
        let db = seeded_db(3);
        let avg = average_age(&db).unwrap().unwrap();
        assert!((avg - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_age_empty_table_is_none() {
        let db = Database::in_memory().unwrap();
        assert_eq!(average_age(&db).unwrap(), None);
    }
}
