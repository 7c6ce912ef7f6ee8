//! Per-instance memoization of a zero-argument computation.
//!
//! [`Memoized`] computes a value on first access and hands out clones of the
//! cached result afterwards. The mutex is held across the initializer, so
//! the computation runs exactly once per instance even when several threads
//! race on the first access.

use std::sync::Mutex;

/// A lazily computed, per-instance cached value.
#[derive(Debug, Default)]
pub struct Memoized<T> {
    cell: Mutex<Option<T>>,
}

impl<T: Clone> Memoized<T> {
    /// Create an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: Mutex::new(None),
        }
    }

    /// Return the cached value, computing it with `init` on first access.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> T {
        let mut guard = self.cell.lock().expect("memo lock poisoned");
        if let Some(value) = guard.as_ref() {
            return value.clone();
        }
        let value = init();
        *guard = Some(value.clone());
        value
    }

    /// Fallible variant of [`Memoized::get_or_init`].
    ///
    /// On `Err` the cell stays empty, so a later call retries the
    /// computation.
    pub fn get_or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let mut guard = self.cell.lock().expect("memo lock poisoned");
        if let Some(value) = guard.as_ref() {
            return Ok(value.clone());
        }
        let value = init()?;
        *guard = Some(value.clone());
        Ok(value)
    }

    /// Return the cached value without computing, if present.
    pub fn get(&self) -> Option<T> {
        self.cell.lock().expect("memo lock poisoned").clone()
    }

    /// Whether the value has been computed.
    pub fn is_initialized(&self) -> bool {
        self.cell.lock().expect("memo lock poisoned").is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn computes_on_first_access() {
        let memo = Memoized::new();
        assert!(!memo.is_initialized());
        assert_eq!(memo.get_or_init(|| 42), 42);
        assert!(memo.is_initialized());
    }

    #[test]
    fn computation_runs_exactly_once() {
        let calls = AtomicU32::new(0);
        let memo = Memoized::new();

        for _ in 0..5 {
            let value = memo.get_or_init(|| {
                let _ = calls.fetch_add(1, Ordering::SeqCst);
                "computed".to_string()
            });
            assert_eq!(value, "computed");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exactly_once_across_threads() {
        let calls = AtomicU32::new(0);
        let memo = Memoized::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let _ = scope.spawn(|| {
                    let value = memo.get_or_init(|| {
                        let _ = calls.fetch_add(1, Ordering::SeqCst);
                        7_u64
                    });
                    assert_eq!(value, 7);
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn try_init_success_caches() {
        let calls = AtomicU32::new(0);
        let memo = Memoized::new();

        let first: Result<i32, String> = memo.get_or_try_init(|| {
            let _ = calls.fetch_add(1, Ordering::SeqCst);
            Ok(10)
        });
        assert_eq!(first.unwrap(), 10);

        let second: Result<i32, String> = memo.get_or_try_init(|| Err("not called".to_string()));
        assert_eq!(second.unwrap(), 10);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn try_init_failure_leaves_cell_empty() {
        let memo: Memoized<i32> = Memoized::new();

        let first: Result<i32, String> = memo.get_or_try_init(|| Err("boom".to_string()));
        assert_eq!(first.unwrap_err(), "boom");
        assert!(!memo.is_initialized());

        // A later attempt may succeed.
        let second: Result<i32, String> = memo.get_or_try_init(|| Ok(3));
        assert_eq!(second.unwrap(), 3);
    }

    #[test]
    fn get_before_init_is_none() {
        let memo: Memoized<i32> = Memoized::new();
        assert_eq!(memo.get(), None);
        let _ = memo.get_or_init(|| 1);
        assert_eq!(memo.get(), Some(1));
    }
}
