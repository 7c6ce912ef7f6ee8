//! # prodev-core
//!
//! Foundation utilities shared by the prodev crates:
//!
//! - **Nested lookup**: [`nested::lookup`] descends a JSON tree along an
//!   ordered key path, failing with the name of the first missing key
//! - **Memoization**: [`memo::Memoized`] caches a zero-argument computation
//!   per instance, running it exactly once
//! - **Retry**: [`retry::RetryConfig`] and backoff calculation, plus a
//!   synchronous retry executor
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `prodev-github` and `prodev-store`.

#![deny(unsafe_code)]

pub mod memo;
pub mod nested;
pub mod retry;
