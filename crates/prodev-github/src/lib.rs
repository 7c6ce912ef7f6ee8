//! # prodev-github
//!
//! Read-only client for the GitHub REST API:
//!
//! - [`http::get_json`]: GET a URL and parse the JSON body
//! - [`GithubOrgClient`]: organization metadata and public repo listings,
//!   with per-instance memoization of API responses
//!
//! Failure handling is left to the caller; the client performs no retries.

#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod http;

pub use client::{DEFAULT_BASE_URL, GithubOrgClient};
pub use error::{GithubError, Result};
pub use http::get_json;
