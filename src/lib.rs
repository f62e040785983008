//! # Equifax Client Library
//!
//! Async client for the Equifax Scores & Attributes API. Acquires and
//! caches an OAuth2 client-credentials bearer token, attaches it to every
//! call, recovers once per attempt from the service's invalid-token signal,
//! and normalizes responses into camel-cased JSON.
//!
//! Modules:
//! - `config`: client options, YAML loading and validation
//! - `cache`: per-client bearer token cache
//! - `client`: the `Equifax` handle and its request dispatcher
//! - `scores`: credit report requests and report accessors
//! - `models`: credit report and report request shapes
//! - `error`: `ApiError`, the error value surfaced to callers

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod observability;
pub mod scores;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::cache::token::{AccessToken, AuthResult};
pub use crate::client::request::{MultipartPart, RequestBody};
pub use crate::client::response::{DispatchResult, ResponseMeta};
pub use crate::client::Equifax;
pub use crate::config::settings::ClientConfig;
pub use crate::error::ApiError;
pub use crate::models::credit_report::CreditReport;
pub use crate::scores::{ReportOptions, ReportSubject};
