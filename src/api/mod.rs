//! HTTP client for the daily quote service
//!
//! Every endpoint answers with a JSON envelope `{success, data, message}`.
//! The client unwraps the envelope and reports failures as [`ApiError`],
//! whose `Display` output is the message shown to the user.

pub mod base_url;
pub mod client;
pub mod error;
pub mod types;

pub use base_url::{resolve_base_url, LOCAL_DEV_API};
pub use client::{QuoteClient, DEFAULT_HISTORY_LIMIT, MAX_RECENT_LIMIT};
pub use error::{ApiError, ApiResult};
pub use types::{ApiEnvelope, HealthStatus, Quote};
