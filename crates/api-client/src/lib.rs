//! # Triage API client
//!
//! Remote-source plumbing for the triage pipeline: the paginated patient
//! fetch with per-page indefinite retry, rate-limit cooperation and
//! oversized-page skipping, plus the fire-and-forget cohort submission.
//!
//! Domain logic lives in `triage-core`; this crate only moves records and
//! reports across the wire.

pub mod backoff;
pub mod config;
pub mod error;
pub mod fetch;
pub mod schema;
mod submit;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use fetch::{fetch_all_records, ApiClient, FetchedPage, PageSource};
pub use schema::{PageEnvelope, PageInfo};
