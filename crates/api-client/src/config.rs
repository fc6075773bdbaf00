//! Remote-source configuration.
//!
//! Resolved once at process startup and passed into the client, mirroring
//! the rest of the pipeline: no environment reads or hidden mutable state
//! once the run is underway.

use crate::error::{ApiError, ApiResult};
use std::time::Duration;

const DEFAULT_PAGE_SIZE: u32 = 20;
const INITIAL_BACKOFF: Duration = Duration::from_millis(200);
const BACKOFF_INCREMENT: Duration = Duration::from_millis(100);

/// Connection and retry settings for the patient-vitals source.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
    page_size: u32,
    initial_backoff: Duration,
    backoff_increment: Duration,
}

impl ApiConfig {
    /// Create a new `ApiConfig` with the default page size and backoff.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if the base URL or credential is
    /// empty or whitespace-only.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> ApiResult<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.trim().is_empty() {
            return Err(ApiError::InvalidConfig("base_url cannot be empty".into()));
        }
        if api_key.trim().is_empty() {
            return Err(ApiError::InvalidConfig("api_key cannot be empty".into()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            page_size: DEFAULT_PAGE_SIZE,
            initial_backoff: INITIAL_BACKOFF,
            backoff_increment: BACKOFF_INCREMENT,
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn initial_backoff(&self) -> Duration {
        self.initial_backoff
    }

    pub fn backoff_increment(&self) -> Duration {
        self.backoff_increment
    }

    pub fn patients_url(&self) -> String {
        format!("{}/patients", self.base_url)
    }

    pub fn submission_url(&self) -> String {
        format!("{}/submit-assessment", self.base_url)
    }
}
