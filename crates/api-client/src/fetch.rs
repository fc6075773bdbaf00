//! Paginated record acquisition.
//!
//! [`ApiClient`] owns the per-page retry loop: a page request is retried
//! indefinitely until a well-formed response arrives, waiting out either the
//! server-directed `retry_after` or the linear backoff between attempts.
//! There is deliberately no retry ceiling and no terminal failure state —
//! this is a bounded batch job, and a caller that needs a hard bound wraps
//! the whole fetch in its own timeout.
//!
//! [`fetch_all_records`] drives pagination over any [`PageSource`],
//! strictly sequentially: page N+1 is not requested until page N's retry
//! loop resolves.

use crate::backoff::{retry_after, Backoff};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::schema::{PageEnvelope, PageInfo};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{info, warn};
use triage_core::PatientRecord;

/// The resolved outcome of one page: its records, and pagination metadata
/// when the server supplied any (a skipped oversized page has none).
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub records: Vec<PatientRecord>,
    pub pagination: Option<PageInfo>,
}

/// A source of record pages. The seam between the pagination driver and the
/// HTTP client, so the driver can be exercised against a scripted source.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetch one page, resolving only once a usable outcome exists.
    async fn fetch_page(&self, page: u32) -> FetchedPage;
}

/// Fetches every page of records, in request order.
///
/// The first page's `totalPages` is authoritative for the whole run: the
/// driver keeps requesting `page + 1` while `page < totalPages`. A skipped
/// page contributes no records and does not end pagination. Order across and
/// within pages is preserved; no deduplication is performed.
pub async fn fetch_all_records<S: PageSource>(source: &S) -> Vec<PatientRecord> {
    let mut page = 1;
    let first = source.fetch_page(page).await;
    let total_pages = first.pagination.as_ref().map_or(0, |info| info.total_pages);

    let mut records = first.records;
    info!(page, total_pages, fetched = records.len(), "fetched page");

    while page < total_pages {
        page += 1;
        let fetched = source.fetch_page(page).await;
        records.extend(fetched.records);
        info!(page, total_pages, fetched = records.len(), "fetched page");
    }

    records
}

/// One attempt at a page, before the retry policy is applied.
enum PageAttempt {
    Complete(PageEnvelope),
    /// Payload-too-large: the page is skippable, not retryable.
    Oversized,
    /// The server asked for a specific delay before the next attempt.
    Throttled(std::time::Duration),
}

/// HTTP client for the patient-vitals source.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn attempt_page(&self, page: u32) -> ApiResult<PageAttempt> {
        let response = self
            .http
            .get(self.config.patients_url())
            .query(&[("page", page), ("limit", self.config.page_size())])
            .header("x-api-key", self.config.api_key())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            return Ok(PageAttempt::Oversized);
        }
        if !status.is_success() {
            if let Ok(body) = response.json::<Value>().await {
                if let Some(delay) = retry_after(&body) {
                    return Ok(PageAttempt::Throttled(delay));
                }
            }
            return Err(ApiError::Status(status));
        }

        let body: Value = response.json().await?;
        let envelope: PageEnvelope = serde_json::from_value(body).map_err(ApiError::Schema)?;
        Ok(PageAttempt::Complete(envelope))
    }
}

impl PageSource for ApiClient {
    /// Fetch one page with indefinite retry.
    ///
    /// Transient failures (transport errors, non-2xx statuses, schema
    /// mismatches) never surface to the caller; they delay the next attempt
    /// and nothing else. Only a well-formed page or an oversized skip
    /// resolves the future.
    async fn fetch_page(&self, page: u32) -> FetchedPage {
        let mut backoff = Backoff::new(
            self.config.initial_backoff(),
            self.config.backoff_increment(),
        );

        loop {
            match self.attempt_page(page).await {
                Ok(PageAttempt::Complete(envelope)) => {
                    let pagination = envelope.pagination.clone();
                    return FetchedPage {
                        records: envelope.into_records(),
                        pagination: Some(pagination),
                    };
                }
                Ok(PageAttempt::Oversized) => {
                    warn!(page, "payload too large, skipping page");
                    return FetchedPage {
                        records: Vec::new(),
                        pagination: None,
                    };
                }
                Ok(PageAttempt::Throttled(delay)) => {
                    warn!(page, delay_ms = delay.as_millis() as u64, "server requested backoff");
                    sleep(delay).await;
                    backoff.advance();
                }
                Err(err) => {
                    let delay = backoff.current();
                    warn!(page, %err, delay_ms = delay.as_millis() as u64, "page fetch failed, retrying");
                    sleep(delay).await;
                    backoff.advance();
                }
            }
        }
    }
}
