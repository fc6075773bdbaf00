//! Cohort report submission.
//!
//! Fire-and-forget: the pipeline's primary output is the classified record
//! set, and it is complete before submission starts. Failures here are
//! logged and nothing more.

use crate::error::ApiError;
use crate::fetch::ApiClient;
use tracing::{error, info, warn};
use triage_core::CohortReport;

impl ApiClient {
    /// Submit the cohort report once. The response is not validated.
    pub async fn submit_cohorts(&self, report: &CohortReport) {
        let body = match serde_json::to_vec(report).map_err(ApiError::Submission) {
            Ok(body) => body,
            Err(err) => {
                error!(%err, "skipping submission");
                return;
            }
        };

        let result = self
            .http()
            .post(self.config().submission_url())
            .header("x-api-key", self.config().api_key())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await;

        match result {
            Ok(response) => info!(status = %response.status(), "submitted cohort report"),
            Err(err) => warn!(%err, "cohort submission failed"),
        }
    }
}
