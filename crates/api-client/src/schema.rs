//! Wire shapes for the paginated patient endpoint.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use triage_core::PatientRecord;

/// A well-formed page response: records plus pagination metadata.
///
/// Record elements are kept as raw JSON here because individual records may
/// be arbitrarily malformed without invalidating the page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    pub data: Vec<Value>,
    pub pagination: PageInfo,
}

/// Pagination metadata, camelCase on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageEnvelope {
    /// Decode the raw record elements, keeping page order.
    ///
    /// An element that does not decode is logged and replaced by an empty
    /// record; having no identifier, it is dropped later in the pipeline.
    pub fn into_records(self) -> Vec<PatientRecord> {
        let page = self.pagination.page;
        self.data
            .into_iter()
            .map(|element| match serde_json::from_value(element) {
                Ok(record) => record,
                Err(err) => {
                    warn!(page, %err, "dropping undecodable record element");
                    PatientRecord::default()
                }
            })
            .collect()
    }
}
