// crates/social-api-client/src/transcript.rs
// ============================================================================
// Module: Request Transcript
// Description: Ordered log of requests and responses issued by a client.
// Purpose: Capture evidence for test artifacts without affecting behavior.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every call through [`crate::HttpClient`] is appended here, including
//! transport failures. Test reporters slice it per test.

use std::sync::Arc;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::response::RawResponse;

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    /// 1-based call order.
    pub sequence: u64,
    /// Request method.
    pub method: String,
    /// Request path relative to the base URL.
    pub path: String,
    /// Request body, when one was sent.
    pub request: Option<Value>,
    /// Response status, absent on transport failure.
    pub status: Option<u16>,
    /// Response body as JSON, or as a string when it is not JSON.
    pub response: Value,
    /// Transport or decoding error, if any.
    pub error: Option<String>,
}

/// Shared, append-only transcript.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Recorded entries.
    entries: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Records the outcome of one call.
    pub fn record(
        &self,
        method: &str,
        path: &str,
        request: Option<&Value>,
        outcome: &Result<RawResponse, ClientError>,
    ) {
        let Ok(mut guard) = self.entries.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        let (status, response, error) = match outcome {
            Ok(response) => {
                let body = serde_json::from_str(response.text())
                    .unwrap_or_else(|_| Value::String(response.text().to_string()));
                (Some(response.status().as_u16()), body, None)
            }
            Err(err) => (None, Value::Null, Some(err.to_string())),
        };
        guard.push(TranscriptEntry {
            sequence,
            method: method.to_string(),
            path: path.to_string(),
            request: request.cloned(),
            status,
            response,
            error,
        });
    }
}
