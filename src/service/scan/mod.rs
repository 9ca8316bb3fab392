//! Scam classification service
//!
//! Turns a scan request into a verdict without ever letting an upstream
//! failure past its boundary: transport failures and unparseable model output
//! both resolve to a fixed fallback verdict, tagged so callers and tests can
//! tell the paths apart. An inconclusive result is always safer to show the
//! user than an error screen.

use std::sync::Arc;

use crate::model::{ScanOutcome, ScanReport, ScanRequest, Verdict};
use crate::service::llm::ClassifierBackend;
use crate::service::scan::extraction::{decode_verdict, extract_json_candidate};
use crate::service::scan::prompts::build_classification_prompt;
use crate::service::scan::validation::harden_verdict;

pub mod error;
pub mod extraction;
pub mod prompts;
pub mod validation;

pub use error::ScanError;

/// Service for classifying scanned content via the generative model
pub struct ScanService {
    backend: Arc<dyn ClassifierBackend>,
}

impl ScanService {
    pub fn new(backend: Arc<dyn ClassifierBackend>) -> Self {
        Self { backend }
    }

    /// Classify content in the context of a scan-type label
    ///
    /// Issues exactly one upstream call, no retries. Empty content is the only
    /// precondition and is rejected before any network activity.
    pub async fn classify(&self, request: &ScanRequest) -> Result<ScanReport, ScanError> {
        if request.content.trim().is_empty() {
            return Err(ScanError::EmptyContent);
        }

        let start_time = std::time::Instant::now();
        let prompt = build_classification_prompt(&request.content, &request.scan_type);
        let prompt_length = prompt.len();

        tracing::debug!(
            scan_type = %request.scan_type,
            prompt_length = prompt_length,
            "Initiating classification call"
        );

        let raw_text = match self.backend.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(
                    scan_type = %request.scan_type,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    error = %e,
                    "Classification call failed"
                );
                return Ok(ScanReport {
                    verdict: Verdict::transport_fallback(),
                    outcome: ScanOutcome::TransportError,
                    error: Some(e.to_string()),
                });
            }
        };

        let decoded = raw_text
            .as_deref()
            .and_then(extract_json_candidate)
            .and_then(decode_verdict);

        let report = match decoded {
            Some(verdict) => {
                tracing::info!(
                    scan_type = %request.scan_type,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    "Classification completed"
                );
                ScanReport {
                    verdict: harden_verdict(verdict),
                    outcome: ScanOutcome::Ok,
                    error: None,
                }
            }
            None => {
                tracing::warn!(
                    scan_type = %request.scan_type,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    got_text = raw_text.is_some(),
                    "Model output carried no decodable verdict, using parse fallback"
                );
                ScanReport {
                    verdict: Verdict::parse_fallback(),
                    outcome: ScanOutcome::ParseFallback,
                    error: None,
                }
            }
        };

        Ok(report)
    }
}
