//! Submission sink that journals accepted assessments to the log
//!
//! Stands in for a real intake backend: the payload is serialized once and
//! emitted through `tracing`, so operators can collect submissions from the
//! log stream without any network dependency.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use super::traits::SubmissionSink;
use crate::state::AssessmentPayload;

/// Sink that records each accepted payload as one structured log line
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&mut self, payload: AssessmentPayload) -> Result<()> {
        let json = serde_json::to_string(&payload)?;
        info!(
            target: "readiness_tui::submission",
            received_at = %Utc::now().to_rfc3339(),
            payload = %json,
            "assessment accepted"
        );
        Ok(())
    }
}
