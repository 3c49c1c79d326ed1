//! Trait abstraction for the submission boundary to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

use crate::state::AssessmentPayload;

/// Where validated assessments go.
///
/// Implementations report success or failure only; the caller owns all
/// feedback and retry behavior. The payload handed in is always fully
/// validated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one assessment downstream
    async fn submit(&mut self, payload: AssessmentPayload) -> Result<()>;
}
