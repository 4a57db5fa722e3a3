//! The replenishment submit/decide workflow.
//!
//! Ties the pure pieces together at the transport boundary: draft
//! preconditions are checked before any network work, each action holds
//! its gate's single permit for the duration of its call, and a decision
//! is only dispatched for rows whose displayed status is PENDING. Nothing
//! is committed locally on failure: the permit drops, the caller sees a
//! categorized error, and a refresh converges on the service's state.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use stocklink_core::ApiError;
use stocklink_replenishment::{
    Decision, DraftError, LifecycleError, ReplenishmentDraft, ReplenishmentRequest,
};

use crate::{ActionGate, ApiClient};

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// An earlier submit/decide on this workflow is still in flight; the
    /// triggering control should have been disabled.
    #[error("another action is still in flight")]
    Busy,

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Submission and decision entry points with single-flight gating.
///
/// One workflow instance backs one interaction surface (a dialog, a row's
/// action buttons); the two gates are independent because a user may
/// legitimately submit a new request while an admin decision is pending
/// elsewhere.
pub struct ReplenishmentWorkflow {
    client: Arc<ApiClient>,
    submit_gate: ActionGate,
    decide_gate: ActionGate,
}

impl ReplenishmentWorkflow {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            submit_gate: ActionGate::new(),
            decide_gate: ActionGate::new(),
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submit_gate.is_busy()
    }

    /// Whether the approve/reject controls should be enabled.
    pub fn can_decide(&self) -> bool {
        !self.decide_gate.is_busy()
    }

    /// Submit a draft as a new PENDING request.
    ///
    /// An invalid draft fails here, before the gate and before the wire.
    pub async fn submit(
        &self,
        draft: &ReplenishmentDraft,
    ) -> Result<ReplenishmentRequest, WorkflowError> {
        draft.validate()?;
        let _permit = self.submit_gate.try_acquire().ok_or(WorkflowError::Busy)?;
        let created = self.client.create_replenishment(draft).await?;
        info!(
            request_id = ?created.id,
            priority = %created.priority,
            "replenishment request submitted"
        );
        Ok(created)
    }

    /// Apply an admin decision to a pending request.
    ///
    /// Rows already decided (or never submitted) are refused locally; a
    /// concurrent decision by another admin surfaces as the service's
    /// error and the caller refreshes the list.
    pub async fn decide(
        &self,
        request: &ReplenishmentRequest,
        decision: Decision,
        notes: Option<&str>,
    ) -> Result<ReplenishmentRequest, WorkflowError> {
        let id = request.decidable_id()?;
        let _permit = self.decide_gate.try_acquire().ok_or(WorkflowError::Busy)?;
        let updated = match decision {
            Decision::Approve => self.client.approve_replenishment(id, notes).await?,
            Decision::Reject => self.client.reject_replenishment(id, notes).await?,
        };
        info!(request_id = %id, status = %updated.status, "replenishment request decided");
        Ok(updated)
    }
}
