//! Workflow preconditions must fail before any transport work happens.
//!
//! The endpoints below point at TCP port 9 on localhost, where nothing
//! listens: if a test's call ever reached the network it would come back
//! as `WorkflowError::Api(Network)`, so the expected local errors double
//! as proof that no call was made.

use std::sync::Arc;

use anyhow::Result;

use stocklink_client::{ApiClient, ReplenishmentWorkflow, ServiceEndpoints, WorkflowError};
use stocklink_core::{ApiError, ItemId, RequestId, WarehouseId};
use stocklink_replenishment::{
    Decision, DraftError, LifecycleError, Priority, ReplenishmentDraft, ReplenishmentRequest,
    RequestStatus,
};
use stocklink_session::SessionStore;

fn offline_client() -> Arc<ApiClient> {
    let endpoints = ServiceEndpoints::new(
        "http://127.0.0.1:9/api",
        "http://127.0.0.1:9/api",
        "http://127.0.0.1:9/api",
        "http://127.0.0.1:9/api",
    );
    Arc::new(ApiClient::new(endpoints, Arc::new(SessionStore::in_memory())))
}

fn approved_request() -> ReplenishmentRequest {
    ReplenishmentRequest {
        id: Some(RequestId::new(301)),
        item_id: ItemId::new(12),
        item_sku: "SKU-0012".into(),
        item_name: "Pallet wrap".into(),
        warehouse_id: WarehouseId::new(2),
        warehouse_code: "WH-EAST".into(),
        current_quantity: 4,
        requested_quantity: 36,
        reorder_level: 20,
        status: RequestStatus::Approved,
        priority: Priority::Critical,
        reason: None,
        notes: None,
        requested_by: "op@ims.example".into(),
        reviewed_by: Some("admin@ims.example".into()),
        requested_at: "2026-03-01T08:00:00Z".parse().unwrap(),
        reviewed_at: Some("2026-03-01T09:30:00Z".parse().unwrap()),
    }
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_wire() -> Result<()> {
    let workflow = ReplenishmentWorkflow::new(offline_client());
    let draft = ReplenishmentDraft::ad_hoc(ItemId::new(1), WarehouseId::new(1)).with_quantity(0);

    match workflow.submit(&draft).await {
        Err(WorkflowError::Draft(DraftError::QuantityTooSmall(0))) => Ok(()),
        other => anyhow::bail!("expected draft precondition failure, got {other:?}"),
    }
}

#[tokio::test]
async fn decided_row_is_refused_locally() -> Result<()> {
    let workflow = ReplenishmentWorkflow::new(offline_client());

    match workflow
        .decide(&approved_request(), Decision::Approve, None)
        .await
    {
        Err(WorkflowError::Lifecycle(LifecycleError::AlreadyDecided(RequestStatus::Approved))) => {
            Ok(())
        }
        other => anyhow::bail!("expected lifecycle refusal, got {other:?}"),
    }
}

#[tokio::test]
async fn unsubmitted_row_is_refused_locally() -> Result<()> {
    let workflow = ReplenishmentWorkflow::new(offline_client());
    let unsubmitted = ReplenishmentRequest {
        id: None,
        status: RequestStatus::Pending,
        reviewed_by: None,
        reviewed_at: None,
        ..approved_request()
    };

    match workflow.decide(&unsubmitted, Decision::Reject, None).await {
        Err(WorkflowError::Lifecycle(LifecycleError::NotSubmitted)) => Ok(()),
        other => anyhow::bail!("expected NotSubmitted, got {other:?}"),
    }
}

#[tokio::test]
async fn gate_resets_after_a_failed_call() -> Result<()> {
    let workflow = ReplenishmentWorkflow::new(offline_client());
    let draft = ReplenishmentDraft::ad_hoc(ItemId::new(1), WarehouseId::new(1));

    // A valid draft passes the precondition and hits the dead endpoint.
    match workflow.submit(&draft).await {
        Err(WorkflowError::Api(ApiError::Network(_))) => {}
        other => anyhow::bail!("expected a network failure, got {other:?}"),
    }

    // The permit was released on failure: the retry is not refused as
    // Busy, it runs and fails the same way.
    assert!(workflow.can_submit());
    match workflow.submit(&draft).await {
        Err(WorkflowError::Api(ApiError::Network(_))) => Ok(()),
        other => anyhow::bail!("expected a retried network failure, got {other:?}"),
    }
}
