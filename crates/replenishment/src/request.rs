//! Replenishment request model and lifecycle.
//!
//! A request starts life client-side as a [`ReplenishmentDraft`] (no id),
//! becomes a server-owned [`ReplenishmentRequest`] on submission, and is
//! only ever changed again by an admin decision applied by the inventory
//! service. The client never mutates a submitted request; it re-fetches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stocklink_core::{ItemId, RequestId, WarehouseId};

use crate::{MIN_SUGGESTED_QUANTITY, Priority, StockLevel};

/// Lifecycle state of a replenishment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    /// Initial state, set by the creating service.
    Pending,
    /// Terminal: an admin accepted the request.
    Approved,
    /// Terminal: an admin declined the request.
    Rejected,
}

impl RequestStatus {
    /// Only pending requests accept a decision; the terminal states never
    /// transition again.
    pub fn is_decidable(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_decidable()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
        }
    }
}

impl core::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// State the request ends up in once the service accepts the verdict.
    pub fn target_status(&self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Reject => RequestStatus::Rejected,
        }
    }
}

/// Draft precondition failures. Raised before any network call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("requested quantity must be at least 1 (got {0})")]
    QuantityTooSmall(i64),
}

/// Decision attempted against a row that cannot take one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// The request is still a local draft with no server identity.
    #[error("request has not been submitted")]
    NotSubmitted,

    /// The displayed row already carries a terminal status.
    #[error("request is already {0}")]
    AlreadyDecided(RequestStatus),
}

/// A server-owned replenishment request.
///
/// Item and warehouse display fields are denormalized by the service; the
/// client never computes them. `priority` is whatever was chosen at
/// creation time and is never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentRequest {
    /// Absent until the service assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    pub item_id: ItemId,
    pub item_sku: String,
    pub item_name: String,
    pub warehouse_id: WarehouseId,
    pub warehouse_code: String,
    /// Stock on hand when the request was submitted.
    pub current_quantity: i64,
    pub requested_quantity: i64,
    /// Threshold copied from the stock record at submission time.
    pub reorder_level: i64,
    pub status: RequestStatus,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub requested_by: String,
    /// Absent while the request is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    pub requested_at: DateTime<Utc>,
    /// Absent while the request is pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl ReplenishmentRequest {
    /// Whether the approve/reject actions should be offered for this row.
    pub fn is_decidable(&self) -> bool {
        self.id.is_some() && self.status.is_decidable()
    }

    /// Identity to decide on, or why the row cannot take a decision.
    pub fn decidable_id(&self) -> Result<RequestId, LifecycleError> {
        let id = self.id.ok_or(LifecycleError::NotSubmitted)?;
        if self.status.is_terminal() {
            return Err(LifecycleError::AlreadyDecided(self.status));
        }
        Ok(id)
    }
}

/// Client-side draft of a new request; the creation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishmentDraft {
    pub item_id: ItemId,
    pub warehouse_id: WarehouseId,
    pub requested_quantity: i64,
    /// Pre-filled suggestion; omitted from the body when the caller clears
    /// it and lets the service default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReplenishmentDraft {
    /// Draft pre-filled from a viewed stock row: quantity restores double
    /// the reorder level, priority follows the ratio buckets.
    pub fn from_stock(stock: &StockLevel) -> Self {
        Self {
            item_id: stock.item_id,
            warehouse_id: stock.warehouse_id,
            requested_quantity: stock.suggested_quantity(),
            priority: Some(stock.suggested_priority()),
            notes: None,
        }
    }

    /// Draft for a request not tied to a viewed stock row: minimum
    /// quantity, medium priority.
    pub fn ad_hoc(item_id: ItemId, warehouse_id: WarehouseId) -> Self {
        Self {
            item_id,
            warehouse_id,
            requested_quantity: MIN_SUGGESTED_QUANTITY,
            priority: Some(Priority::default()),
            notes: None,
        }
    }

    /// Override the pre-filled quantity.
    pub fn with_quantity(mut self, requested_quantity: i64) -> Self {
        self.requested_quantity = requested_quantity;
        self
    }

    /// Override the pre-filled priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Submission precondition. A failing draft must never reach the wire.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.requested_quantity < 1 {
            return Err(DraftError::QuantityTooSmall(self.requested_quantity));
        }
        Ok(())
    }
}

/// Body for the approve and reject endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApprovalPayload {
    pub fn new(notes: Option<&str>) -> Self {
        Self {
            notes: notes.map(str::to_owned),
        }
    }
}
