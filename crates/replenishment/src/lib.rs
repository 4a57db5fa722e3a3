//! `stocklink-replenishment` — the replenishment request workflow.
//!
//! The one designed core of the client: priority derivation from a stock
//! position, suggested-quantity derivation, and the request lifecycle
//! (PENDING → APPROVED | REJECTED, each transition exactly once, applied
//! by the inventory service). Everything here is pure; transport lives in
//! `stocklink-client`.

pub mod priority;
pub mod request;
pub mod stock;

pub use priority::{MIN_SUGGESTED_QUANTITY, Priority, suggest_priority, suggest_quantity};
pub use request::{
    ApprovalPayload, Decision, DraftError, LifecycleError, ReplenishmentDraft,
    ReplenishmentRequest, RequestStatus,
};
pub use stock::StockLevel;
