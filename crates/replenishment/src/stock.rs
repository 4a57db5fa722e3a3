//! Stock position read model, the workflow's input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklink_core::{ItemId, WarehouseId};

use crate::{Priority, suggest_priority, suggest_quantity};

/// Quantity of one item held at one warehouse, as reported by the
/// inventory service. Read-only to this workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub id: i64,
    pub item_id: ItemId,
    pub item_sku: String,
    pub item_name: String,
    pub warehouse_id: WarehouseId,
    pub warehouse_code: String,
    pub warehouse_name: String,
    pub quantity: i64,
    pub reserved_quantity: i64,
    pub available_quantity: i64,
    pub reorder_level: i64,
    pub last_updated: DateTime<Utc>,
}

impl StockLevel {
    /// Low-stock test used by the dashboard and the low-stock listing.
    pub fn is_low(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Priority hint for a replenishment request raised from this row.
    pub fn suggested_priority(&self) -> Priority {
        suggest_priority(self.quantity, self.reorder_level)
    }

    /// Quantity hint for a replenishment request raised from this row.
    pub fn suggested_quantity(&self) -> i64 {
        suggest_quantity(self.quantity, self.reorder_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReplenishmentDraft;

    fn stock(quantity: i64, reorder_level: i64) -> StockLevel {
        StockLevel {
            id: 1,
            item_id: ItemId::new(12),
            item_sku: "SKU-0012".into(),
            item_name: "Pallet wrap".into(),
            warehouse_id: WarehouseId::new(2),
            warehouse_code: "WH-EAST".into(),
            warehouse_name: "East DC".into(),
            quantity,
            reserved_quantity: 0,
            available_quantity: quantity,
            reorder_level,
            last_updated: "2026-03-02T09:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn suggestions_follow_the_stock_position() {
        let low = stock(5, 20);
        assert!(low.is_low());
        assert_eq!(low.suggested_priority(), Priority::Critical);
        assert_eq!(low.suggested_quantity(), 35);

        let healthy = stock(45, 20);
        assert!(!healthy.is_low());
        assert_eq!(healthy.suggested_priority(), Priority::Low);
        assert_eq!(healthy.suggested_quantity(), 10);
    }

    #[test]
    fn draft_prefill_copies_identity_and_suggestions() {
        let row = stock(5, 20);
        let draft = ReplenishmentDraft::from_stock(&row);
        assert_eq!(draft.item_id, row.item_id);
        assert_eq!(draft.warehouse_id, row.warehouse_id);
        assert_eq!(draft.requested_quantity, 35);
        assert_eq!(draft.priority, Some(Priority::Critical));
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn parses_service_row() {
        let json = r#"{
            "id": 4,
            "itemId": 9,
            "itemSku": "SKU-0009",
            "itemName": "Box cutter",
            "warehouseId": 1,
            "warehouseCode": "WH-CENTRAL",
            "warehouseName": "Central DC",
            "quantity": 16,
            "reservedQuantity": 2,
            "availableQuantity": 14,
            "reorderLevel": 20,
            "lastUpdated": "2026-03-02T07:45:00Z"
        }"#;
        let row: StockLevel = serde_json::from_str(json).unwrap();
        assert!(row.is_low());
        assert_eq!(row.suggested_priority(), Priority::Low);
        assert_eq!(row.available_quantity, 14);
    }
}
