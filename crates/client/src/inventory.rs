//! Inventory service surface: warehouses, stock levels, movements,
//! dashboard, and the replenishment endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocklink_core::{ApiError, ApiResult, ItemId, Page, PageQuery, RequestId, WarehouseId};
use stocklink_replenishment::{
    ApprovalPayload, ReplenishmentDraft, ReplenishmentRequest, RequestStatus, StockLevel,
};

use crate::ApiClient;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: WarehouseId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseRequest {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Kind of stock movement the services record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    /// Inbound delivery.
    GoodsReceipt,
    /// Outbound issue.
    StockIssue,
    TransferIn,
    TransferOut,
    Adjustment,
    Return,
    Damage,
    WriteOff,
}

/// A recorded stock movement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: i64,
    pub item_id: ItemId,
    pub item_sku: String,
    pub item_name: String,
    pub warehouse_id: WarehouseId,
    pub warehouse_code: String,
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub total_value: Option<Decimal>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovementRequest {
    pub item_id: ItemId,
    pub warehouse_id: WarehouseId,
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregated counts and highlights for the landing screens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_items: i64,
    pub total_warehouses: i64,
    pub low_stock_count: i64,
    pub pending_replenishments: i64,
    pub recent_movements: Vec<StockMovement>,
    pub low_stock_items: Vec<StockLevel>,
}

impl ApiClient {
    pub async fn dashboard(&self) -> ApiResult<DashboardResponse> {
        let url = format!("{}/stock/dashboard", self.endpoints().inventory);
        self.get_json(url, &[]).await
    }

    /// Warehouses are few; the service returns them unpaged.
    pub async fn list_warehouses(&self) -> ApiResult<Vec<Warehouse>> {
        let url = format!("{}/warehouses", self.endpoints().inventory);
        self.get_json(url, &[]).await
    }

    pub async fn get_warehouse(&self, id: WarehouseId) -> ApiResult<Warehouse> {
        let url = format!("{}/warehouses/{id}", self.endpoints().inventory);
        self.get_json(url, &[]).await
    }

    pub async fn create_warehouse(&self, request: &CreateWarehouseRequest) -> ApiResult<Warehouse> {
        let url = format!("{}/warehouses", self.endpoints().inventory);
        self.post_json(url, request).await
    }

    pub async fn update_warehouse(
        &self,
        id: WarehouseId,
        request: &CreateWarehouseRequest,
    ) -> ApiResult<Warehouse> {
        let url = format!("{}/warehouses/{id}", self.endpoints().inventory);
        self.put_json(url, request).await
    }

    pub async fn list_stock_levels(&self, page: PageQuery) -> ApiResult<Page<StockLevel>> {
        let url = format!("{}/stock", self.endpoints().inventory);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_stock_by_warehouse(
        &self,
        warehouse_id: WarehouseId,
        page: PageQuery,
    ) -> ApiResult<Page<StockLevel>> {
        let url = format!("{}/stock/warehouse/{warehouse_id}", self.endpoints().inventory);
        self.get_json(url, &page.params()).await
    }

    /// Positions of one item across all warehouses.
    pub async fn stock_for_item(&self, item_id: ItemId) -> ApiResult<Vec<StockLevel>> {
        let url = format!("{}/stock/item/{item_id}", self.endpoints().inventory);
        self.get_json(url, &[]).await
    }

    pub async fn list_low_stock(&self, page: PageQuery) -> ApiResult<Page<StockLevel>> {
        let url = format!("{}/stock/low", self.endpoints().inventory);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_movements(&self, page: PageQuery) -> ApiResult<Page<StockMovement>> {
        let url = format!("{}/stock/movements", self.endpoints().inventory);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_movements_by_warehouse(
        &self,
        warehouse_id: WarehouseId,
        page: PageQuery,
    ) -> ApiResult<Page<StockMovement>> {
        let url = format!(
            "{}/stock/movements/warehouse/{warehouse_id}",
            self.endpoints().inventory
        );
        self.get_json(url, &page.params()).await
    }

    pub async fn list_movements_by_item(
        &self,
        item_id: ItemId,
        page: PageQuery,
    ) -> ApiResult<Page<StockMovement>> {
        let url = format!("{}/stock/movements/item/{item_id}", self.endpoints().inventory);
        self.get_json(url, &page.params()).await
    }

    pub async fn create_movement(&self, request: &CreateMovementRequest) -> ApiResult<StockMovement> {
        let url = format!("{}/stock/movements", self.endpoints().inventory);
        self.post_json(url, request).await
    }

    pub async fn list_replenishments(
        &self,
        page: PageQuery,
    ) -> ApiResult<Page<ReplenishmentRequest>> {
        let url = format!("{}/replenishment", self.endpoints().inventory);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_replenishments_by_status(
        &self,
        status: RequestStatus,
        page: PageQuery,
    ) -> ApiResult<Page<ReplenishmentRequest>> {
        let url = format!("{}/replenishment/status/{status}", self.endpoints().inventory);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_replenishments_by_warehouse(
        &self,
        warehouse_id: WarehouseId,
        page: PageQuery,
    ) -> ApiResult<Page<ReplenishmentRequest>> {
        let url = format!(
            "{}/replenishment/warehouse/{warehouse_id}",
            self.endpoints().inventory
        );
        self.get_json(url, &page.params()).await
    }

    pub async fn get_replenishment(&self, id: RequestId) -> ApiResult<ReplenishmentRequest> {
        let url = format!("{}/replenishment/{id}", self.endpoints().inventory);
        self.get_json(url, &[]).await
    }

    /// Submit a new replenishment request. The draft precondition is
    /// checked here as well: an invalid draft never reaches the wire, no
    /// matter which surface it came through.
    pub async fn create_replenishment(
        &self,
        draft: &ReplenishmentDraft,
    ) -> ApiResult<ReplenishmentRequest> {
        draft
            .validate()
            .map_err(|e| ApiError::validation(e.to_string()))?;
        let url = format!("{}/replenishment", self.endpoints().inventory);
        self.post_json(url, draft).await
    }

    pub async fn approve_replenishment(
        &self,
        id: RequestId,
        notes: Option<&str>,
    ) -> ApiResult<ReplenishmentRequest> {
        let url = format!("{}/replenishment/{id}/approve", self.endpoints().inventory);
        self.put_json(url, &ApprovalPayload::new(notes)).await
    }

    pub async fn reject_replenishment(
        &self,
        id: RequestId,
        notes: Option<&str>,
    ) -> ApiResult<ReplenishmentRequest> {
        let url = format!("{}/replenishment/{id}/reject", self.endpoints().inventory);
        self.put_json(url, &ApprovalPayload::new(notes)).await
    }
}
