//! Catalog service surface: items, categories, suppliers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stocklink_core::{ApiResult, CategoryId, ItemId, Page, PageQuery, SupplierId};

use crate::ApiClient;

/// A catalog item with its denormalized category/supplier display fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: CategoryId,
    pub category_name: String,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub unit_price: Decimal,
    pub reorder_level: i64,
    pub reorder_quantity: i64,
    pub lead_time_days: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub sku: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub supplier_id: SupplierId,
    pub unit_price: Decimal,
    pub reorder_level: i64,
    pub reorder_quantity: i64,
    pub lead_time_days: i64,
}

/// Partial update; absent fields are left untouched by the service.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<SupplierId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_time_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub item_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub active: bool,
    pub item_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ApiClient {
    pub async fn list_items(&self, page: PageQuery) -> ApiResult<Page<Item>> {
        let url = format!("{}/items", self.endpoints().catalog);
        self.get_json(url, &page.params()).await
    }

    pub async fn get_item(&self, id: ItemId) -> ApiResult<Item> {
        let url = format!("{}/items/{id}", self.endpoints().catalog);
        self.get_json(url, &[]).await
    }

    pub async fn get_item_by_sku(&self, sku: &str) -> ApiResult<Item> {
        let url = format!("{}/items/sku/{sku}", self.endpoints().catalog);
        self.get_json(url, &[]).await
    }

    pub async fn list_items_by_category(
        &self,
        category_id: CategoryId,
        page: PageQuery,
    ) -> ApiResult<Page<Item>> {
        let url = format!("{}/items/category/{category_id}", self.endpoints().catalog);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_items_by_supplier(
        &self,
        supplier_id: SupplierId,
        page: PageQuery,
    ) -> ApiResult<Page<Item>> {
        let url = format!("{}/items/supplier/{supplier_id}", self.endpoints().catalog);
        self.get_json(url, &page.params()).await
    }

    pub async fn search_items(&self, query: &str, page: PageQuery) -> ApiResult<Page<Item>> {
        let url = format!("{}/items/search", self.endpoints().catalog);
        let mut params = vec![("query", query.to_owned())];
        params.extend(page.params());
        self.get_json(url, &params).await
    }

    pub async fn create_item(&self, request: &CreateItemRequest) -> ApiResult<Item> {
        let url = format!("{}/items", self.endpoints().catalog);
        self.post_json(url, request).await
    }

    pub async fn update_item(&self, id: ItemId, request: &UpdateItemRequest) -> ApiResult<Item> {
        let url = format!("{}/items/{id}", self.endpoints().catalog);
        self.put_json(url, request).await
    }

    pub async fn delete_item(&self, id: ItemId) -> ApiResult<()> {
        let url = format!("{}/items/{id}", self.endpoints().catalog);
        self.delete_no_content(url).await
    }

    /// Categories are few; the service returns them unpaged.
    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let url = format!("{}/categories", self.endpoints().catalog);
        self.get_json(url, &[]).await
    }

    pub async fn get_category(&self, id: CategoryId) -> ApiResult<Category> {
        let url = format!("{}/categories/{id}", self.endpoints().catalog);
        self.get_json(url, &[]).await
    }

    pub async fn create_category(&self, request: &CreateCategoryRequest) -> ApiResult<Category> {
        let url = format!("{}/categories", self.endpoints().catalog);
        self.post_json(url, request).await
    }

    pub async fn update_category(
        &self,
        id: CategoryId,
        request: &CreateCategoryRequest,
    ) -> ApiResult<Category> {
        let url = format!("{}/categories/{id}", self.endpoints().catalog);
        self.put_json(url, request).await
    }

    pub async fn delete_category(&self, id: CategoryId) -> ApiResult<()> {
        let url = format!("{}/categories/{id}", self.endpoints().catalog);
        self.delete_no_content(url).await
    }

    pub async fn list_suppliers(&self) -> ApiResult<Vec<Supplier>> {
        let url = format!("{}/suppliers", self.endpoints().catalog);
        self.get_json(url, &[]).await
    }

    pub async fn get_supplier(&self, id: SupplierId) -> ApiResult<Supplier> {
        let url = format!("{}/suppliers/{id}", self.endpoints().catalog);
        self.get_json(url, &[]).await
    }

    pub async fn search_suppliers(&self, query: &str) -> ApiResult<Vec<Supplier>> {
        let url = format!("{}/suppliers/search", self.endpoints().catalog);
        self.get_json(url, &[("query", query.to_owned())]).await
    }

    pub async fn create_supplier(&self, request: &CreateSupplierRequest) -> ApiResult<Supplier> {
        let url = format!("{}/suppliers", self.endpoints().catalog);
        self.post_json(url, request).await
    }

    pub async fn update_supplier(
        &self,
        id: SupplierId,
        request: &CreateSupplierRequest,
    ) -> ApiResult<Supplier> {
        let url = format!("{}/suppliers/{id}", self.endpoints().catalog);
        self.put_json(url, request).await
    }

    pub async fn delete_supplier(&self, id: SupplierId) -> ApiResult<()> {
        let url = format!("{}/suppliers/{id}", self.endpoints().catalog);
        self.delete_no_content(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_item() {
        let json = r#"{
            "id": 9,
            "sku": "SKU-0009",
            "name": "Box cutter",
            "description": "Retractable blade",
            "categoryId": 3,
            "categoryName": "Tools",
            "supplierId": 5,
            "supplierName": "Acme Supply",
            "unitPrice": 4.75,
            "reorderLevel": 20,
            "reorderQuantity": 50,
            "leadTimeDays": 7,
            "active": true,
            "createdAt": "2026-01-10T00:00:00Z",
            "updatedAt": "2026-02-20T12:30:00Z"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.sku, "SKU-0009");
        assert_eq!(item.unit_price, Decimal::new(475, 2));
        assert_eq!(item.reorder_level, 20);
    }

    #[test]
    fn item_update_serializes_only_set_fields() {
        let update = UpdateItemRequest {
            reorder_level: Some(30),
            active: Some(false),
            ..UpdateItemRequest::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"reorderLevel":30,"active":false}"#);
    }
}
