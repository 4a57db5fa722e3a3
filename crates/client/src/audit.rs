//! Audit service surface: cross-service event trail queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklink_core::{ApiResult, AuditEventId, Page, PageQuery, UserId};

use crate::ApiClient;

/// One recorded audit event.
///
/// Only identity, type, source, and timestamp are always present; the
/// remaining fields depend on what the emitting service captured.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub id: AuditEventId,
    pub event_type: String,
    pub service_name: String,
    /// Value of the `X-Correlation-Id` header the emitting request carried.
    #[serde(default)]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub trace_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_role: Option<String>,
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub request_path: Option<String>,
    #[serde(default)]
    pub client_ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub response_status: Option<u16>,
    #[serde(default)]
    pub duration_ms: Option<i64>,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<i64>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub previous_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Filter body for the audit search endpoint; unset fields do not
/// constrain the result.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeCount {
    pub event_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCount {
    pub service_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityCount {
    pub username: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCount {
    pub action: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivityCount {
    pub date: String,
    pub count: u64,
}

/// Aggregated audit activity for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDashboard {
    pub total_events: u64,
    pub error_count: u64,
    pub event_type_stats: Vec<EventTypeCount>,
    pub service_stats: Vec<ServiceCount>,
    pub user_activity_stats: Vec<UserActivityCount>,
    pub action_stats: Vec<ActionCount>,
    pub daily_activity_stats: Vec<DailyActivityCount>,
}

impl ApiClient {
    pub async fn list_audit_events(&self, page: PageQuery) -> ApiResult<Page<AuditEvent>> {
        let url = format!("{}/audit/events", self.endpoints().audit);
        self.get_json(url, &page.params()).await
    }

    pub async fn get_audit_event(&self, id: AuditEventId) -> ApiResult<AuditEvent> {
        let url = format!("{}/audit/events/{id}", self.endpoints().audit);
        self.get_json(url, &[]).await
    }

    /// Every event recorded under one correlation identifier: the whole
    /// cross-service trace of a single client action.
    pub async fn audit_events_by_correlation(
        &self,
        correlation_id: &str,
    ) -> ApiResult<Vec<AuditEvent>> {
        let url = format!(
            "{}/audit/events/correlation/{correlation_id}",
            self.endpoints().audit
        );
        self.get_json(url, &[]).await
    }

    pub async fn list_audit_events_by_user(
        &self,
        user_id: UserId,
        page: PageQuery,
    ) -> ApiResult<Page<AuditEvent>> {
        let url = format!("{}/audit/events/user/{user_id}", self.endpoints().audit);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_audit_events_by_service(
        &self,
        service_name: &str,
        page: PageQuery,
    ) -> ApiResult<Page<AuditEvent>> {
        let url = format!("{}/audit/events/service/{service_name}", self.endpoints().audit);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_audit_events_by_type(
        &self,
        event_type: &str,
        page: PageQuery,
    ) -> ApiResult<Page<AuditEvent>> {
        let url = format!("{}/audit/events/type/{event_type}", self.endpoints().audit);
        self.get_json(url, &page.params()).await
    }

    pub async fn list_audit_events_by_entity(
        &self,
        entity_type: &str,
        entity_id: i64,
        page: PageQuery,
    ) -> ApiResult<Page<AuditEvent>> {
        let url = format!(
            "{}/audit/events/entity/{entity_type}/{entity_id}",
            self.endpoints().audit
        );
        self.get_json(url, &page.params()).await
    }

    pub async fn search_audit_events(
        &self,
        criteria: &AuditSearchCriteria,
    ) -> ApiResult<Page<AuditEvent>> {
        let url = format!("{}/audit/events/search", self.endpoints().audit);
        self.post_json(url, criteria).await
    }

    /// Failed requests recorded in the last `hours` hours.
    pub async fn list_audit_errors(
        &self,
        hours: u32,
        page: PageQuery,
    ) -> ApiResult<Page<AuditEvent>> {
        let url = format!("{}/audit/events/errors", self.endpoints().audit);
        let mut params = vec![("hours", hours.to_string())];
        params.extend(page.params());
        self.get_json(url, &params).await
    }

    pub async fn audit_dashboard(&self, hours: u32) -> ApiResult<AuditDashboard> {
        let url = format!("{}/audit/dashboard", self.endpoints().audit);
        self.get_json(url, &[("hours", hours.to_string())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_event_parses_with_defaults() {
        let json = r#"{
            "id": 5012,
            "eventType": "REPLENISHMENT_APPROVED",
            "serviceName": "inventory-service",
            "correlationId": "6e1cbe3f-8f0a-4f9e-9d0b-0f2f2d9a5c11",
            "username": "admin@ims.example",
            "entityType": "ReplenishmentRequest",
            "entityId": 301,
            "success": true,
            "timestamp": "2026-03-02T10:00:00Z"
        }"#;
        let event: AuditEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, AuditEventId::new(5012));
        assert_eq!(event.entity_id, Some(301));
        assert!(event.success);
        assert_eq!(event.http_method, None);
        assert_eq!(event.duration_ms, None);
    }

    #[test]
    fn search_criteria_serializes_only_set_filters() {
        let criteria = AuditSearchCriteria {
            service_name: Some("inventory-service".into()),
            action: Some("APPROVE".into()),
            ..AuditSearchCriteria::default()
        };
        let json = serde_json::to_string(&criteria).unwrap();
        assert_eq!(
            json,
            r#"{"serviceName":"inventory-service","action":"APPROVE"}"#
        );
    }
}
