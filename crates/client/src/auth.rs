//! Auth service surface: login and admin-only user management.

use serde::{Deserialize, Serialize};

use stocklink_core::{ApiResult, Page, PageQuery, UserId, WarehouseId};
use stocklink_session::{Role, Session};
use tracing::warn;

use crate::ApiClient;

/// Credentials posted to the login endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login payload from the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Token scheme; always `Bearer` today.
    #[serde(rename = "type")]
    pub token_type: String,
    pub user_id: UserId,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub roles: Vec<Role>,
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Session {
            token: resp.token,
            user_id: resp.user_id,
            email: resp.email,
            first_name: resp.first_name,
            last_name: resp.last_name,
            roles: resp.roles,
            warehouse_id: resp.warehouse_id,
        }
    }
}

/// A user account as the auth service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
    #[serde(default)]
    pub warehouse_id: Option<WarehouseId>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<WarehouseId>,
}

/// Partial update; absent fields are left untouched by the service.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<WarehouseId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

impl ApiClient {
    /// Authenticate against the combined login endpoint and install the
    /// returned session in the store.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<Session> {
        self.login_at("/auth/login", credentials).await
    }

    /// Warehouse-operator login variant.
    pub async fn login_user(&self, credentials: &LoginRequest) -> ApiResult<Session> {
        self.login_at("/auth/login/user", credentials).await
    }

    /// Admin login variant.
    pub async fn login_admin(&self, credentials: &LoginRequest) -> ApiResult<Session> {
        self.login_at("/auth/login/admin", credentials).await
    }

    async fn login_at(&self, path: &str, credentials: &LoginRequest) -> ApiResult<Session> {
        let url = format!("{}{}", self.endpoints().auth, path);
        let resp: LoginResponse = self.post_json(url, credentials).await?;
        let session = Session::from(resp);
        if let Err(e) = self.sessions().set(session.clone()) {
            // The session still lives in memory; only persistence failed.
            warn!(error = %e, "session not persisted");
        }
        Ok(session)
    }

    pub async fn list_users(&self, page: PageQuery) -> ApiResult<Page<User>> {
        let url = format!("{}/users", self.endpoints().auth);
        self.get_json(url, &page.params()).await
    }

    pub async fn get_user(&self, id: UserId) -> ApiResult<User> {
        let url = format!("{}/users/{id}", self.endpoints().auth);
        self.get_json(url, &[]).await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> ApiResult<User> {
        let url = format!("{}/users", self.endpoints().auth);
        self.post_json(url, request).await
    }

    pub async fn update_user(&self, id: UserId, request: &UpdateUserRequest) -> ApiResult<User> {
        let url = format!("{}/users/{id}", self.endpoints().auth);
        self.put_json(url, request).await
    }

    pub async fn reset_password(
        &self,
        id: UserId,
        request: &ResetPasswordRequest,
    ) -> ApiResult<()> {
        let url = format!("{}/users/{id}/reset-password", self.endpoints().auth);
        self.post_no_content(url, request).await
    }

    /// Deactivation is a soft delete; the account stops authenticating
    /// but its audit trail remains.
    pub async fn deactivate_user(&self, id: UserId) -> ApiResult<()> {
        let url = format!("{}/users/{id}", self.endpoints().auth);
        self.delete_no_content(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_becomes_a_session() {
        let json = r#"{
            "token": "jwt-token",
            "type": "Bearer",
            "userId": 4,
            "email": "op@ims.example",
            "roles": ["ROLE_USER"],
            "warehouseId": 2
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token_type, "Bearer");

        let session = Session::from(resp);
        assert!(session.is_warehouse_user());
        assert_eq!(session.warehouse_id(), Some(WarehouseId::new(2)));
        assert_eq!(session.token, "jwt-token");
    }

    #[test]
    fn partial_update_serializes_only_set_fields() {
        let update = UpdateUserRequest {
            active: Some(false),
            ..UpdateUserRequest::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"active":false}"#);
    }

    #[test]
    fn create_user_omits_missing_warehouse() {
        let create = CreateUserRequest {
            email: "new@ims.example".into(),
            password: "s3cret".into(),
            first_name: "New".into(),
            last_name: "Admin".into(),
            roles: vec![Role::ADMIN],
            warehouse_id: None,
        };
        let json = serde_json::to_string(&create).unwrap();
        assert!(!json.contains("warehouseId"));
        assert!(json.contains(r#""roles":["ROLE_ADMIN"]"#));
    }
}
