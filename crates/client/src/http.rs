//! The shared HTTP layer.
//!
//! [`ApiClient`] owns the transport policy for all four services: a fresh
//! `X-Correlation-Id` per request, the session's bearer token when one is
//! present, JSON bodies both ways, and the status→category error mapping.
//! A 401 from any service clears the stored session before the error
//! propagates; the in-flight action is abandoned.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use stocklink_core::error::response_message;
use stocklink_core::{ApiError, ApiResult, CORRELATION_HEADER, CorrelationId};
use stocklink_session::SessionStore;

use crate::ServiceEndpoints;

/// Client for the auth, catalog, inventory, and audit services.
pub struct ApiClient {
    http: Client,
    endpoints: ServiceEndpoints,
    sessions: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(endpoints: ServiceEndpoints, sessions: Arc<SessionStore>) -> Self {
        Self {
            http: Client::new(),
            endpoints,
            sessions,
        }
    }

    pub fn endpoints(&self) -> &ServiceEndpoints {
        &self.endpoints
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Log out. There is no backend call; dropping the stored session is
    /// the whole operation.
    pub fn logout(&self) {
        if let Err(e) = self.sessions.clear() {
            warn!(error = %e, "failed to clear stored session on logout");
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let rb = self.http.get(&url).query(query);
        self.send("GET", &url, rb).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> ApiResult<T> {
        let rb = self.http.post(&url).json(body);
        self.send("POST", &url, rb).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> ApiResult<T> {
        let rb = self.http.put(&url).json(body);
        self.send("PUT", &url, rb).await
    }

    pub(crate) async fn post_no_content<B: Serialize + ?Sized>(
        &self,
        url: String,
        body: &B,
    ) -> ApiResult<()> {
        let rb = self.http.post(&url).json(body);
        self.dispatch("POST", &url, rb).await?;
        Ok(())
    }

    pub(crate) async fn delete_no_content(&self, url: String) -> ApiResult<()> {
        let rb = self.http.delete(&url);
        self.dispatch("DELETE", &url, rb).await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        rb: RequestBuilder,
    ) -> ApiResult<T> {
        let resp = self.dispatch(method, url, rb).await?;
        resp.json().await.map_err(|e| ApiError::decode(e.to_string()))
    }

    async fn dispatch(&self, method: &str, url: &str, rb: RequestBuilder) -> ApiResult<Response> {
        let correlation_id = CorrelationId::new();
        let mut rb = rb.header(CORRELATION_HEADER, correlation_id.to_string());
        if let Some(token) = self.sessions.token() {
            rb = rb.bearer_auth(token);
        }

        let resp = rb.send().await.map_err(|e| {
            warn!(method, url, %correlation_id, error = %e, "request failed before a response arrived");
            ApiError::network(e.to_string())
        })?;

        let status = resp.status();
        debug!(method, url, status = status.as_u16(), %correlation_id, "service round trip");
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(self.categorize_failure(status.as_u16(), &body))
    }

    /// Fold a non-success response into the error taxonomy, dropping the
    /// stored session when the failure means it expired.
    fn categorize_failure(&self, status: u16, body: &str) -> ApiError {
        let err = ApiError::from_status(status, response_message(body));
        if err.is_session_expiry() {
            if let Err(e) = self.sessions.clear() {
                warn!(error = %e, "failed to clear expired session");
            }
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklink_core::UserId;
    use stocklink_session::{Role, Session};

    fn client_with_session() -> ApiClient {
        let endpoints = ServiceEndpoints::new(
            "http://127.0.0.1:9/api",
            "http://127.0.0.1:9/api",
            "http://127.0.0.1:9/api",
            "http://127.0.0.1:9/api",
        );
        let sessions = Arc::new(SessionStore::in_memory());
        sessions
            .set(Session {
                token: "jwt".into(),
                user_id: UserId::new(1),
                email: "op@ims.example".into(),
                first_name: None,
                last_name: None,
                roles: vec![Role::USER],
                warehouse_id: None,
            })
            .unwrap();
        ApiClient::new(endpoints, sessions)
    }

    #[test]
    fn a_401_clears_the_stored_session() {
        let client = client_with_session();
        assert!(client.sessions().is_logged_in());

        let err = client.categorize_failure(401, "");
        assert_eq!(err, ApiError::Unauthorized);
        assert!(!client.sessions().is_logged_in());
    }

    #[test]
    fn other_failures_leave_the_session_alone() {
        let client = client_with_session();

        assert_eq!(client.categorize_failure(403, ""), ApiError::Forbidden);
        assert_eq!(client.categorize_failure(404, ""), ApiError::NotFound);
        assert_eq!(client.categorize_failure(502, ""), ApiError::Server(502));
        assert!(client.sessions().is_logged_in());
    }

    #[test]
    fn validation_failures_carry_the_service_message() {
        let client = client_with_session();
        let err = client
            .categorize_failure(400, r#"{"message":"Requested quantity must be positive"}"#);
        assert_eq!(
            err,
            ApiError::Validation("Requested quantity must be positive".into())
        );
    }
}
