//! HTTP Client
//!
//! One `reqwest` client bound to the configured base URL. The bearer token is
//! read from the session store on every request.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiError, ApiResult, Backend};
use crate::models::{
    Analytics, Appeal, AppealCreate, AppealList, LoginRequest, RegisterRequest, TokenResponse, User,
};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    sessions: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, sessions: SessionStore) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            sessions,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        tracing::debug!(path, "GET");
        self.send(self.http.get(self.endpoint(path)), path).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        self.send(self.http.post(self.endpoint(path)).json(body), path).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> ApiResult<T> {
        let request = match self.sessions.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|err| {
            tracing::warn!(path, error = %err, "request did not complete");
            ApiError::Network(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!(path, status = status.as_u16(), detail = ?err.detail(), "request failed");
            return Err(err);
        }

        response.json::<T>().await.map_err(|err| {
            tracing::warn!(path, error = %err, "response body did not decode");
            ApiError::Decode(err.to_string())
        })
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<TokenResponse> {
        self.post("/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        self.post("/auth/register", request).await
    }

    async fn list_appeals(&self) -> ApiResult<AppealList> {
        self.get("/appeals").await
    }

    async fn create_appeal(&self, appeal: &AppealCreate) -> ApiResult<Appeal> {
        self.post("/appeals", appeal).await
    }

    async fn dashboard_analytics(&self, days: u32) -> ApiResult<Analytics> {
        self.get(&format!("/analytics/dashboard?days={days}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000/api/v1", "/appeals"),
            "http://localhost:8000/api/v1/appeals"
        );
        assert_eq!(
            join_url("http://localhost:8000/api/v1/", "analytics/dashboard?days=30"),
            "http://localhost:8000/api/v1/analytics/dashboard?days=30"
        );
    }

    #[test]
    fn test_base_url_is_normalised() {
        let client = ApiClient::new("https://glas.example/api/v1//", SessionStore::new(MemoryStorage::default()));
        assert_eq!(client.endpoint("/appeals"), "https://glas.example/api/v1/appeals");
    }
}
