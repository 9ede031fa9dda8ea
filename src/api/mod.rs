//! Backend API
//!
//! The [`Backend`] trait is the seam every page calls through; [`ApiClient`]
//! implements it over HTTP.

mod client;
mod error;

use async_trait::async_trait;

use crate::models::{
    Analytics, Appeal, AppealCreate, AppealList, LoginRequest, RegisterRequest, TokenResponse, User,
};

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};

/// Typed backend operations
#[async_trait(?Send)]
pub trait Backend {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> ApiResult<TokenResponse>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> ApiResult<User>;

    /// `GET /appeals`, scoped to the authenticated user by the backend
    async fn list_appeals(&self) -> ApiResult<AppealList>;

    /// `POST /appeals`
    async fn create_appeal(&self, appeal: &AppealCreate) -> ApiResult<Appeal>;

    /// `GET /analytics/dashboard?days=N`
    async fn dashboard_analytics(&self, days: u32) -> ApiResult<Analytics>;
}
