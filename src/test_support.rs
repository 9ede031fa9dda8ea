//! Shared fixtures for unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::api::{ApiError, ApiResult, Backend};
use crate::models::{
    Analytics, Appeal, AppealCategory, AppealCreate, AppealList, AppealPriority, AppealStatus, LoginRequest,
    RegisterRequest, TokenResponse, User,
};
use crate::session::Session;

pub fn citizen() -> User {
    User {
        id: 3,
        email: "citizen@example.com".to_string(),
        full_name: "Анна Смирнова".to_string(),
        phone: Some("+79990000000".to_string()),
        role: "citizen".to_string(),
        is_active: true,
        is_admin: false,
        is_verified: true,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    }
}

pub fn admin() -> User {
    User {
        id: 1,
        email: "admin@glas.ru".to_string(),
        full_name: "Администратор".to_string(),
        role: "admin".to_string(),
        is_admin: true,
        ..citizen()
    }
}

pub fn session_for(user: User) -> Session {
    Session {
        token: "test-token".to_string(),
        user,
    }
}

pub fn token_response(user: User) -> TokenResponse {
    TokenResponse {
        access_token: "test-token".to_string(),
        token_type: "bearer".to_string(),
        user,
    }
}

pub fn appeal(id: u64, status: AppealStatus) -> Appeal {
    Appeal {
        id,
        title: format!("Обращение {id}"),
        description: "Не работает уличное освещение".to_string(),
        category: AppealCategory::Lighting,
        status,
        priority: AppealPriority::Medium,
        latitude: None,
        longitude: None,
        address: None,
        district: None,
        images: Vec::new(),
        ai_summary: None,
        ai_sentiment: None,
        user_id: 3,
        department_id: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 14, 8, 30, 0).unwrap(),
        updated_at: None,
        resolved_at: None,
    }
}

pub fn detail_error(status: u16, detail: &str) -> ApiError {
    ApiError::Status {
        status,
        detail: Some(detail.to_string()),
    }
}

/// Scripted backend that records how often each call was made
pub struct MockBackend {
    pub login_result: RefCell<Option<ApiResult<TokenResponse>>>,
    pub register_result: RefCell<Option<ApiResult<User>>>,
    pub appeals_result: RefCell<Option<ApiResult<AppealList>>>,
    pub create_result: RefCell<Option<ApiResult<Appeal>>>,
    pub analytics_result: RefCell<Option<ApiResult<Analytics>>>,
    pub created: RefCell<Vec<AppealCreate>>,
    pub calls: Cell<usize>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            login_result: RefCell::new(None),
            register_result: RefCell::new(None),
            appeals_result: RefCell::new(None),
            create_result: RefCell::new(None),
            analytics_result: RefCell::new(None),
            created: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }
}

impl MockBackend {
    fn take<T>(&self, slot: &RefCell<Option<ApiResult<T>>>) -> ApiResult<T> {
        self.calls.set(self.calls.get() + 1);
        slot.borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

#[async_trait(?Send)]
impl Backend for MockBackend {
    async fn login(&self, _request: &LoginRequest) -> ApiResult<TokenResponse> {
        self.take(&self.login_result)
    }

    async fn register(&self, _request: &RegisterRequest) -> ApiResult<User> {
        self.take(&self.register_result)
    }

    async fn list_appeals(&self) -> ApiResult<AppealList> {
        self.take(&self.appeals_result)
    }

    async fn create_appeal(&self, appeal: &AppealCreate) -> ApiResult<Appeal> {
        self.created.borrow_mut().push(appeal.clone());
        self.take(&self.create_result)
    }

    async fn dashboard_analytics(&self, _days: u32) -> ApiResult<Analytics> {
        self.take(&self.analytics_result)
    }
}
