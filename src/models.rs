//! Frontend Models
//!
//! Data structures matching backend entities.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Appeal lifecycle stage (owned by backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppealStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
    Closed,
}

impl AppealStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppealStatus::Pending => "pending",
            AppealStatus::InProgress => "in_progress",
            AppealStatus::Resolved => "resolved",
            AppealStatus::Rejected => "rejected",
            AppealStatus::Closed => "closed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppealStatus::Pending => "Ожидает",
            AppealStatus::InProgress => "В работе",
            AppealStatus::Resolved => "Решено",
            AppealStatus::Rejected => "Отклонено",
            AppealStatus::Closed => "Закрыто",
        }
    }

    /// Badge colour classes
    pub fn badge_class(self) -> &'static str {
        match self {
            AppealStatus::Resolved => "bg-green-100 text-green-800",
            AppealStatus::InProgress => "bg-blue-100 text-blue-800",
            _ => "bg-yellow-100 text-yellow-800",
        }
    }
}

/// Topical classification of an appeal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppealCategory {
    Roads,
    Lighting,
    Improvement,
    Ecology,
    Safety,
    Healthcare,
    Utilities,
    Social,
    Other,
}

impl AppealCategory {
    pub const ALL: [AppealCategory; 9] = [
        AppealCategory::Roads,
        AppealCategory::Lighting,
        AppealCategory::Improvement,
        AppealCategory::Ecology,
        AppealCategory::Safety,
        AppealCategory::Healthcare,
        AppealCategory::Utilities,
        AppealCategory::Social,
        AppealCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppealCategory::Roads => "roads",
            AppealCategory::Lighting => "lighting",
            AppealCategory::Improvement => "improvement",
            AppealCategory::Ecology => "ecology",
            AppealCategory::Safety => "safety",
            AppealCategory::Healthcare => "healthcare",
            AppealCategory::Utilities => "utilities",
            AppealCategory::Social => "social",
            AppealCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppealCategory::Roads => "Дороги и транспорт",
            AppealCategory::Lighting => "Освещение",
            AppealCategory::Improvement => "Благоустройство",
            AppealCategory::Ecology => "Экология и отходы",
            AppealCategory::Safety => "Безопасность",
            AppealCategory::Healthcare => "Здравоохранение",
            AppealCategory::Utilities => "Коммунальные услуги",
            AppealCategory::Social => "Социальная помощь",
            AppealCategory::Other => "Другое",
        }
    }

    /// Look up a category by its wire value
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppealPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl AppealPriority {
    pub const ALL: [AppealPriority; 4] = [
        AppealPriority::Low,
        AppealPriority::Medium,
        AppealPriority::High,
        AppealPriority::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppealPriority::Low => "low",
            AppealPriority::Medium => "medium",
            AppealPriority::High => "high",
            AppealPriority::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppealPriority::Low => "Низкий",
            AppealPriority::Medium => "Средний",
            AppealPriority::High => "Высокий",
            AppealPriority::Urgent => "Срочный",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub is_admin: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Appeal data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appeal {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: AppealCategory,
    pub status: AppealStatus,
    pub priority: AppealPriority,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub ai_sentiment: Option<String>,
    pub user_id: u64,
    #[serde(default)]
    pub department_id: Option<u64>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Write-side payload for `POST /appeals`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppealCreate {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AppealCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Response of `GET /appeals`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppealList {
    pub items: Vec<Appeal>,
    pub total: u64,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistrictCount {
    pub district: String,
    pub count: u64,
}

/// Pre-aggregated report from `GET /analytics/dashboard`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Analytics {
    pub total_appeals: u64,
    pub resolution_rate: f64,
    pub average_resolution_time: f64,
    #[serde(default)]
    pub appeals_by_status: BTreeMap<String, u64>,
    #[serde(default)]
    pub appeals_by_category: BTreeMap<String, u64>,
    #[serde(default)]
    pub appeals_by_priority: BTreeMap<String, u64>,
    #[serde(default)]
    pub top_districts: Vec<DistrictCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// ISO-8601 timestamps, with or without an offset.
///
/// The backend emits naive datetimes for UTC values; those are read as UTC.
pub mod timestamp {
    use std::fmt;

    use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(value: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Calendar date as shown to users (`DD.MM.YYYY`), in the browser's timezone
    pub fn format_date(value: &DateTime<Utc>) -> String {
        format_date_in(value, &Local)
    }

    pub fn format_date_in<Tz: TimeZone>(value: &DateTime<Utc>, zone: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        value.with_timezone(zone).format("%d.%m.%Y").to_string()
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => super::serialize(dt, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}"))),
                None => Ok(None),
            }
        }
    }
}
