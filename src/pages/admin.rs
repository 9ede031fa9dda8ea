//! Admin Analytics Page
//!
//! Read-only display of the backend's pre-aggregated report. Nothing is
//! recomputed here beyond number formatting.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::{ErrorBanner, SiteHeader};
use crate::context::use_app_context;
use crate::models::{AppealCategory, AppealPriority, AppealStatus, Analytics};
use crate::query::{use_query, QueryKey, QueryState};
use crate::router::{Link, Route};

pub const DEFAULT_PERIOD_DAYS: u32 = 30;
pub const PERIODS: [(u32, &str); 4] = [(7, "7 дней"), (30, "30 дней"), (90, "90 дней"), (365, "Год")];
pub const ANALYTICS_FAILED: &str = "Не удалось загрузить аналитику";

/// The four headline numbers, already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsTiles {
    pub total_appeals: String,
    pub resolution_rate: String,
    pub average_resolution_time: String,
    pub pending: String,
}

impl AnalyticsTiles {
    pub fn from_analytics(analytics: &Analytics) -> Self {
        let pending = analytics
            .appeals_by_status
            .get(AppealStatus::Pending.as_str())
            .copied()
            .unwrap_or(0);
        Self {
            total_appeals: analytics.total_appeals.to_string(),
            resolution_rate: format!("{:.1}%", analytics.resolution_rate),
            average_resolution_time: format!("{:.1}ч", analytics.average_resolution_time),
            pending: pending.to_string(),
        }
    }
}

/// Label/count rows for a breakdown map; keys without a known label show as-is
pub fn breakdown_rows(counts: &BTreeMap<String, u64>, label: impl Fn(&str) -> Option<&'static str>) -> Vec<(String, u64)> {
    counts
        .iter()
        .map(|(key, count)| (label(key).map(str::to_string).unwrap_or_else(|| key.clone()), *count))
        .collect()
}

fn category_rows(analytics: &Analytics) -> Vec<(String, u64)> {
    breakdown_rows(&analytics.appeals_by_category, |key| {
        AppealCategory::from_value(key).map(AppealCategory::label)
    })
}

fn priority_rows(analytics: &Analytics) -> Vec<(String, u64)> {
    breakdown_rows(&analytics.appeals_by_priority, |key| {
        AppealPriority::from_value(key).map(AppealPriority::label)
    })
}

#[component]
fn Tile(title: &'static str, value: String, #[prop(optional)] accent: &'static str) -> impl IntoView {
    let value_class = format!("text-3xl font-bold {}", if accent.is_empty() { "text-gray-900" } else { accent });
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h3 class="text-sm text-gray-600 mb-2">{title}</h3>
            <p class=value_class>{value}</p>
        </div>
    }
}

#[component]
fn Breakdown(title: &'static str, rows: Vec<(String, u64)>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            <div class="space-y-2">
                {rows.into_iter().map(|(label, count)| view! {
                    <div class="flex justify-between">
                        <span class="text-gray-700">{label}</span>
                        <span class="font-semibold">{count}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Report for one period; remounted when the period changes
#[component]
fn AnalyticsReport(days: u32) -> impl IntoView {
    let backend = use_app_context().backend();
    let analytics = use_query(QueryKey::Analytics { days }, move || {
        let backend = backend.clone();
        async move { backend.dashboard_analytics(days).await }
    });

    move || match analytics.get() {
        QueryState::Loading => view! { <div>"Загрузка..."</div> }.into_any(),
        QueryState::Failed(err) => {
            let message = err.message_or(ANALYTICS_FAILED);
            view! { <ErrorBanner message=Signal::derive(move || Some(message.clone())) /> }.into_any()
        }
        QueryState::Ready(report) => {
            let tiles = AnalyticsTiles::from_analytics(&report);
            let districts = report
                .top_districts
                .iter()
                .map(|d| (d.district.clone(), d.count))
                .collect::<Vec<_>>();
            view! {
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                    <Tile title="Всего обращений" value=tiles.total_appeals />
                    <Tile title="Процент решенных" value=tiles.resolution_rate accent="text-green-600" />
                    <Tile title="Среднее время решения" value=tiles.average_resolution_time accent="text-blue-600" />
                    <Tile title="Ожидают" value=tiles.pending accent="text-yellow-600" />
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <Breakdown title="Статистика по категориям" rows=category_rows(&report) />
                    <Breakdown title="Статистика по приоритетам" rows=priority_rows(&report) />
                    {(!districts.is_empty()).then(|| view! {
                        <Breakdown title="Топ районов" rows=districts />
                    })}
                </div>
            }.into_any()
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let (days, set_days) = signal(DEFAULT_PERIOD_DAYS);

    view! {
        <div class="min-h-screen bg-gray-50">
            <SiteHeader>
                <Link to=Route::Dashboard class="text-gray-600 hover:text-gray-900">"Мои обращения"</Link>
            </SiteHeader>
            <div class="container mx-auto px-4 py-8">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-3xl font-bold text-gray-900">"Админ-панель"</h1>
                    <div class="flex space-x-2">
                        {PERIODS.into_iter().map(|(period, label)| view! {
                            <button
                                type="button"
                                class=move || if days.get() == period {
                                    "px-3 py-1 rounded-md text-sm bg-primary-600 text-white"
                                } else {
                                    "px-3 py-1 rounded-md text-sm bg-white text-gray-700 border border-gray-300"
                                }
                                on:click=move |_| set_days.set(period)
                            >
                                {label}
                            </button>
                        }).collect_view()}
                    </div>
                </div>
                {move || view! { <AnalyticsReport days=days.get() /> }}
            </div>
        </div>
    }
}
