//! Appeal Card Component
//!
//! One appeal in the dashboard list.

use leptos::prelude::*;

use crate::models::{timestamp, Appeal, AppealStatus};

pub fn status_badge_class(status: AppealStatus) -> String {
    format!("px-3 py-1 rounded-full text-sm {}", status.badge_class())
}

#[component]
pub fn StatusBadge(status: AppealStatus) -> impl IntoView {
    view! {
        <span class=status_badge_class(status) data-status=status.as_str()>
            {status.label()}
        </span>
    }
}

#[component]
pub fn AppealCard(appeal: Appeal) -> impl IntoView {
    let created = timestamp::format_date(&appeal.created_at);

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="text-xl font-semibold text-gray-900 mb-2">{appeal.title}</h3>
                    <p class="text-gray-600 mb-2">{appeal.description}</p>
                </div>
                <StatusBadge status=appeal.status />
            </div>
            <div class="flex flex-wrap gap-2 text-sm text-gray-600">
                <span class="px-2 py-1 bg-gray-100 rounded">{appeal.category.label()}</span>
                {appeal.district.map(|district| view! {
                    <span class="px-2 py-1 bg-gray-100 rounded">{district}</span>
                })}
                <span class="px-2 py-1 bg-gray-100 rounded">{created}</span>
            </div>
            {appeal.ai_summary.map(|summary| view! {
                <div class="mt-4 p-3 bg-blue-50 rounded">
                    <p class="text-sm text-gray-700">
                        <strong>"AI резюме:"</strong>
                        " "
                        {summary}
                    </p>
                </div>
            })}
        </div>
    }
}
