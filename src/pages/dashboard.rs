//! Dashboard Page
//!
//! The signed-in user's appeals, rendered as returned by the backend.

use leptos::prelude::*;

use crate::components::{AppealCard, Button, ButtonVariant, ErrorBanner, SiteHeader};
use crate::context::use_app_context;
use crate::models::{Appeal, AppealList};
use crate::query::{use_query, QueryKey, QueryState};
use crate::router::{Link, Route};
use crate::store::{sign_out, store_session, use_app_store};

pub const LOAD_FAILED: &str = "Не удалось загрузить обращения";

/// What the list area shows for a given query state
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardBody {
    Loading,
    Failed(String),
    Empty,
    Appeals(Vec<Appeal>),
}

impl DashboardBody {
    pub fn from_state(state: &QueryState<AppealList>) -> Self {
        match state {
            QueryState::Loading => DashboardBody::Loading,
            QueryState::Failed(err) => DashboardBody::Failed(err.message_or(LOAD_FAILED)),
            QueryState::Ready(list) if list.items.is_empty() => DashboardBody::Empty,
            QueryState::Ready(list) => DashboardBody::Appeals(list.items.clone()),
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let backend = ctx.backend();
    let appeals = use_query(QueryKey::Appeals, move || {
        let backend = backend.clone();
        async move { backend.list_appeals().await }
    });

    let full_name = move || store_session(&store).map(|session| session.user.full_name).unwrap_or_default();
    let is_admin = move || store_session(&store).is_some_and(|session| session.is_admin());
    let logout = Callback::new(move |_: ()| {
        sign_out(&store, &ctx);
        ctx.navigator.push(Route::Home);
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <SiteHeader>
                <span class="text-gray-700">{full_name}</span>
                <Show when=is_admin>
                    <Link to=Route::Admin>
                        <Button variant=ButtonVariant::Outline>"Админ-панель"</Button>
                    </Link>
                </Show>
                <Button variant=ButtonVariant::Ghost on_click=logout>"Выход"</Button>
            </SiteHeader>

            <div class="container mx-auto px-4 py-8">
                <div class="flex justify-between items-center mb-6">
                    <h1 class="text-3xl font-bold text-gray-900">"Мои обращения"</h1>
                    <Link to=Route::CreateAppeal>
                        <Button>"Создать обращение"</Button>
                    </Link>
                </div>

                {move || match DashboardBody::from_state(&appeals.get()) {
                    DashboardBody::Loading => view! {
                        <div class="text-center py-12">"Загрузка..."</div>
                    }.into_any(),
                    DashboardBody::Failed(message) => view! {
                        <ErrorBanner message=Signal::derive(move || Some(message.clone())) />
                    }.into_any(),
                    DashboardBody::Empty => view! {
                        <div class="bg-white rounded-lg shadow p-12 text-center">
                            <p class="text-gray-600 mb-4">"У вас пока нет обращений"</p>
                            <Link to=Route::CreateAppeal>
                                <Button>"Создать первое обращение"</Button>
                            </Link>
                        </div>
                    }.into_any(),
                    DashboardBody::Appeals(items) => view! {
                        <div class="grid gap-4">
                            {items.into_iter().map(|appeal| view! { <AppealCard appeal=appeal /> }).collect_view()}
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::AppealStatus;
    use crate::test_support::{appeal, detail_error};

    fn ready(items: Vec<Appeal>) -> QueryState<AppealList> {
        let total = items.len() as u64;
        QueryState::Ready(AppealList {
            items,
            total,
            page: None,
            pages: None,
        })
    }

    #[test]
    fn test_empty_list_shows_call_to_action() {
        assert_eq!(DashboardBody::from_state(&ready(Vec::new())), DashboardBody::Empty);
    }

    #[test]
    fn test_resolved_appeal_gets_green_badge() {
        let body = DashboardBody::from_state(&ready(vec![appeal(1, AppealStatus::Resolved)]));
        let DashboardBody::Appeals(items) = body else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status.label(), "Решено");
        assert_eq!(items[0].status.badge_class(), "bg-green-100 text-green-800");
    }

    #[test]
    fn test_loading_and_failure() {
        assert_eq!(DashboardBody::from_state(&QueryState::Loading), DashboardBody::Loading);
        assert_eq!(
            DashboardBody::from_state(&QueryState::Failed(detail_error(401, "Could not validate credentials"))),
            DashboardBody::Failed("Could not validate credentials".to_string())
        );
        assert_eq!(
            DashboardBody::from_state(&QueryState::Failed(ApiError::Network("offline".to_string()))),
            DashboardBody::Failed(LOAD_FAILED.to_string())
        );
    }

    #[test]
    fn test_list_keeps_backend_order() {
        let body = DashboardBody::from_state(&ready(vec![
            appeal(9, AppealStatus::Pending),
            appeal(2, AppealStatus::InProgress),
        ]));
        let DashboardBody::Appeals(items) = body else {
            panic!("expected a list");
        };
        assert_eq!(items.iter().map(|a| a.id).collect::<Vec<_>>(), vec![9, 2]);
    }
}
