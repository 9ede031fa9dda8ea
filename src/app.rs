//! Glas Frontend App
//!
//! Wires services into context and switches pages on the current route.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::Protected;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::guard::Access;
use crate::pages::{
    AboutPage, AdminPage, CreateAppealPage, DashboardPage, HomePage, LoginPage, NotFoundPage, RegisterPage,
};
use crate::router::{Navigator, Route};
use crate::session::{self, SessionStore};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let navigator = Navigator::from_location();
    let sessions = SessionStore::new(session::LocalStorage);
    let client = ApiClient::new(&config.api_base_url, sessions.clone());

    provide_context(AppContext::new(Rc::new(client), sessions, navigator));
    provide_context(navigator);
    provide_context(Store::new(AppState::default()));

    move || match navigator.current() {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Login { next } => view! { <LoginPage next=next /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
        Route::Dashboard => view! {
            <Protected access=Access::Authenticated>
                <DashboardPage />
            </Protected>
        }
        .into_any(),
        Route::CreateAppeal => view! {
            <Protected access=Access::Authenticated>
                <CreateAppealPage />
            </Protected>
        }
        .into_any(),
        Route::Admin => view! {
            <Protected access=Access::Admin>
                <AdminPage />
            </Protected>
        }
        .into_any(),
        Route::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
    }
}
