//! Login Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Backend;
use crate::components::{Button, ErrorBanner, FieldError, SiteHeader};
use crate::context::use_app_context;
use crate::query::QueryCache;
use crate::router::{Link, Route};
use crate::session::{Session, SessionStore};
use crate::store::{store_set_session, use_app_store};
use crate::validation::{LoginForm, LoginFormErrors};

pub const LOGIN_FAILED: &str = "Ошибка входа";

#[derive(Debug, PartialEq)]
pub enum LoginOutcome {
    Invalid(LoginFormErrors),
    SignedIn(Session),
    Failed(String),
}

impl LoginOutcome {
    /// Field messages to show after this attempt; cleared unless the form was invalid
    pub fn field_errors(&self) -> LoginFormErrors {
        match self {
            LoginOutcome::Invalid(errors) => errors.clone(),
            _ => LoginFormErrors::default(),
        }
    }
}

/// Validate, call `POST /auth/login`, and persist the session on success.
///
/// Cached query results belong to the previous session and are dropped.
pub async fn sign_in(
    backend: &dyn Backend,
    sessions: &SessionStore,
    queries: &QueryCache,
    form: &LoginForm,
) -> LoginOutcome {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => return LoginOutcome::Invalid(errors),
    };

    match backend.login(&request).await {
        Ok(response) => match sessions.save(&response) {
            Ok(session) => {
                queries.clear();
                tracing::info!(user_id = session.user.id, "signed in");
                LoginOutcome::SignedIn(session)
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not persist session");
                LoginOutcome::Failed(LOGIN_FAILED.to_string())
            }
        },
        Err(err) => LoginOutcome::Failed(err.message_or(LOGIN_FAILED)),
    }
}

#[component]
pub fn LoginPage(next: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(LoginFormErrors::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let next = StoredValue::new(next);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let backend = ctx.backend();
        let sessions = ctx.sessions();
        let queries = ctx.queries();
        set_error.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let outcome = sign_in(backend.as_ref(), &sessions, &queries, &form).await;
            set_loading.set(false);
            set_errors.set(outcome.field_errors());
            match outcome {
                LoginOutcome::Invalid(_) => {}
                LoginOutcome::SignedIn(session) => {
                    store_set_session(&store, Some(session));
                    let target = next
                        .get_value()
                        .map(|href| Route::from_href(&href))
                        .unwrap_or(Route::Dashboard);
                    ctx.navigator.push(target);
                }
                LoginOutcome::Failed(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <SiteHeader />
            <div class="container mx-auto px-4 py-12 max-w-md">
                <h1 class="text-3xl font-bold text-gray-900 mb-6">"Вход"</h1>

                <ErrorBanner message=error />

                <form on:submit=on_submit class="bg-white rounded-lg shadow p-6 space-y-4" novalidate=true>
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 mb-1">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary-500"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || errors.get().email) />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">"Пароль"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary-500"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || errors.get().password) />
                    </div>
                    <Button submit=true disabled=loading>
                        {move || if loading.get() { "Вход..." } else { "Войти" }}
                    </Button>
                </form>

                <p class="mt-4 text-sm text-gray-600">
                    "Нет аккаунта? "
                    <Link to=Route::Register class="text-primary-600 hover:underline">"Регистрация"</Link>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::{AppealList, AppealStatus};
    use crate::query::{QueryKey, QueryState};
    use crate::session::MemoryStorage;
    use crate::test_support::{admin, appeal, citizen, detail_error, token_response, MockBackend};

    fn filled_form() -> LoginForm {
        LoginForm {
            email: "citizen@example.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_persists_session() {
        let backend = MockBackend::default();
        *backend.login_result.borrow_mut() = Some(Ok(token_response(citizen())));
        let sessions = SessionStore::new(MemoryStorage::default());

        let outcome = sign_in(&backend, &sessions, &QueryCache::default(), &filled_form()).await;

        let session = match outcome {
            LoginOutcome::SignedIn(session) => session,
            other => panic!("expected sign-in, got {other:?}"),
        };
        assert_eq!(session.user.full_name, "Анна Смирнова");
        assert_eq!(sessions.load(), Some(session));
    }

    #[tokio::test]
    async fn test_sign_in_shows_server_detail() {
        let backend = MockBackend::default();
        *backend.login_result.borrow_mut() = Some(Err(detail_error(401, "Incorrect email or password")));
        let sessions = SessionStore::new(MemoryStorage::default());

        let outcome = sign_in(&backend, &sessions, &QueryCache::default(), &filled_form()).await;

        assert_eq!(outcome, LoginOutcome::Failed("Incorrect email or password".to_string()));
        assert!(sessions.load().is_none());
    }

    #[tokio::test]
    async fn test_server_failure_clears_stale_field_errors() {
        let backend = MockBackend::default();
        let sessions = SessionStore::new(MemoryStorage::default());
        let queries = QueryCache::default();

        let first = sign_in(&backend, &sessions, &queries, &LoginForm::default()).await;
        assert_ne!(first.field_errors(), LoginFormErrors::default());

        *backend.login_result.borrow_mut() = Some(Err(detail_error(401, "Incorrect email or password")));
        let second = sign_in(&backend, &sessions, &queries, &filled_form()).await;
        assert!(matches!(second, LoginOutcome::Failed(_)));
        assert_eq!(second.field_errors(), LoginFormErrors::default());
    }

    #[tokio::test]
    async fn test_sign_in_drops_previous_users_data() {
        let queries = QueryCache::default();
        queries.insert(
            QueryKey::Appeals,
            AppealList {
                items: vec![appeal(7, AppealStatus::Pending)],
                total: 1,
                page: None,
                pages: None,
            },
        );
        let backend = MockBackend::default();
        *backend.login_result.borrow_mut() = Some(Ok(token_response(admin())));
        let sessions = SessionStore::new(MemoryStorage::default());

        let outcome = sign_in(&backend, &sessions, &queries, &filled_form()).await;

        assert!(matches!(outcome, LoginOutcome::SignedIn(_)));
        assert_eq!(queries.initial_state::<AppealList>(&QueryKey::Appeals), QueryState::Loading);
        let offline = ApiError::Network("offline".to_string());
        assert_eq!(
            queries.settle::<AppealList>(QueryKey::Appeals, Err(offline.clone())),
            QueryState::Failed(offline)
        );
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_cache() {
        let queries = QueryCache::default();
        queries.insert(QueryKey::Analytics { days: 30 }, 1u32);
        let backend = MockBackend::default();
        *backend.login_result.borrow_mut() = Some(Err(detail_error(401, "Incorrect email or password")));
        let sessions = SessionStore::new(MemoryStorage::default());

        sign_in(&backend, &sessions, &queries, &filled_form()).await;

        assert_eq!(queries.get::<u32>(&QueryKey::Analytics { days: 30 }), Some(1));
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_request() {
        let backend = MockBackend::default();
        let sessions = SessionStore::new(MemoryStorage::default());

        let outcome = sign_in(&backend, &sessions, &QueryCache::default(), &LoginForm::default()).await;

        assert!(matches!(outcome, LoginOutcome::Invalid(_)));
        assert_eq!(backend.calls.get(), 0);
    }
}
