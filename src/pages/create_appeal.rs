//! Appeal Creation Page
//!
//! Form for submitting a new appeal. Local length checks run first; anything
//! the backend rejects is shown inline and the user stays on the form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Backend;
use crate::components::{Button, ButtonVariant, ErrorBanner, FieldError};
use crate::context::use_app_context;
use crate::models::{Appeal, AppealCategory};
use crate::query::QueryKey;
use crate::router::Route;
use crate::validation::{AppealForm, AppealFormErrors};

pub const CREATE_FAILED: &str = "Ошибка создания обращения";

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Blocked locally, nothing was sent
    Invalid(AppealFormErrors),
    Created(Appeal),
    Failed(String),
}

pub async fn submit_appeal(backend: &dyn Backend, form: &AppealForm) -> SubmitOutcome {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    match backend.create_appeal(&payload).await {
        Ok(appeal) => {
            tracing::info!(appeal_id = appeal.id, category = appeal.category.as_str(), "appeal created");
            SubmitOutcome::Created(appeal)
        }
        Err(err) => SubmitOutcome::Failed(err.message_or(CREATE_FAILED)),
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary-500";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";

#[component]
pub fn CreateAppealPage() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (latitude, set_latitude) = signal(String::new());
    let (longitude, set_longitude) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (errors, set_errors) = signal(AppealFormErrors::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = AppealForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            latitude: latitude.get_untracked(),
            longitude: longitude.get_untracked(),
            address: address.get_untracked(),
        };
        // Field errors are reported before anything async starts
        if let Err(field_errors) = form.validate() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(AppealFormErrors::default());
        set_error.set(None);
        set_loading.set(true);

        let backend = ctx.backend();
        spawn_local(async move {
            let outcome = submit_appeal(backend.as_ref(), &form).await;
            set_loading.set(false);
            match outcome {
                SubmitOutcome::Created(_) => {
                    ctx.queries().invalidate(&QueryKey::Appeals);
                    ctx.navigator.push(Route::Dashboard);
                }
                SubmitOutcome::Failed(message) => set_error.set(Some(message)),
                SubmitOutcome::Invalid(field_errors) => set_errors.set(field_errors),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="container mx-auto px-4 py-8 max-w-2xl">
                <h1 class="text-3xl font-bold text-gray-900 mb-6">"Создать обращение"</h1>

                <ErrorBanner message=error />

                <form on:submit=on_submit class="bg-white rounded-lg shadow p-6 space-y-4" novalidate=true>
                    <div>
                        <label for="title" class=LABEL_CLASS>"Заголовок *"</label>
                        <input id="title" class=INPUT_CLASS
                            prop:value=title
                            on:input=move |ev| set_title.set(event_target_value(&ev)) />
                        <FieldError message=Signal::derive(move || errors.get().title) />
                    </div>

                    <div>
                        <label for="description" class=LABEL_CLASS>"Описание проблемы *"</label>
                        <textarea id="description" rows=6 class=INPUT_CLASS
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                        <FieldError message=Signal::derive(move || errors.get().description) />
                    </div>

                    <div>
                        <label for="category" class=LABEL_CLASS>
                            "Категория (необязательно, будет определена автоматически)"
                        </label>
                        <select id="category" class=INPUT_CLASS
                            prop:value=category
                            on:change=move |ev| set_category.set(event_target_value(&ev))
                        >
                            <option value="">"Автоматически"</option>
                            {AppealCategory::ALL.into_iter().map(|option| view! {
                                <option value=option.as_str()>{option.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label for="latitude" class=LABEL_CLASS>"Широта (необязательно)"</label>
                            <input id="latitude" type="text" inputmode="decimal" class=INPUT_CLASS
                                prop:value=latitude
                                on:input=move |ev| set_latitude.set(event_target_value(&ev)) />
                            <FieldError message=Signal::derive(move || errors.get().latitude) />
                        </div>
                        <div>
                            <label for="longitude" class=LABEL_CLASS>"Долгота (необязательно)"</label>
                            <input id="longitude" type="text" inputmode="decimal" class=INPUT_CLASS
                                prop:value=longitude
                                on:input=move |ev| set_longitude.set(event_target_value(&ev)) />
                            <FieldError message=Signal::derive(move || errors.get().longitude) />
                        </div>
                    </div>

                    <div>
                        <label for="address" class=LABEL_CLASS>"Адрес (необязательно)"</label>
                        <input id="address" class=INPUT_CLASS
                            prop:value=address
                            on:input=move |ev| set_address.set(event_target_value(&ev)) />
                    </div>

                    <div class="flex space-x-4">
                        <Button submit=true disabled=loading>
                            {move || if loading.get() { "Создание..." } else { "Создать обращение" }}
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=Callback::new(move |_: ()| ctx.navigator.back())
                        >
                            "Отмена"
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppealStatus;
    use crate::test_support::{appeal, detail_error, MockBackend};
    use crate::validation::{NOT_A_NUMBER, TITLE_TOO_SHORT};

    fn form(title: &str) -> AppealForm {
        AppealForm {
            title: title.to_string(),
            description: "Во дворе третий день не вывозят мусор".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_short_title_blocks_without_request() {
        let backend = MockBackend::default();

        let outcome = submit_appeal(&backend, &form("Мусо")).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected local validation failure");
        };
        assert_eq!(errors.title, Some(TITLE_TOO_SHORT));
        assert_eq!(backend.calls.get(), 0);
        assert!(backend.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_server_detail_is_shown() {
        let backend = MockBackend::default();
        *backend.create_result.borrow_mut() = Some(Err(detail_error(422, "X")));

        let outcome = submit_appeal(&backend, &form("Мусор во дворе")).await;

        assert_eq!(outcome, SubmitOutcome::Failed("X".to_string()));
        assert_eq!(backend.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_created_appeal_is_returned() {
        let backend = MockBackend::default();
        *backend.create_result.borrow_mut() = Some(Ok(appeal(12, AppealStatus::Pending)));

        let outcome = submit_appeal(&backend, &form("Мусор во дворе")).await;

        assert_eq!(outcome, SubmitOutcome::Created(appeal(12, AppealStatus::Pending)));
        let sent = backend.created.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Мусор во дворе");
        assert_eq!(sent[0].category, None);
    }

    #[tokio::test]
    async fn test_typed_coordinates_are_validated() {
        let backend = MockBackend::default();
        let garbled = AppealForm {
            latitude: "север".to_string(),
            ..form("Мусор во дворе")
        };

        let SubmitOutcome::Invalid(errors) = submit_appeal(&backend, &garbled).await else {
            panic!("expected local validation failure");
        };
        assert_eq!(errors.latitude, Some(NOT_A_NUMBER));
        assert_eq!(backend.calls.get(), 0);

        *backend.create_result.borrow_mut() = Some(Ok(appeal(13, AppealStatus::Pending)));
        let comma = AppealForm {
            latitude: "55,7558".to_string(),
            longitude: "37.6173".to_string(),
            ..form("Мусор во дворе")
        };
        submit_appeal(&backend, &comma).await;
        let sent = backend.created.borrow();
        assert_eq!(sent[0].latitude, Some(55.7558));
        assert_eq!(sent[0].longitude, Some(37.6173));
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        let backend = MockBackend::default();

        let outcome = submit_appeal(&backend, &form("Мусор во дворе")).await;

        assert_eq!(outcome, SubmitOutcome::Failed(CREATE_FAILED.to_string()));
    }
}
