//! Registration Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Backend;
use crate::components::{Button, ErrorBanner, FieldError, SiteHeader};
use crate::context::use_app_context;
use crate::models::User;
use crate::router::{Link, Route};
use crate::validation::{RegisterForm, RegisterFormErrors};

pub const REGISTER_FAILED: &str = "Ошибка регистрации";

#[derive(Debug, PartialEq)]
pub enum RegisterOutcome {
    Invalid(RegisterFormErrors),
    Registered(User),
    Failed(String),
}

pub async fn sign_up(backend: &dyn Backend, form: &RegisterForm) -> RegisterOutcome {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => return RegisterOutcome::Invalid(errors),
    };

    match backend.register(&request).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "registered");
            RegisterOutcome::Registered(user)
        }
        Err(err) => RegisterOutcome::Failed(err.message_or(REGISTER_FAILED)),
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary-500";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(RegisterFormErrors::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = RegisterForm {
            email: email.get_untracked(),
            full_name: full_name.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
        };
        let backend = ctx.backend();
        set_error.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let outcome = sign_up(backend.as_ref(), &form).await;
            set_loading.set(false);
            match outcome {
                RegisterOutcome::Invalid(field_errors) => set_errors.set(field_errors),
                RegisterOutcome::Registered(_) => ctx.navigator.push(Route::login()),
                RegisterOutcome::Failed(message) => {
                    set_errors.set(RegisterFormErrors::default());
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <SiteHeader />
            <div class="container mx-auto px-4 py-12 max-w-md">
                <h1 class="text-3xl font-bold text-gray-900 mb-6">"Регистрация"</h1>

                <ErrorBanner message=error />

                <form on:submit=on_submit class="bg-white rounded-lg shadow p-6 space-y-4" novalidate=true>
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 mb-1">"Email *"</label>
                        <input id="email" type="email" autocomplete="email" class=INPUT_CLASS
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev)) />
                        <FieldError message=Signal::derive(move || errors.get().email) />
                    </div>
                    <div>
                        <label for="full_name" class="block text-sm font-medium text-gray-700 mb-1">"Полное имя *"</label>
                        <input id="full_name" autocomplete="name" class=INPUT_CLASS
                            prop:value=full_name
                            on:input=move |ev| set_full_name.set(event_target_value(&ev)) />
                        <FieldError message=Signal::derive(move || errors.get().full_name) />
                    </div>
                    <div>
                        <label for="phone" class="block text-sm font-medium text-gray-700 mb-1">"Телефон (необязательно)"</label>
                        <input id="phone" type="tel" autocomplete="tel" class=INPUT_CLASS
                            prop:value=phone
                            on:input=move |ev| set_phone.set(event_target_value(&ev)) />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">"Пароль *"</label>
                        <input id="password" type="password" autocomplete="new-password" class=INPUT_CLASS
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev)) />
                        <FieldError message=Signal::derive(move || errors.get().password) />
                    </div>
                    <Button submit=true disabled=loading>
                        {move || if loading.get() { "Регистрация..." } else { "Зарегистрироваться" }}
                    </Button>
                </form>

                <p class="mt-4 text-sm text-gray-600">
                    "Уже есть аккаунт? "
                    <Link to=Route::login() class="text-primary-600 hover:underline">"Вход"</Link>
                </p>
            </div>
        </div>
    }
}
