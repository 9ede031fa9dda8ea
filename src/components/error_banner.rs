//! Inline error messages

use leptos::prelude::*;

/// Red banner shown above a form or list when a request failed
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="mb-4 p-3 bg-red-50 border border-red-200 rounded text-red-700" role="alert">
                    {text}
                </div>
            }
        })
    }
}

/// Validation message under a form field
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="text-red-600 text-sm mt-1">{text}</p> })
}
