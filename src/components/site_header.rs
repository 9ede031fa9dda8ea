//! Site Header
//!
//! Logo linking home, with an optional right-hand slot for navigation.

use leptos::prelude::*;

use crate::router::{Link, Route};

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-primary-600 rounded-lg flex items-center justify-center">
            <span class="text-white text-xl font-bold">"Г"</span>
        </div>
        <span class="text-2xl font-bold text-gray-900">"Глас"</span>
    }
}

#[component]
pub fn SiteHeader(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <Link to=Route::Home class="flex items-center space-x-2">
                    <Logo />
                </Link>
                {children.map(|children| view! {
                    <nav class="flex items-center space-x-4">{children()}</nav>
                })}
            </div>
        </header>
    }
}
