use leptos::prelude::*;

use crate::components::{Button, SiteHeader};
use crate::router::{Link, Route};

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <SiteHeader />
            <div class="container mx-auto px-4 py-20 text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Страница не найдена"</h1>
                <p class="text-gray-600 mb-8">{format!("Адрес {path} не существует.")}</p>
                <Link to=Route::Home>
                    <Button>"На главную"</Button>
                </Link>
            </div>
        </div>
    }
}
