//! Landing Page

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, SiteHeader};
use crate::router::{Link, Route};

const FEATURES: &[(&str, &str, &str)] = &[
    ("🤖", "Искусственный интеллект", "Автоматическая классификация и анализ обращений с помощью AI"),
    ("📍", "Геолокация", "Точное определение местоположения проблем на карте города"),
    ("📊", "Аналитика", "Детальная статистика и визуализация данных для управленцев"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-gradient-to-b from-blue-50 to-white">
            <SiteHeader>
                <Link to=Route::login() class="text-gray-600 hover:text-gray-900">"Вход"</Link>
                <Link to=Route::Register>
                    <Button>"Регистрация"</Button>
                </Link>
            </SiteHeader>

            <section class="container mx-auto px-4 py-20 text-center">
                <h1 class="text-5xl font-bold text-gray-900 mb-6">"Глас — голос города"</h1>
                <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                    "Умный гражданский ИИ-ассистент для сбора, анализа и управления обращениями граждан. "
                    "Сделайте свой город лучше вместе с нами."
                </p>
                <div class="flex justify-center space-x-4">
                    <Link to=Route::Register>
                        <Button size=ButtonSize::Large>"Создать обращение"</Button>
                    </Link>
                    <Link to=Route::About>
                        <Button size=ButtonSize::Large variant=ButtonVariant::Outline>"Узнать больше"</Button>
                    </Link>
                </div>
            </section>

            <section class="container mx-auto px-4 py-16">
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|(icon, title, text)| view! {
                        <div class="bg-white p-6 rounded-lg shadow-md">
                            <div class="w-12 h-12 bg-primary-100 rounded-lg flex items-center justify-center mb-4">
                                <span class="text-2xl">{*icon}</span>
                            </div>
                            <h3 class="text-xl font-semibold mb-2">{*title}</h3>
                            <p class="text-gray-600">{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <footer class="bg-gray-900 text-white py-8 mt-20">
                <div class="container mx-auto px-4 text-center">
                    <p>"© 2024 Глас. Все права защищены."</p>
                </div>
            </footer>
        </main>
    }
}
