//! About Page
//!
//! Static copy, authored in Markdown.

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, SiteHeader};
use crate::markdown::render_markdown;
use crate::router::{Link, Route};

const ABOUT: &str = r#"
# О проекте Глас

## Миссия проекта

**Глас** — это интеллектуальная мультиплатформенная система для сбора, анализа и управления обращениями граждан.
Система использует искусственный интеллект для понимания текстов, фото и голосовых сообщений, автоматически
маршрутизирует их по ответственным отделам городской администрации и визуализирует результаты.

Главная цель — сделать взаимодействие между жителями и властью прозрачным, быстрым и эффективным.

## Наши ценности

- **Прозрачность:** каждый житель видит, что его обращение не пропало, а действительно рассматривается и решается
- **Доступность:** простой интерфейс для любого возраста и уровня цифровой грамотности
- **Этичный ИИ:** никакой слежки, только помощь и аналитика, направленные на благо города
- **Эффективность:** городские службы получают структурированные данные, аналитические отчёты и приоритеты проблем

## Возможности системы

### Для граждан

- Создание обращений (текст, фото, голос)
- Отслеживание статуса обращения
- Геолокация проблем на карте
- Уведомления о статусе
- Оценка качества решения

### Для администраторов

- Дашборд с аналитикой
- Управление обращениями
- Автоматическая классификация
- Экспорт отчетов
- Тепловые карты проблем

## Технологии

Проект построен на современных технологиях:

- **Frontend:** Rust, Leptos, WebAssembly
- **Backend:** FastAPI, PostgreSQL, Redis
- **AI/NLP:** OpenAI API, spaCy, Transformers
- **Инфраструктура:** Docker, Kubernetes
"#;

#[component]
pub fn AboutPage() -> impl IntoView {
    let content = render_markdown(ABOUT);

    view! {
        <div class="min-h-screen bg-gray-50">
            <SiteHeader />
            <div class="container mx-auto px-4 py-12 max-w-4xl">
                <article class="prose prose-lg max-w-none" inner_html=content></article>
                <div class="mt-8">
                    <Link to=Route::Register>
                        <Button size=ButtonSize::Large>"Начать использовать"</Button>
                    </Link>
                </div>
            </div>
        </div>
    }
}
