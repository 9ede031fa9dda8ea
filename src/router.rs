//! Client-side Routing
//!
//! Path-based routes over the History API. The current route lives in a
//! signal; `popstate` keeps it in sync with back/forward navigation.

use leptos::ev;
use leptos::prelude::*;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside the `next` query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    /// `next` is the internal path to return to after signing in
    Login { next: Option<String> },
    Register,
    Dashboard,
    CreateAppeal,
    Admin,
    NotFound(String),
}

impl Route {
    pub fn login() -> Self {
        Route::Login { next: None }
    }

    /// Resolve a location (`pathname` and `search`, with or without `?`)
    pub fn parse(path: &str, query: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/about" => Route::About,
            "/login" => Route::Login {
                next: query_param(query, "next").filter(|next| is_internal_path(next)),
            },
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            "/appeals/create" => Route::CreateAppeal,
            "/admin" => Route::Admin,
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Parse a full href such as `/login?next=%2Fadmin`
    pub fn from_href(href: &str) -> Self {
        match href.split_once('?') {
            Some((path, query)) => Route::parse(path, query),
            None => Route::parse(href, ""),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Login { next: None } => "/login".to_string(),
            Route::Login { next: Some(next) } => {
                format!("/login?next={}", utf8_percent_encode(next, QUERY_VALUE))
            }
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::CreateAppeal => "/appeals/create".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(&value.replace('+', " ")).decode_utf8_lossy().into_owned())
}

/// Same-origin path only: rejects `//host` and absolute URLs
fn is_internal_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

/// Current route plus history manipulation
#[derive(Clone, Copy)]
pub struct Navigator {
    current: RwSignal<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: RwSignal::new(initial),
        }
    }

    /// Start from the browser's location and follow back/forward navigation
    pub fn from_location() -> Self {
        let navigator = Self::new(current_location());
        let current = navigator.current;
        let _ = window_event_listener(ev::popstate, move |_| {
            current.set(current_location());
        });
        navigator
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn current_untracked(&self) -> Route {
        self.current.get_untracked()
    }

    pub fn push(&self, route: Route) {
        tracing::debug!(href = %route.href(), "navigate");
        if let Ok(history) = window().history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.href()));
        }
        self.current.set(route);
    }

    pub fn replace(&self, route: Route) {
        tracing::debug!(href = %route.href(), "redirect");
        if let Ok(history) = window().history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.href()));
        }
        self.current.set(route);
    }

    pub fn back(&self) {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    }
}

fn current_location() -> Route {
    let location = window().location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

/// Anchor that navigates without a page reload
#[component]
pub fn Link(
    to: Route,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let navigator = use_navigator();
    let href = to.href();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: ev::MouseEvent| {
                // Let the browser handle modified clicks (new tab, etc.)
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                navigator.push(to.clone());
            }
        >
            {children()}
        </a>
    }
}
