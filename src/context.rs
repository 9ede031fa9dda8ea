//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::Backend;
use crate::query::QueryCache;
use crate::router::Navigator;
use crate::session::SessionStore;

/// App-wide services. The non-`Send` pieces live in local stored values.
#[derive(Clone, Copy)]
pub struct AppContext {
    backend: StoredValue<Rc<dyn Backend>, LocalStorage>,
    sessions: StoredValue<SessionStore, LocalStorage>,
    queries: StoredValue<QueryCache, LocalStorage>,
    pub navigator: Navigator,
}

impl AppContext {
    pub fn new(backend: Rc<dyn Backend>, sessions: SessionStore, navigator: Navigator) -> Self {
        Self {
            backend: StoredValue::new_local(backend),
            sessions: StoredValue::new_local(sessions),
            queries: StoredValue::new_local(QueryCache::default()),
            navigator,
        }
    }

    pub fn backend(&self) -> Rc<dyn Backend> {
        self.backend.get_value()
    }

    pub fn sessions(&self) -> SessionStore {
        self.sessions.get_value()
    }

    pub fn queries(&self) -> QueryCache {
        self.queries.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
