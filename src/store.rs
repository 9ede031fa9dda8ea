//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::AppContext;
use crate::session::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Session of the signed-in user, refreshed on every guarded mount
    pub session: Option<Session>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Reactive read of the current session
pub fn store_session(store: &AppStore) -> Option<Session> {
    store.session().get()
}

pub fn store_set_session(store: &AppStore, session: Option<Session>) {
    *store.session().write() = session;
}

/// Forget the session everywhere: storage, app state and cached queries
pub fn sign_out(store: &AppStore, ctx: &AppContext) {
    ctx.sessions().clear();
    ctx.queries().clear();
    store_set_session(store, None);
    tracing::info!("signed out");
}
