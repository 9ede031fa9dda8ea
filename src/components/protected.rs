//! Guarded Page Wrapper
//!
//! Runs the session guard when a page mounts. Children render only when the
//! stored session satisfies the required access; otherwise the user is
//! redirected and nothing is rendered.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::guard::{self, Access, GuardOutcome};
use crate::store::{store_set_session, use_app_store};

#[component]
pub fn Protected(access: Access, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let session = ctx.sessions().load();

    match guard::check(access, session.as_ref(), &ctx.navigator.current_untracked()) {
        GuardOutcome::Allow => {
            store_set_session(&store, session);
            children().into_any()
        }
        GuardOutcome::Redirect(route) => {
            tracing::info!(?access, href = %route.href(), "guard redirect");
            let navigator = ctx.navigator;
            Effect::new(move |_| navigator.replace(route.clone()));
            ().into_any()
        }
    }
}
