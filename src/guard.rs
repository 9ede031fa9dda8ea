//! Session Guard
//!
//! Decides, at page mount, whether a page may render for the stored session.
//! This is a navigation aid only; the backend authorizes every request.

use crate::router::Route;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
}

pub fn check(access: Access, session: Option<&Session>, requested: &Route) -> GuardOutcome {
    match (access, session) {
        (Access::Public, _) => GuardOutcome::Allow,
        (_, None) => GuardOutcome::Redirect(Route::Login {
            next: Some(requested.href()),
        }),
        (Access::Admin, Some(session)) if !session.is_admin() => GuardOutcome::Redirect(Route::Dashboard),
        (_, Some(_)) => GuardOutcome::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{admin, citizen, session_for};

    #[test]
    fn test_missing_session_redirects_to_login() {
        for (access, route) in [
            (Access::Authenticated, Route::Dashboard),
            (Access::Authenticated, Route::CreateAppeal),
            (Access::Admin, Route::Admin),
        ] {
            assert_eq!(
                check(access, None, &route),
                GuardOutcome::Redirect(Route::Login { next: Some(route.href()) })
            );
        }
    }

    #[test]
    fn test_non_admin_is_sent_to_dashboard() {
        let session = session_for(citizen());
        assert_eq!(
            check(Access::Admin, Some(&session), &Route::Admin),
            GuardOutcome::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn test_allowed_sessions() {
        let citizen = session_for(citizen());
        let admin = session_for(admin());
        assert_eq!(check(Access::Authenticated, Some(&citizen), &Route::Dashboard), GuardOutcome::Allow);
        assert_eq!(check(Access::Admin, Some(&admin), &Route::Admin), GuardOutcome::Allow);
        assert_eq!(check(Access::Public, None, &Route::About), GuardOutcome::Allow);
    }
}
