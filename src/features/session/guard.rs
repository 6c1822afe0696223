//! Route guarding. The decision is a pure function of the resolved session
//! state and the requested path; the components below only apply it through
//! the router. Real access control lives on the API; this is UX routing.

use crate::features::session::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Outcome of a navigation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested destination unchanged.
    Allow,
    /// Unauthenticated request for a protected destination.
    RedirectToLogin,
    /// Authenticated request for the sign-in view.
    RedirectToDashboard,
}

/// Decides whether a navigation passes through or redirects. Pure and
/// synchronous over already-resolved session state; performs no I/O.
pub fn decide(is_authenticated: bool, path: &str) -> RouteDecision {
    let on_login = path == paths::LOGIN;
    match (is_authenticated, on_login) {
        (false, false) => RouteDecision::RedirectToLogin,
        (true, true) => RouteDecision::RedirectToDashboard,
        _ => RouteDecision::Allow,
    }
}

/// Wraps a protected view. Renders children only while authenticated and
/// sends unauthenticated visitors to the sign-in view.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();

    let is_authenticated = session.is_authenticated;
    Effect::new(move |_| {
        let decision = decide(is_authenticated.get(), &location.pathname.get());
        if decision == RouteDecision::RedirectToLogin {
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Wraps the sign-in view. An authenticated user is sent to the default
/// landing view instead of seeing the login form again.
#[component]
pub fn RedirectIfSignedIn(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let is_authenticated = session.is_authenticated;
    Effect::new(move |_| {
        if decide(is_authenticated.get(), paths::LOGIN) == RouteDecision::RedirectToDashboard {
            navigate(paths::DASHBOARD, Default::default());
        }
    });

    view! {
        <Show when=move || !is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_protected_destinations_redirect_to_login() {
        for path in [
            paths::DASHBOARD,
            paths::COURSES,
            paths::TEACHERS,
            paths::MESSAGES,
            paths::EXPENSES,
            paths::CONTENT,
            paths::PROFILE,
            "/anything-else",
        ] {
            assert_eq!(decide(false, path), RouteDecision::RedirectToLogin, "{path}");
        }
    }

    #[test]
    fn unauthenticated_login_passes_through() {
        assert_eq!(decide(false, paths::LOGIN), RouteDecision::Allow);
    }

    #[test]
    fn authenticated_login_redirects_to_dashboard() {
        assert_eq!(decide(true, paths::LOGIN), RouteDecision::RedirectToDashboard);
    }

    #[test]
    fn authenticated_destinations_pass_through() {
        for path in [paths::DASHBOARD, paths::COURSES, paths::PROFILE, "/nope"] {
            assert_eq!(decide(true, path), RouteDecision::Allow, "{path}");
        }
    }
}
