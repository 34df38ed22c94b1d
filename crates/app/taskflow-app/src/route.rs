//! Client-side routes and the auth guard in front of them.

use taskflow_auth_core::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Auth,
    Dashboard,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Route::Index,
            "/auth" => Route::Auth,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Route::Index => "/",
            Route::Auth => "/auth",
            Route::Dashboard => "/dashboard",
            Route::NotFound => "/404",
        }
    }

    /// What to do with this route for the given auth state.
    pub fn guard(self, state: &AuthState) -> RouteDecision {
        match (self, state) {
            (Route::NotFound, _) => RouteDecision::Render,
            (_, AuthState::Loading) => RouteDecision::Loading,
            (Route::Dashboard, AuthState::SignedOut) => RouteDecision::Redirect(Route::Auth),
            (Route::Index | Route::Auth, AuthState::SignedIn(_)) => {
                RouteDecision::Redirect(Route::Dashboard)
            }
            _ => RouteDecision::Render,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Auth is still resolving; show a spinner and fetch nothing.
    Loading,
    Redirect(Route),
    Render,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::session;
    use taskflow_auth_core::Role;

    #[test]
    fn parses_paths() {
        assert_eq!(Route::from_path("/"), Route::Index);
        assert_eq!(Route::from_path(""), Route::Index);
        assert_eq!(Route::from_path("/auth"), Route::Auth);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard?tab=1"), Route::Dashboard);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn urls_round_trip_for_real_pages() {
        for route in [Route::Index, Route::Auth, Route::Dashboard] {
            assert_eq!(Route::from_path(route.url()), route);
        }
    }

    #[test]
    fn signed_out_dashboard_redirects_to_auth() {
        assert_eq!(
            Route::Dashboard.guard(&AuthState::SignedOut),
            RouteDecision::Redirect(Route::Auth)
        );
    }

    #[test]
    fn loading_blocks_every_page_but_not_found() {
        for route in [Route::Index, Route::Auth, Route::Dashboard] {
            assert_eq!(route.guard(&AuthState::Loading), RouteDecision::Loading);
        }
        assert_eq!(Route::NotFound.guard(&AuthState::Loading), RouteDecision::Render);
    }

    #[test]
    fn signed_in_user_skips_landing_and_sign_in() {
        let state = AuthState::SignedIn(session("u1", Role::User));
        assert_eq!(Route::Index.guard(&state), RouteDecision::Redirect(Route::Dashboard));
        assert_eq!(Route::Auth.guard(&state), RouteDecision::Redirect(Route::Dashboard));
        assert_eq!(Route::Dashboard.guard(&state), RouteDecision::Render);
    }

    #[test]
    fn signed_out_user_sees_landing_and_sign_in() {
        assert_eq!(Route::Index.guard(&AuthState::SignedOut), RouteDecision::Render);
        assert_eq!(Route::Auth.guard(&AuthState::SignedOut), RouteDecision::Render);
    }
}
