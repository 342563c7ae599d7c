use leptos::*;
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::{
        guard::{navigate_to, RequireAuth},
        layout::{Layout, LoadingSpinner},
    },
    pages::{
        absence::AbsencePage, dashboard::DashboardPage, feedback::FeedbackPage, login::LoginPage,
        profile::ProfilePage, profiles::{ProfileBrowserPage, ProfilesPage},
    },
    state::auth::{use_auth, AuthProvider, AuthState},
};

pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/dashboard";

pub const MANAGER_ONLY: &[Role] = &[Role::Manager];
pub const STAFF_ONLY: &[Role] = &[Role::Employee, Role::Coworker];

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/profile/:id",
    "/profiles",
    "/profiles/browse",
    "/feedback",
    "/absence",
    "/*any",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/profile/:id",
    "/profiles",
    "/profiles/browse",
    "/feedback",
    "/absence",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/*any"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub allowed_roles: Option<&'static [Role]>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/dashboard",
        allowed_roles: None,
    },
    NavItem {
        label: "Profiles",
        path: "/profiles",
        allowed_roles: Some(MANAGER_ONLY),
    },
    NavItem {
        label: "Browse Profiles",
        path: "/profiles/browse",
        allowed_roles: Some(STAFF_ONLY),
    },
    NavItem {
        label: "Feedback",
        path: "/feedback",
        allowed_roles: None,
    },
    NavItem {
        label: "Absence",
        path: "/absence",
        allowed_roles: Some(STAFF_ONLY),
    },
];

pub fn nav_for(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.allowed_roles.map_or(true, |roles| roles.contains(&role)))
        .collect()
}

/// Where `/` and unknown paths send the visitor; `None` while the session is resolving.
pub fn entry_redirect(state: &AuthState) -> Option<&'static str> {
    if state.is_loading() {
        None
    } else if state.is_authenticated() {
        Some(LANDING_PATH)
    } else {
        Some(LOGIN_PATH)
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=EntryRedirect/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/profile/:id" view=ProtectedProfile/>
                    <Route path="/profiles" view=ProtectedProfiles/>
                    <Route path="/profiles/browse" view=ProtectedProfileBrowser/>
                    <Route path="/feedback" view=ProtectedFeedback/>
                    <Route path="/absence" view=ProtectedAbsence/>
                    <Route path="/*any" view=EntryRedirect/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn EntryRedirect() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = create_memo(move |_| auth.with(entry_redirect));
    create_effect(move |_| {
        if let Some(path) = target.get() {
            navigate_to(path);
        }
    });
    view! { <LoadingSpinner /> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><Layout><DashboardPage/></Layout></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><Layout><ProfilePage/></Layout></RequireAuth> }
}

#[component]
fn ProtectedProfiles() -> impl IntoView {
    view! {
        <RequireAuth allowed_roles=MANAGER_ONLY>
            <Layout><ProfilesPage/></Layout>
        </RequireAuth>
    }
}

#[component]
fn ProtectedProfileBrowser() -> impl IntoView {
    view! {
        <RequireAuth allowed_roles=STAFF_ONLY>
            <Layout><ProfileBrowserPage/></Layout>
        </RequireAuth>
    }
}

#[component]
fn ProtectedFeedback() -> impl IntoView {
    view! { <RequireAuth><Layout><FeedbackPage/></Layout></RequireAuth> }
}

#[component]
fn ProtectedAbsence() -> impl IntoView {
    view! {
        <RequireAuth allowed_roles=STAFF_ONLY>
            <Layout><AbsencePage/></Layout>
        </RequireAuth>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::auth::AuthStatus;
    use std::collections::HashSet;

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS.iter().chain(PUBLIC_ROUTE_PATHS) {
            assert!(all.contains(path), "path missing from ROUTE_PATHS: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn navigation_follows_route_allow_lists() {
        let paths = |role| nav_for(role).iter().map(|item| item.path).collect::<Vec<_>>();
        assert_eq!(paths(Role::Manager), vec!["/dashboard", "/profiles", "/feedback"]);
        assert_eq!(
            paths(Role::Employee),
            vec!["/dashboard", "/profiles/browse", "/feedback", "/absence"]
        );
        assert_eq!(paths(Role::Coworker), paths(Role::Employee));
    }

    #[test]
    fn entry_redirect_depends_on_session() {
        let mut state = AuthState::default();
        assert_eq!(entry_redirect(&state), None);
        state.status = AuthStatus::Unauthenticated;
        assert_eq!(entry_redirect(&state), Some(LOGIN_PATH));
        state.status = AuthStatus::Error;
        assert_eq!(entry_redirect(&state), Some(LOGIN_PATH));
        state.status = AuthStatus::Authenticated;
        state.session = Some(crate::test_support::helpers::employee_session());
        assert_eq!(entry_redirect(&state), Some(LANDING_PATH));
    }
}
