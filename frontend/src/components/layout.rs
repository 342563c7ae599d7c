use crate::{
    components::guard::navigate_to,
    config,
    router::{self, LOGIN_PATH},
    state::auth::{self, use_auth},
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let app_name = config::current().app_name.clone();
    let logout = auth::use_logout();
    let on_logout = move |_| {
        logout.call(());
        navigate_to(LOGIN_PATH);
    };
    let links = move || {
        let state = auth.get();
        let Some(session) = state.session else {
            return ().into_view();
        };
        let own_profile = format!("/profile/{}", session.user_id);
        view! {
            {router::nav_for(session.role)
                .into_iter()
                .map(|item| view! { <a href=item.path class=NAV_LINK_CLASS>{item.label}</a> })
                .collect_view()}
            <a href=own_profile class=NAV_LINK_CLASS>"My Profile"</a>
        }
        .into_view()
    };
    let role_label = move || {
        auth.get()
            .role()
            .map(|role| format!("Role: {}", role))
            .unwrap_or_default()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">{app_name}</h1>
                    <nav class="flex items-center space-x-4">
                        {links}
                        <span class="text-sm text-fg-muted">{role_label}</span>
                        <button on:click=on_logout class=NAV_LINK_CLASS>
                            "Logout"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center p-8 gap-2">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {text.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthStatus;
    use crate::test_support::helpers::{coworker_session, manager_session, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_manager_navigation() {
        let html = render_to_string(move || {
            provide_auth(AuthStatus::Authenticated, Some(manager_session()));
            view! { <Header /> }
        });
        assert!(html.contains("Role: Manager"));
        assert!(html.contains("href=\"/profiles\""));
        assert!(!html.contains("href=\"/absence\""));
        assert!(html.contains("href=\"/profile/u-manager\""));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn header_shows_staff_navigation() {
        let html = render_to_string(move || {
            provide_auth(AuthStatus::Authenticated, Some(coworker_session()));
            view! { <Header /> }
        });
        assert!(html.contains("Role: Coworker"));
        assert!(html.contains("href=\"/absence\""));
        assert!(html.contains("href=\"/profiles/browse\""));
        assert!(!html.contains("href=\"/profiles\""));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(AuthStatus::Authenticated, Some(manager_session()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn feedback_components_render_text() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner text="Loading statistics..." />
                    <ErrorMessage message="Failed to load" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Loading statistics..."));
        assert!(html.contains("Failed to load"));
    }
}
