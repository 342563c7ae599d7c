use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    router::{LANDING_PATH, LOGIN_PATH},
    state::auth::{use_auth, AuthState},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Render,
    Redirect(&'static str),
}

/// `None` admits any authenticated role. A role outside the list is sent to the
/// landing page without explanation.
pub fn guard_decision(state: &AuthState, allowed_roles: Option<&[Role]>) -> GuardDecision {
    if state.is_loading() {
        return GuardDecision::Loading;
    }
    let Some(role) = state.is_authenticated().then(|| state.role()).flatten() else {
        return GuardDecision::Redirect(LOGIN_PATH);
    };
    match allowed_roles {
        Some(roles) if !roles.contains(&role) => GuardDecision::Redirect(LANDING_PATH),
        _ => GuardDecision::Render,
    }
}

pub fn navigate_to(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(path) {
            log::warn!("Navigation to {} failed: {:?}", path, err);
        }
    }
}

#[component]
pub fn RequireAuth(
    children: ChildrenFn,
    #[prop(optional)] allowed_roles: Option<&'static [Role]>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| auth.with(|state| guard_decision(state, allowed_roles)));
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate_to(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}
