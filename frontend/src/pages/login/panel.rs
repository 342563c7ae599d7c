use crate::{
    components::guard::navigate_to,
    config,
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
    router::LANDING_PATH,
    state::auth::use_auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    // Covers both a fresh sign-in and arriving here with a restored session.
    create_effect(move |_| {
        if auth.with(|state| state.is_authenticated()) {
            navigate_to(LANDING_PATH);
        }
    });

    // Session-level messages (expired token, rejected restore) show until the user types.
    let error = Signal::derive(move || {
        vm.error
            .get()
            .or_else(|| auth.with(|state| state.error.clone()))
    });

    view! {
        <LoginForm
            app_name=config::current().app_name.clone()
            email=vm.email
            password=vm.password
            error=error
            pending=pending.into()
            on_submit=Callback::new(move |ev: SubmitEvent| {
                ev.prevent_default();
                vm.submit();
            })
        />
    }
}
