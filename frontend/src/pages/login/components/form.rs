use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-bg sm:text-sm";

#[component]
pub fn LoginForm(
    #[prop(into)] app_name: String,
    email: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<String>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{app_name}</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Sign in to your account"</p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="sr-only">"Email address"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class=INPUT_CLASS
                            placeholder="Email address"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                email.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required
                            class=INPUT_CLASS
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                password.set(target.value());
                            }
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_renders_fields_and_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some("Invalid credentials".to_string()));
            view! {
                <LoginForm
                    app_name="NEWWORK"
                    email=create_rw_signal(String::new())
                    password=create_rw_signal(String::new())
                    error=error.into()
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("NEWWORK"));
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("Sign in"));
    }

    #[test]
    fn pending_form_shows_progress_label() {
        let html = render_to_string(move || {
            view! {
                <LoginForm
                    app_name="NEWWORK"
                    email=create_rw_signal(String::new())
                    password=create_rw_signal(String::new())
                    error=Signal::derive(|| None)
                    pending=Signal::derive(|| true)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Signing in..."));
    }
}
