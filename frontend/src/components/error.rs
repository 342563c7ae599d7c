use leptos::*;

/// Banner for a store's current error; renders nothing while the signal is empty.
#[component]
pub fn InlineErrorMessage(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2 flex items-center justify-between gap-3"
                role="alert"
            >
                <span class="font-bold">{move || error.get().unwrap_or_default()}</span>
                {on_retry.map(|retry| view! {
                    <button
                        type="button"
                        class="text-sm underline"
                        on:click=move |_| retry.call(())
                    >
                        "Try again"
                    </button>
                })}
            </div>
        </Show>
    }
}
