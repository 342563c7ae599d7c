use crate::{
    api::Feedback,
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
    pages::feedback::utils::{can_delete, format_timestamp, validate_body, MAX_FEEDBACK_LEN},
    state::{auth::Session, feedback::is_temporary},
};
use leptos::*;
use web_sys::HtmlTextAreaElement;

#[component]
pub fn FeedbackItem(
    feedback: Feedback,
    viewer: Option<Session>,
    on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let pending = is_temporary(&feedback.id);
    let deletable = viewer
        .as_ref()
        .map(|viewer| can_delete(&feedback, viewer))
        .unwrap_or(false);
    let id = feedback.id.clone();
    view! {
        <li class="bg-surface-elevated shadow rounded-lg p-4 space-y-2" class:opacity-60=pending>
            <p class="text-fg whitespace-pre-line">{feedback.body.clone()}</p>
            <div class="flex items-center justify-between text-xs text-fg-muted">
                <span>{format_timestamp(&feedback.created_at)}</span>
                {pending.then(|| view! { <span>"Saving..."</span> })}
                {on_delete.filter(|_| deletable).map(|on_delete| {
                    let id = id.clone();
                    view! {
                        <button
                            type="button"
                            class="text-status-error-text hover:underline"
                            on:click=move |_| on_delete.call(id.clone())
                        >
                            "Delete"
                        </button>
                    }
                })}
            </div>
        </li>
    }
}

#[component]
pub fn FeedbackList(
    #[prop(into)] items: Signal<Vec<Feedback>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] viewer: Option<Session>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let is_empty = move || {
        !loading.get() && error.with(Option::is_none) && items.with(Vec::is_empty)
    };
    view! {
        <div class="space-y-3">
            <InlineErrorMessage error=error />
            <Show when=move || loading.get() && items.with(Vec::is_empty)>
                <LoadingSpinner text="Loading feedback..." />
            </Show>
            <Show
                when=is_empty
                fallback=move || {
                    let viewer = viewer.clone();
                    view! {
                        <ul class="space-y-3">
                            <For
                                each=move || items.get()
                                key=|feedback| feedback.id.clone()
                                children=move |feedback| {
                                    view! {
                                        <FeedbackItem
                                            feedback=feedback
                                            viewer=viewer.clone()
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        </ul>
                    }
                }
            >
                <EmptyState
                    title="No Feedback Yet"
                    description="When your colleagues leave feedback, it will appear here."
                />
            </Show>
        </div>
    }
}

#[component]
pub fn FeedbackForm(
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let body = create_rw_signal(String::new());
    let local_error = create_rw_signal(None::<String>);
    let remaining = move || MAX_FEEDBACK_LEN as i64 - body.with(|b| b.chars().count() as i64);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match validate_body(&body.get_untracked()) {
            Ok(text) => {
                local_error.set(None);
                body.set(String::new());
                on_submit.call(text);
            }
            Err(msg) => local_error.set(Some(msg)),
        }
    };

    view! {
        <form class="space-y-2" on:submit=submit>
            <label for="feedback-body" class="block text-sm font-medium text-fg">
                "Leave feedback"
            </label>
            <textarea
                id="feedback-body"
                rows="4"
                class="block w-full rounded-md border border-border p-2 text-fg"
                placeholder="Share something specific and constructive"
                prop:value=move || body.get()
                on:input=move |ev| {
                    let target = event_target::<HtmlTextAreaElement>(&ev);
                    body.set(target.value());
                }
            ></textarea>
            <div class="flex items-center justify-between">
                <span class="text-xs text-fg-muted">{move || format!("{} characters left", remaining())}</span>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                >
                    "Submit feedback"
                </button>
            </div>
            <InlineErrorMessage error=local_error />
        </form>
    }
}
