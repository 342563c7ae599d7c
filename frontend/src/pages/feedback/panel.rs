use crate::{
    pages::feedback::components::FeedbackList,
    state::feedback::{use_feedback, FeedbackScope, FeedbackStore},
};
use leptos::*;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let feedback = use_feedback();
    let loader = feedback.clone();
    let reload = Callback::new(move |_: ()| {
        let store = loader.clone();
        spawn_local(async move {
            let _ = store.refresh(FeedbackScope::Received).await;
        });
    });
    create_effect(move |_| reload.call(()));
    let FeedbackStore { items, resource, .. } = feedback;
    let loading = resource.loading;

    view! {
        <div class="space-y-6">
            <div class="flex items-start justify-between">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Feedback Received"</h2>
                    <p class="text-fg-muted mt-1">"View feedback and recognition from your colleagues"</p>
                </div>
                <button
                    type="button"
                    class="text-sm text-fg-muted hover:text-fg"
                    disabled=move || loading.get()
                    on:click=move |_| reload.call(())
                >
                    "Refresh"
                </button>
            </div>
            <FeedbackList
                items=items
                loading=loading
                error=resource.error
            />
        </div>
    }
}
