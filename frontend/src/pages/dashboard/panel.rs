use crate::{
    pages::{
        dashboard::utils::{greeting, quick_links},
        feedback::components::FeedbackList,
    },
    state::{
        auth::use_auth,
        feedback::{use_feedback, FeedbackScope},
    },
};
use leptos::*;

const RECENT_FEEDBACK: usize = 3;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let feedback = use_feedback();
    let loader = feedback.clone();
    create_effect(move |_| {
        let store = loader.clone();
        spawn_local(async move {
            let _ = store.refresh(FeedbackScope::Received).await;
        });
    });

    let items = feedback.items;
    let recent = Signal::derive(move || {
        items.with(|list| list.iter().take(RECENT_FEEDBACK).cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="space-y-6">
            {move || auth.get().session.map(|session| view! {
                <div>
                    <h1 class="text-2xl font-bold text-fg">{greeting(&session.name)}</h1>
                    <p class="mt-1 text-sm text-fg-muted">{session.email.clone()}</p>
                </div>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {quick_links(session.role)
                        .into_iter()
                        .map(|link| view! {
                            <a href=link.path class="block bg-surface-elevated shadow rounded-lg p-6 hover:bg-surface-muted">
                                <h3 class="text-lg font-medium text-fg">{link.title}</h3>
                                <p class="mt-1 text-sm text-fg-muted">{link.description}</p>
                            </a>
                        })
                        .collect_view()}
                </div>
            })}
            <section class="space-y-3">
                <h2 class="text-lg font-semibold text-fg">"Recent feedback"</h2>
                <FeedbackList
                    items=recent
                    loading=feedback.resource.loading
                    error=feedback.resource.error
                />
            </section>
        </div>
    }
}
