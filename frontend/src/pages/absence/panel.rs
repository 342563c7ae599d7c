use crate::{
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    pages::absence::utils::{format_days, summary_lines},
    state::{absence::use_absence_statistics, auth::use_auth},
};
use leptos::*;

#[component]
fn StatTile(title: &'static str, value: String, caption: String) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <p class="text-sm font-medium text-fg-muted">{title}</p>
            <p class="text-3xl font-bold text-fg">{value}</p>
            <p class="text-xs text-fg-muted mt-1">{caption}</p>
        </div>
    }
}

#[component]
pub fn AbsencePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let store = use_absence_statistics();
    let employee_id = create_memo(move |_| {
        auth.with(|state| state.user_id().map(str::to_string).unwrap_or_default())
    });

    let loader = store.clone();
    let reload = Callback::new(move |_: ()| {
        let id = employee_id.get_untracked();
        if id.is_empty() {
            return;
        }
        let store = loader.clone();
        spawn_local(async move {
            let _ = store.refresh(&id).await;
        });
    });
    create_effect(move |_| {
        if !employee_id.with(String::is_empty) {
            reload.call(());
        }
    });

    let loading = store.resource.loading;
    let error = store.resource.error;
    let statistics = store.statistics;
    let summary = move || {
        let days = store.vacation_days()?;
        let stats = statistics.get()?;
        Some((days, summary_lines(&stats, &days)))
    };

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">"Absence Statistics"</h2>
                <p class="text-fg-muted mt-1">"Your absence request history and trends"</p>
            </div>
            <InlineErrorMessage error=error on_retry=reload />
            {move || match summary() {
                Some((days, lines)) => view! {
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                        <StatTile
                            title="Days Taken This Year"
                            value=format_days(days.used_days)
                            caption="Approved absence days".to_string()
                        />
                        <StatTile
                            title="Days Remaining"
                            value=format_days(days.remaining_days)
                            caption=format!("Out of {} annual days", format_days(days.total_days))
                        />
                    </div>
                    <div class="bg-surface-muted border border-border rounded-lg p-4">
                        <h4 class="text-sm font-medium text-fg mb-2">"Your Absence Summary"</h4>
                        <ul class="text-sm text-fg-muted space-y-1 list-disc list-inside">
                            {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                        </ul>
                    </div>
                }
                .into_view(),
                None if loading.get() => view! { <LoadingSpinner text="Loading statistics..." /> }.into_view(),
                None => ().into_view(),
            }}
        </div>
    }
}
