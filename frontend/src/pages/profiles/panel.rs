use crate::{
    api::EmployeeProfile,
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::profiles::{
        components::{ProfileCards, ProfileSearch, ProfileTable},
        utils::filter_profiles,
    },
    state::profile::{use_profile_directory, ProfileDirectory},
};
use leptos::*;

struct DirectoryView {
    query: RwSignal<String>,
    visible: Signal<Vec<EmployeeProfile>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    retry: Callback<()>,
}

fn use_directory_view() -> DirectoryView {
    let directory = use_profile_directory();
    let loader = directory.clone();
    let retry = Callback::new(move |_: ()| {
        let store = loader.clone();
        spawn_local(async move {
            let _ = store.refresh().await;
        });
    });
    create_effect(move |_| retry.call(()));

    let ProfileDirectory { profiles, resource } = directory;
    let query = create_rw_signal(String::new());
    let visible = Signal::derive(move || profiles.with(|all| filter_profiles(all, &query.get())));
    DirectoryView {
        query,
        visible,
        loading: resource.loading,
        error: resource.error,
        retry,
    }
}

#[component]
fn DirectoryBody(
    loading: RwSignal<bool>,
    visible: Signal<Vec<EmployeeProfile>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show
            when=move || !visible.with(Vec::is_empty)
            fallback=move || {
                if loading.get() {
                    view! { <LoadingSpinner text="Loading profiles..." /> }.into_view()
                } else {
                    view! { <EmptyState title="No profiles found" /> }.into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn ProfilesPage() -> impl IntoView {
    let view_state = use_directory_view();
    let visible = view_state.visible;
    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">"Employee Profiles"</h2>
                <p class="text-fg-muted mt-1">"Manage every profile in the organisation"</p>
            </div>
            <ProfileSearch query=view_state.query />
            <InlineErrorMessage error=view_state.error on_retry=view_state.retry />
            <DirectoryBody loading=view_state.loading visible=visible>
                <ProfileTable profiles=visible />
            </DirectoryBody>
        </div>
    }
}

#[component]
pub fn ProfileBrowserPage() -> impl IntoView {
    let view_state = use_directory_view();
    let visible = view_state.visible;
    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-fg">"Browse Colleagues"</h2>
                <p class="text-fg-muted mt-1">"Find teammates and share feedback"</p>
            </div>
            <ProfileSearch query=view_state.query />
            <InlineErrorMessage error=view_state.error on_retry=view_state.retry />
            <DirectoryBody loading=view_state.loading visible=visible>
                <ProfileCards profiles=visible />
            </DirectoryBody>
        </div>
    }
}
