use crate::{
    api::{NewFeedback, UpdateProfileRequest},
    components::{
        confirm_dialog::ConfirmDialog, error::InlineErrorMessage, layout::LoadingSpinner,
    },
    pages::{
        feedback::components::{FeedbackForm, FeedbackList},
        profile::{
            components::{ProfileDetails, ProfileEditForm},
            utils::{can_edit, can_leave_feedback, ProfileTab},
        },
    },
    state::{
        auth::use_auth,
        feedback::{use_feedback, FeedbackScope},
        profile::use_profile,
    },
};
use leptos::*;
use leptos_router::{use_params_map, use_query_map};

const TAB_CLASS: &str = "px-3 py-2 text-sm font-medium border-b-2";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let profile_id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));
    let tab = create_memo(move |_| query.with(|q| ProfileTab::from_query(q.get("tab").map(String::as_str))));

    let (auth, _) = use_auth();
    let store = use_profile();
    let feedback = use_feedback();
    let editing = create_rw_signal(false);
    let pending_delete = create_rw_signal(None::<String>);

    let loader = store.clone();
    create_effect(move |_| {
        let id = profile_id.get();
        if id.is_empty() {
            return;
        }
        editing.set(false);
        let store = loader.clone();
        spawn_local(async move {
            let _ = store.load(&id).await;
        });
    });

    let feedback_loader = feedback.clone();
    create_effect(move |_| {
        let id = profile_id.get();
        if id.is_empty() || tab.get() != ProfileTab::Feedback {
            return;
        }
        let store = feedback_loader.clone();
        spawn_local(async move {
            let _ = store.refresh(FeedbackScope::Profile(id)).await;
        });
    });

    let saver = store.clone();
    let on_save = Callback::new(move |update: UpdateProfileRequest| {
        let store = saver.clone();
        spawn_local(async move {
            if store.save(update).await.is_ok() {
                editing.set(false);
            }
        });
    });

    let creator = feedback.clone();
    let creating = feedback.creating;
    let on_feedback = Callback::new(move |body: String| {
        if creating.get_untracked() {
            return;
        }
        let store = creator.clone();
        let target = profile_id.get_untracked();
        spawn_local(async move {
            let _ = store.create(&target, NewFeedback { body }).await;
        });
    });

    let deleter = feedback.clone();
    let confirm_delete = Callback::new(move |_: ()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let store = deleter.clone();
        spawn_local(async move {
            let _ = store.delete(&id).await;
        });
    });

    let profile = store.profile;
    let loading = store.resource.loading;
    let profile_error = store.resource.error;
    let saving = store.saving;
    let feedback_items = feedback.items;
    let feedback_loading = feedback.resource.loading;
    let feedback_error = feedback.resource.error;

    let viewer = move || auth.with(|state| state.session.clone());
    let permissions = move || {
        let viewer = viewer()?;
        profile.with(|p| {
            p.as_ref()
                .map(|p| (can_edit(&viewer, p), can_leave_feedback(&viewer, p)))
        })
    };

    let tab_link = move |target: ProfileTab, label: &'static str| {
        let href = move || format!("/profile/{}{}", profile_id.get(), target.query());
        let class = move || {
            if tab.get() == target {
                format!("{} border-action-primary-bg text-fg", TAB_CLASS)
            } else {
                format!("{} border-transparent text-fg-muted", TAB_CLASS)
            }
        };
        view! { <a href=href class=class>{label}</a> }
    };

    view! {
        <div class="space-y-6">
            <InlineErrorMessage error=profile_error />
            <Show
                when=move || profile.with(Option::is_some)
                fallback=move || view! {
                    <Show when=move || loading.get()>
                        <LoadingSpinner text="Loading profile..." />
                    </Show>
                }
            >
                <nav class="flex gap-2 border-b border-border">
                    {tab_link(ProfileTab::Overview, "Overview")}
                    {tab_link(ProfileTab::Feedback, "Feedback")}
                </nav>
                {move || match tab.get() {
                    ProfileTab::Overview => {
                        let Some(current) = profile.get() else {
                            return ().into_view();
                        };
                        let (may_edit, _) = permissions().unwrap_or((false, false));
                        if editing.get() && may_edit {
                            view! {
                                <ProfileEditForm
                                    profile=current
                                    saving=saving
                                    on_save=on_save
                                    on_cancel=Callback::new(move |_| editing.set(false))
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <ProfileDetails profile=current show_sensitive=may_edit />
                                {may_edit.then(|| view! {
                                    <button
                                        type="button"
                                        class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                        on:click=move |_| editing.set(true)
                                    >
                                        "Edit profile"
                                    </button>
                                })}
                            }
                            .into_view()
                        }
                    }
                    ProfileTab::Feedback => {
                        let (_, may_leave) = permissions().unwrap_or((false, false));
                        view! {
                            <div class="space-y-4">
                                {may_leave.then(|| view! {
                                    <FeedbackForm pending=creating on_submit=on_feedback />
                                })}
                                {move || match viewer() {
                                    Some(session) => view! {
                                        <FeedbackList
                                            items=feedback_items
                                            loading=feedback_loading
                                            error=feedback_error
                                            viewer=session
                                            on_delete=Callback::new(move |id: String| pending_delete.set(Some(id)))
                                        />
                                    }
                                    .into_view(),
                                    None => ().into_view(),
                                }}
                            </div>
                        }
                        .into_view()
                    }
                }}
            </Show>
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete feedback"
                message="This feedback will be removed permanently."
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| pending_delete.set(None))
                confirm_label="Delete"
                destructive=true
            />
        </div>
    }
}
