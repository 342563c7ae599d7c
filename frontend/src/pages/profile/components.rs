use crate::{
    api::{EmployeeProfile, UpdateProfileRequest},
    components::error::InlineErrorMessage,
    pages::profile::utils::{format_salary, DraftField, ProfileDraft},
};
use leptos::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
    value.filter(|v| !v.trim().is_empty()).map(|value| {
        view! {
            <div>
                <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                <dd class="mt-1 text-sm text-fg">{value}</dd>
            </div>
        }
    })
}

#[component]
pub fn ProfileDetails(profile: EmployeeProfile, show_sensitive: bool) -> impl IntoView {
    let role = profile.role.map(|role| role.to_string());
    let salary = profile.salary.filter(|_| show_sensitive).map(format_salary);
    let phone = profile.phone.clone().filter(|_| show_sensitive);
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h2 class="text-2xl font-bold text-fg">{profile.name.clone()}</h2>
                <p class="text-fg-muted">{profile.position.clone().unwrap_or_default()}</p>
            </div>
            <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                {detail_row("Email", profile.email.clone())}
                {detail_row("Role", role)}
                {detail_row("Department", profile.department.clone())}
                {detail_row("Location", profile.location.clone())}
                {detail_row("Phone", phone)}
                {detail_row("Salary", salary)}
            </dl>
            {profile.bio.clone().filter(|bio| !bio.trim().is_empty()).map(|bio| view! {
                <p class="text-sm text-fg whitespace-pre-line">{bio}</p>
            })}
        </div>
    }
}

fn text_field(
    id: &'static str,
    label: &'static str,
    value: RwSignal<ProfileDraft>,
    field: DraftField,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                type="text"
                class="mt-1 block w-full rounded-md border border-border p-2 text-fg"
                prop:value=move || value.with(|draft| draft.get(field).to_string())
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    value.update(|draft| draft.set(field, target.value()));
                }
            />
        </div>
    }
}

#[component]
pub fn ProfileEditForm(
    profile: EmployeeProfile,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<UpdateProfileRequest>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = create_rw_signal(ProfileDraft::from_profile(&profile));
    let local_error = create_rw_signal(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        match draft.with_untracked(|d| d.changes(&profile)) {
            Ok(update) if update.is_empty() => on_cancel.call(()),
            Ok(update) => {
                local_error.set(None);
                on_save.call(update);
            }
            Err(msg) => local_error.set(Some(msg)),
        }
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=submit>
            <h2 class="text-lg font-semibold text-fg">"Edit profile"</h2>
            {text_field("profile-name", "Name", draft, DraftField::Name)}
            {text_field("profile-department", "Department", draft, DraftField::Department)}
            {text_field("profile-position", "Position", draft, DraftField::Position)}
            {text_field("profile-location", "Location", draft, DraftField::Location)}
            {text_field("profile-phone", "Phone", draft, DraftField::Phone)}
            <div>
                <label for="profile-bio" class="block text-sm font-medium text-fg">"Bio"</label>
                <textarea
                    id="profile-bio"
                    rows="4"
                    class="mt-1 block w-full rounded-md border border-border p-2 text-fg"
                    prop:value=move || draft.with(|d| d.get(DraftField::Bio).to_string())
                    on:input=move |ev| {
                        let target = event_target::<HtmlTextAreaElement>(&ev);
                        draft.update(|d| d.set(DraftField::Bio, target.value()));
                    }
                ></textarea>
            </div>
            <InlineErrorMessage error=local_error />
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                >
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </div>
        </form>
    }
}
