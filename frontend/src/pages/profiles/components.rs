use crate::{
    api::EmployeeProfile,
    pages::{
        profile::utils::format_salary,
        profiles::utils::{feedback_href, profile_href},
    },
};
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn ProfileSearch(query: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            type="search"
            class="block w-full rounded-md border border-border p-2 text-fg"
            placeholder="Search by name, department or position"
            prop:value=move || query.get()
            on:input=move |ev| {
                let target = event_target::<HtmlInputElement>(&ev);
                query.set(target.value());
            }
        />
    }
}

/// Full directory for managers, including compensation.
#[component]
pub fn ProfileTable(#[prop(into)] profiles: Signal<Vec<EmployeeProfile>>) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border">
            <thead>
                <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                    <th class="px-4 py-2">"Name"</th>
                    <th class="px-4 py-2">"Role"</th>
                    <th class="px-4 py-2">"Department"</th>
                    <th class="px-4 py-2">"Email"</th>
                    <th class="px-4 py-2">"Salary"</th>
                    <th class="px-4 py-2"></th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                <For
                    each=move || profiles.get()
                    key=|profile| profile.id.clone()
                    children=move |profile| {
                        view! {
                            <tr class="text-sm text-fg">
                                <td class="px-4 py-2">
                                    <a href=profile_href(&profile.id) class="hover:underline">{profile.name.clone()}</a>
                                </td>
                                <td class="px-4 py-2">{profile.role.map(|r| r.to_string()).unwrap_or_default()}</td>
                                <td class="px-4 py-2">{profile.department.clone().unwrap_or_default()}</td>
                                <td class="px-4 py-2">{profile.email.clone().unwrap_or_default()}</td>
                                <td class="px-4 py-2">{profile.salary.map(format_salary).unwrap_or_default()}</td>
                                <td class="px-4 py-2 space-x-3">
                                    <a href=profile_href(&profile.id) class="text-action-primary-bg hover:underline">"Edit"</a>
                                    <a href=feedback_href(&profile.id) class="text-action-primary-bg hover:underline">"Leave feedback"</a>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

/// Colleague cards without sensitive fields.
#[component]
pub fn ProfileCards(#[prop(into)] profiles: Signal<Vec<EmployeeProfile>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
            <For
                each=move || profiles.get()
                key=|profile| profile.id.clone()
                children=move |profile| {
                    view! {
                        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
                            <h3 class="text-lg font-medium text-fg">{profile.name.clone()}</h3>
                            <p class="text-sm text-fg-muted">
                                {[profile.position.clone(), profile.department.clone()]
                                    .into_iter()
                                    .flatten()
                                    .collect::<Vec<_>>()
                                    .join(" · ")}
                            </p>
                            <div class="flex gap-3 text-sm">
                                <a href=profile_href(&profile.id) class="text-action-primary-bg hover:underline">"View"</a>
                                <a href=feedback_href(&profile.id) class="text-action-primary-bg hover:underline">"Leave feedback"</a>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
