use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="text-lg font-medium text-fg mb-2">{title}</h3>
            {description.map(|desc| view! { <p class="text-sm text-fg-muted">{desc}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! {
                <EmptyState
                    title="No Feedback Yet"
                    description="When your colleagues leave feedback for you, it will appear here."
                />
            }
        });
        assert!(html.contains("No Feedback Yet"));
        assert!(html.contains("it will appear here"));
    }
}
