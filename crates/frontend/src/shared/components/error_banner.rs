use leptos::prelude::*;

/// Error banner with a retry action.
///
/// Renders nothing while the error signal is empty.
#[component]
pub fn ErrorBanner(
    #[prop(into)] error: Signal<Option<String>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="error-banner">
                <span class="error-banner__icon">"⚠"</span>
                <span class="error-banner__text">{e}</span>
                <button class="error-banner__retry" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        })}
    }
}
