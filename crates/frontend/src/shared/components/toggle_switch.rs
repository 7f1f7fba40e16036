use leptos::prelude::*;

/// Status toggle switch used in table rows.
///
/// Clicks stop propagation so the row's own click handler does not fire.
#[component]
pub fn ToggleSwitch(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Disable when the current admin may not edit this module
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label
            class="toggle-switch"
            class:toggle-switch--disabled=move || disabled.get()
            on:click=move |ev| ev.stop_propagation()
        >
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
            <span class="toggle-switch__slider"></span>
        </label>
    }
}
