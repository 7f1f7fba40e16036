use leptos::prelude::*;

/// Confirmation dialog gating destructive actions.
///
/// Shown when `message` holds a value; confirm and cancel both hand control
/// back to the caller, which owns the signal.
#[component]
pub fn ConfirmDialog(
    /// Question to show; None hides the dialog
    #[prop(into)]
    message: Signal<Option<String>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="modal-overlay">
                <div class="modal-content modal-content--confirm">
                    <p class="confirm-dialog__message">{msg}</p>
                    <div class="confirm-dialog__actions">
                        <button
                            class="btn btn-danger"
                            on:click=move |_| on_confirm.run(())
                        >
                            "Yes, delete"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
