use leptos::prelude::*;

/// Read-only details popup: a label/value table for one record.
#[component]
pub fn DetailsPopup(
    #[prop(into)] title: String,
    /// Label/value pairs, rendered in order
    rows: Vec<(&'static str, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal-content modal-content--details">
                <div class="details-popup__header">
                    <h3>{title}</h3>
                    <button
                        class="details-popup__close"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <table class="details-popup__table">
                    <tbody>
                        {rows.into_iter().map(|(label, value)| view! {
                            <tr>
                                <td class="details-popup__label">{label}</td>
                                <td class="details-popup__value">{value}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
