mod state;

use contracts::domain::a004_advertisement::aggregate::Advertisement;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use crate::domain::a004_advertisement::api;
use crate::domain::a004_advertisement::ui::details::AdvertisementDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::details_popup::DetailsPopup;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::toggle_switch::ToggleSwitch;
use crate::shared::date_utils::{format_date, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::system::auth::context::{can_add, can_delete, can_edit, use_auth};
use state::create_state;

const MODULE: &str = "advertisements";

#[component]
#[allow(non_snake_case)]
pub fn AdvertisementList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<Advertisement>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let (viewing, set_viewing) = signal::<Option<Advertisement>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<(i64, String)>>(None);
    let (auth_state, _) = use_auth();

    let fetch = move || {
        let query = state.with_untracked(|s| s.query());
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_page(&query).await {
                Ok(page) => {
                    set_items.set(page.data);
                    state.update(|s| s.apply_meta(&page.pagination));
                    set_error.set(None);
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    let query_key = Memo::new(move |_| state.with(|s| (s.page, s.page_size, s.search.clone())));
    Effect::new(move |_| {
        let _ = query_key.get();
        fetch();
    });

    let confirm_delete = move || {
        let Some((id, _)) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    let was_last_row = items.get_untracked().len() <= 1;
                    let on_later_page = state.with_untracked(|s| s.page > 1);
                    if was_last_row && on_later_page {
                        state.update(|s| s.page -= 1);
                    } else {
                        fetch();
                    }
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let toggle_status = move |id: i64| {
        let current = items
            .get_untracked()
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.status);
        let Some(current) = current else { return };
        let next = current.toggled();
        spawn_local(async move {
            match api::set_status(id, next).await {
                Ok(()) => set_items.update(|rows| {
                    if let Some(row) = rows.iter_mut().find(|a| a.id == id) {
                        row.status = next;
                    }
                }),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let allow_add = move || can_add(&auth_state.get(), MODULE);
    let allow_edit = move || can_edit(&auth_state.get(), MODULE);
    let allow_delete = move || can_delete(&auth_state.get(), MODULE);

    view! {
        <div class="page">
            <PageHeader title="Advertisements">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |val: String| {
                        state.update(|s| {
                            s.search = val;
                            s.page = 1;
                        });
                    })
                    placeholder="Search advertisements...".to_string()
                />
                <Show when=allow_add>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            set_editing_id.set(None);
                            set_show_modal.set(true);
                        }
                    >
                        {icon("plus")}
                        "New advertisement"
                    </button>
                </Show>
                <button class="btn btn-secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=error on_retry=Callback::new(move |_| fetch()) />

            <div class="table-container" class:table-container--loading=move || loading.get()>
                <table>
                    <thead>
                        <tr>
                            <th>"Image"</th>
                            <th>"Title"</th>
                            <th>"Runs"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id;
                            let row_for_view = row.clone();
                            let title_for_delete = row.title.clone();
                            let is_active = row.status.is_active();
                            let window = format!(
                                "{} - {}",
                                format_date(&row.start_date),
                                format_date(&row.end_date)
                            );
                            view! {
                                <tr>
                                    <td>
                                        {match row.image_url.clone() {
                                            Some(url) => view! {
                                                <img class="table__thumb" src={url} alt={row.title.clone()} />
                                            }.into_any(),
                                            None => view! { <span class="table__thumb--empty">"—"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td>{row.title.clone()}</td>
                                    <td>{window}</td>
                                    <td>
                                        <ToggleSwitch
                                            checked=Signal::derive(move || {
                                                items.get()
                                                    .iter()
                                                    .find(|a| a.id == id)
                                                    .map(|a| a.status.is_active())
                                                    .unwrap_or(is_active)
                                            })
                                            on_change=Callback::new(move |_| toggle_status(id))
                                            disabled=Signal::derive(move || !allow_edit())
                                        />
                                    </td>
                                    <td class="table__actions">
                                        <button
                                            class="btn-icon"
                                            title="Details"
                                            on:click=move |_| set_viewing.set(Some(row_for_view.clone()))
                                        >
                                            {icon("eye")}
                                        </button>
                                        <Show when=allow_edit>
                                            <button
                                                class="btn-icon"
                                                title="Edit"
                                                on:click=move |_| {
                                                    set_editing_id.set(Some(id));
                                                    set_show_modal.set(true);
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                        </Show>
                                        <Show when=allow_delete>
                                            <button
                                                class="btn-icon btn-icon--danger"
                                                title="Delete"
                                                on:click={
                                                    let title = title_for_delete.clone();
                                                    move |_| set_pending_delete.set(Some((id, title.clone())))
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 1;
                    });
                })
            />

            <ConfirmDialog
                message=Signal::derive(move || {
                    pending_delete.get().map(|(_, title)| {
                        format!("Delete advertisement \"{}\"? This cannot be undone.", title)
                    })
                })
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| set_pending_delete.set(None))
            />

            {move || viewing.get().map(|a| {
                let rows = vec![
                    ("Title", a.title.clone()),
                    ("Image", a.image_url.clone().unwrap_or_else(|| "—".into())),
                    ("Starts", format_date(&a.start_date)),
                    ("Ends", format_date(&a.end_date)),
                    ("Status", a.status.label().to_string()),
                    ("Created", format_timestamp(a.created_at)),
                    ("Updated", format_timestamp(a.updated_at)),
                ];
                view! {
                    <DetailsPopup
                        title=format!("Advertisement #{}", a.id)
                        rows=rows
                        on_close=Callback::new(move |_| set_viewing.set(None))
                    />
                }
            })}

            {move || if show_modal.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            <AdvertisementDetails
                                id=editing_id.get()
                                on_saved=Rc::new(move |_| {
                                    set_show_modal.set(false);
                                    set_editing_id.set(None);
                                    fetch();
                                })
                                on_cancel=Rc::new(move |_| {
                                    set_show_modal.set(false);
                                    set_editing_id.set(None);
                                })
                            />
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
