mod state;

use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use std::rc::Rc;

use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::details_popup::DetailsPopup;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::toggle_switch::ToggleSwitch;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::system::auth::context::{can_add, can_delete, can_edit, use_auth};
use state::create_state;

const MODULE: &str = "categories";

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "created" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<Category>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let (viewing, set_viewing) = signal::<Option<Category>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<(i64, String)>>(None);
    let (auth_state, _) = use_auth();

    let fetch = move || {
        let query = state.with_untracked(|s| s.query());
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_page(&query).await {
                Ok(page) => {
                    // A response landing after a newer request simply wins;
                    // there is no out-of-order guard.
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

    // Refetch whenever page, page size or search change (and on mount).
    let query_key = Memo::new(move |_| state.with(|s| (s.page, s.page_size, s.search.clone())));
    Effect::new(move |_| {
        let _ = query_key.get();
        fetch();
    });

    let handle_create_new = move || {
        set_editing_id.set(None);
        set_show_modal.set(true);
    };

    let handle_edit = move |id: i64| {
        set_editing_id.set(Some(id));
        set_show_modal.set(true);
    };

    let confirm_delete = move || {
        let Some((id, _)) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    // Deleting the last row of the final page pulls us back one
                    // page; the query memo triggers the refetch in that case.
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
            .find(|c| c.id == id)
            .map(|c| c.status);
        let Some(current) = current else { return };
        let next = current.toggled();
        spawn_local(async move {
            match api::set_status(id, next).await {
                // Update the row in place; a refetch would lose the page position
                Ok(()) => set_items.update(|rows| {
                    if let Some(row) = rows.iter_mut().find(|c| c.id == id) {
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
            <PageHeader title="Categories">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |val: String| {
                        state.update(|s| {
                            s.search = val;
                            s.page = 1;
                        });
                    })
                    placeholder="Search categories...".to_string()
                />
                <Show when=allow_add>
                    <button class="btn btn-primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        "New category"
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
                            <th
                                class="th--sortable"
                                on:click=move |_| state.update(|s| s.toggle_sort("name"))
                            >
                                "Name"
                                {move || state.with(|s| {
                                    get_sort_indicator(s.sort_field, "name", s.sort_ascending)
                                })}
                            </th>
                            <th>"Status"</th>
                            <th
                                class="th--sortable"
                                on:click=move |_| state.update(|s| s.toggle_sort("created"))
                            >
                                "Created"
                                {move || state.with(|s| {
                                    get_sort_indicator(s.sort_field, "created", s.sort_ascending)
                                })}
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let mut rows = items.get();
                            let (field, asc) = state.with(|s| (s.sort_field, s.sort_ascending));
                            sort_list(&mut rows, field, asc);
                            rows.into_iter().map(|row| {
                            let id = row.id;
                            let row_for_view = row.clone();
                            let name_for_delete = row.name.clone();
                            let is_active = row.status.is_active();
                            view! {
                                <tr>
                                    <td>
                                        {match row.image_url.clone() {
                                            Some(url) => view! {
                                                <img class="table__thumb" src={url} alt={row.name.clone()} />
                                            }.into_any(),
                                            None => view! { <span class="table__thumb--empty">"—"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td>{row.name.clone()}</td>
                                    <td>
                                        <ToggleSwitch
                                            checked=Signal::derive(move || {
                                                items.get()
                                                    .iter()
                                                    .find(|c| c.id == id)
                                                    .map(|c| c.status.is_active())
                                                    .unwrap_or(is_active)
                                            })
                                            on_change=Callback::new(move |_| toggle_status(id))
                                            disabled=Signal::derive(move || !allow_edit())
                                        />
                                    </td>
                                    <td>{format_timestamp(row.created_at)}</td>
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
                                                on:click=move |_| handle_edit(id)
                                            >
                                                {icon("edit")}
                                            </button>
                                        </Show>
                                        <Show when=allow_delete>
                                            <button
                                                class="btn-icon btn-icon--danger"
                                                title="Delete"
                                                on:click={
                                                    let name = name_for_delete.clone();
                                                    move |_| set_pending_delete.set(Some((id, name.clone())))
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}}
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
                    pending_delete.get().map(|(_, name)| {
                        format!("Delete category \"{}\"? This cannot be undone.", name)
                    })
                })
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| set_pending_delete.set(None))
            />

            {move || viewing.get().map(|c| {
                let rows = vec![
                    ("Name", c.name.clone()),
                    ("Image", c.image_url.clone().unwrap_or_else(|| "—".into())),
                    ("Status", c.status.label().to_string()),
                    ("Created", format_timestamp(c.created_at)),
                    ("Updated", format_timestamp(c.updated_at)),
                ];
                view! {
                    <DetailsPopup
                        title=format!("Category #{}", c.id)
                        rows=rows
                        on_close=Callback::new(move |_| set_viewing.set(None))
                    />
                }
            })}

            {move || if show_modal.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            <CategoryDetails
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
