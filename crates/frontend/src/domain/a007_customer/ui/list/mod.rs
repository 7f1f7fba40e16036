mod state;

use contracts::domain::a007_customer::aggregate::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use crate::domain::a007_customer::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::details_popup::DetailsPopup;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::system::auth::context::{can_delete, use_auth};
use state::create_state;

const MODULE: &str = "customers";

impl Sortable for Customer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "registered" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

/// Customers are read-only in the admin panel; there is no create or edit
/// flow, only inspection and removal.
#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<Customer>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (viewing, set_viewing) = signal::<Option<Customer>>(None);
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

    let allow_delete = move || can_delete(&auth_state.get(), MODULE);

    view! {
        <div class="page">
            <PageHeader title="Customers">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |val: String| {
                        state.update(|s| {
                            s.search = val;
                            s.page = 1;
                        });
                    })
                    placeholder="Search customers...".to_string()
                />
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
                            <th
                                class="th--sortable"
                                on:click=move |_| state.update(|s| s.toggle_sort("name"))
                            >
                                "Name"
                                {move || state.with(|s| {
                                    get_sort_indicator(s.sort_field, "name", s.sort_ascending)
                                })}
                            </th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Plan"</th>
                            <th
                                class="th--sortable"
                                on:click=move |_| state.update(|s| s.toggle_sort("registered"))
                            >
                                "Registered"
                                {move || state.with(|s| {
                                    get_sort_indicator(s.sort_field, "registered", s.sort_ascending)
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
                            view! {
                                <tr>
                                    <td>{row.name.clone()}</td>
                                    <td>{row.email.clone()}</td>
                                    <td>{row.phone.clone().unwrap_or_else(|| "—".into())}</td>
                                    <td>{row.active_subscription.clone().unwrap_or_else(|| "—".into())}</td>
                                    <td>{format_timestamp(row.created_at)}</td>
                                    <td class="table__actions">
                                        <button
                                            class="btn-icon"
                                            title="Details"
                                            on:click=move |_| set_viewing.set(Some(row_for_view.clone()))
                                        >
                                            {icon("eye")}
                                        </button>
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
                        format!("Delete customer \"{}\"? This cannot be undone.", name)
                    })
                })
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| set_pending_delete.set(None))
            />

            {move || viewing.get().map(|c| {
                let rows = vec![
                    ("Name", c.name.clone()),
                    ("Email", c.email.clone()),
                    ("Phone", c.phone.clone().unwrap_or_else(|| "—".into())),
                    ("Active plan", c.active_subscription.clone().unwrap_or_else(|| "—".into())),
                    ("Registered", format_timestamp(c.created_at)),
                ];
                view! {
                    <DetailsPopup
                        title=format!("Customer #{}", c.id)
                        rows=rows
                        on_close=Callback::new(move |_| set_viewing.set(None))
                    />
                }
            })}
        </div>
    }
}
