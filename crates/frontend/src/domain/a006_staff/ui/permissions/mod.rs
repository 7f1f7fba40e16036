use contracts::domain::a006_staff::aggregate::StaffPermission;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_staff::api;
use crate::layout::global_context::{use_app_context, Screen};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;

/// Modules that can be granted, in sidebar order
const MODULES: [&str; 7] = [
    "categories",
    "products",
    "banners",
    "advertisements",
    "subscriptions",
    "staff",
    "customers",
];

/// One row per known module; rows the server does not know yet start
/// with everything off. Unknown modules coming back from the server are
/// dropped, the grid has nowhere to show them.
fn merge_with_modules(saved: &[StaffPermission]) -> Vec<StaffPermission> {
    MODULES
        .iter()
        .map(|module| {
            saved
                .iter()
                .find(|p| p.module == *module)
                .cloned()
                .unwrap_or_else(|| StaffPermission::none(module))
        })
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn StaffPermissionsScreen(staff_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let (rows, set_rows) = signal::<Vec<StaffPermission>>(Vec::new());
    let (staff_name, set_staff_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (saved_notice, set_saved_notice) = signal(false);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_by_id(staff_id).await {
                Ok(staff) => set_staff_name.set(staff.name),
                Err(e) => {
                    set_error.set(Some(e));
                    return;
                }
            }
            match api::fetch_permissions(staff_id).await {
                Ok(saved) => {
                    set_rows.set(merge_with_modules(&saved));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            fetch();
        }
    });

    let set_flag = move |module: &'static str, apply: fn(&mut StaffPermission, bool), value: bool| {
        set_saved_notice.set(false);
        set_rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|p| p.module == module) {
                apply(row, value);
                // Granting anything implies view access
                if value && !row.can_view {
                    row.can_view = true;
                }
            }
        });
    };

    let save = move || {
        let current = rows.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            match api::save_permissions(staff_id, &current).await {
                Ok(()) => {
                    set_error.set(None);
                    set_saved_notice.set(true);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader
                title="Staff permissions"
                subtitle=Signal::derive(move || staff_name.get())
            >
                <button
                    class="btn btn-secondary"
                    on:click=move |_| ctx.navigate(Screen::Staff)
                >
                    {icon("chevron-left")}
                    "Back to staff"
                </button>
            </PageHeader>

            <ErrorBanner error=error on_retry=Callback::new(move |_| fetch()) />

            {move || saved_notice.get().then(|| view! {
                <div class="notice notice--success">"Permissions saved"</div>
            })}

            <div class="table-container">
                <table class="permissions-grid">
                    <thead>
                        <tr>
                            <th>"Module"</th>
                            <th>"View"</th>
                            <th>"Add"</th>
                            <th>"Edit"</th>
                            <th>"Delete"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let module: &'static str = MODULES
                                .iter()
                                .find(|m| **m == row.module)
                                .copied()
                                .unwrap_or("categories");
                            view! {
                                <tr>
                                    <td class="permissions-grid__module">{row.module.clone()}</td>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=row.can_view
                                            on:change=move |ev| set_flag(
                                                module,
                                                |p, v| p.can_view = v,
                                                event_target_checked(&ev),
                                            )
                                        />
                                    </td>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=row.can_add
                                            on:change=move |ev| set_flag(
                                                module,
                                                |p, v| p.can_add = v,
                                                event_target_checked(&ev),
                                            )
                                        />
                                    </td>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=row.can_edit
                                            on:change=move |ev| set_flag(
                                                module,
                                                |p, v| p.can_edit = v,
                                                event_target_checked(&ev),
                                            )
                                        />
                                    </td>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=row.can_delete
                                            on:change=move |ev| set_flag(
                                                module,
                                                |p, v| p.can_delete = v,
                                                event_target_checked(&ev),
                                            )
                                        />
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| save()
                    disabled=move || saving.get()
                >
                    {icon("save")}
                    "Save permissions"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_fills_missing_modules() {
        let saved = vec![StaffPermission {
            module: "products".into(),
            can_view: true,
            can_add: true,
            can_edit: false,
            can_delete: false,
        }];
        let merged = merge_with_modules(&saved);
        assert_eq!(merged.len(), MODULES.len());
        let products = merged.iter().find(|p| p.module == "products").unwrap();
        assert!(products.can_add);
        let staff = merged.iter().find(|p| p.module == "staff").unwrap();
        assert!(!staff.can_view && !staff.can_add && !staff.can_edit && !staff.can_delete);
    }

    #[test]
    fn test_merge_drops_unknown_modules() {
        let saved = vec![StaffPermission {
            module: "reports".into(),
            can_view: true,
            can_add: false,
            can_edit: false,
            can_delete: false,
        }];
        let merged = merge_with_modules(&saved);
        assert!(merged.iter().all(|p| p.module != "reports"));
    }
}
