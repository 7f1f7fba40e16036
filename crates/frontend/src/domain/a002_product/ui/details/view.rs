use super::view_model::ProductDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
#[allow(non_snake_case)]
pub fn ProductDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load_categories();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit product" } else { "New product" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="product_name">"Name"</label>
                    <input
                        type="text"
                        id="product_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Product name"
                    />
                </div>

                <div class="form-group">
                    <label for="product_category">"Category"</label>
                    <select
                        id="product_category"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().category_id.to_string()
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let id = event_target_value(&ev).parse().unwrap_or(0);
                                vm.form.update(|f| f.category_id = id);
                            }
                        }
                    >
                        <option value="0">"— select a category —"</option>
                        {
                            let vm = vm_clone.clone();
                            move || vm.categories.get().into_iter().map(|c| {
                                let selected = {
                                    let vm = vm.clone();
                                    let id = c.id;
                                    move || vm.form.get().category_id == id
                                };
                                view! {
                                    <option value={c.id.to_string()} selected=selected>
                                        {c.name}
                                    </option>
                                }
                            }).collect_view()
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="product_description">"Description"</label>
                    <textarea
                        id="product_description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.description = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Optional description"
                        rows="3"
                    />
                </div>

                <div class="form-group">
                    <label class="form-group__checkbox">
                        <input
                            type="checkbox"
                            prop:checked={
                                let vm = vm_clone.clone();
                                move || vm.form.get().status.is_active()
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let active = event_target_checked(&ev);
                                    vm.form.update(|f| f.status = active.into());
                                }
                            }
                        />
                        "Active"
                    </label>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()() || vm.saving.get()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Save" } else { "Create" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
