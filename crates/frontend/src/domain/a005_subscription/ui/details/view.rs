use super::view_model::SubscriptionDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
#[allow(non_snake_case)]
pub fn SubscriptionDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = SubscriptionDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container subscription-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit plan" } else { "New plan" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="plan_name">"Name"</label>
                    <input
                        type="text"
                        id="plan_name"
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
                        placeholder="Plan name"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="plan_duration">"Duration (days)"</label>
                        <input
                            type="number"
                            id="plan_duration"
                            min="1"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().duration_days
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.duration_days = event_target_value(&ev));
                                }
                            }
                            placeholder="30"
                        />
                    </div>

                    <div class="form-group">
                        <label for="plan_price">"Price"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="plan_price"
                            min="0"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().price
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.price = event_target_value(&ev));
                                }
                            }
                            placeholder="0.00"
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="plan_benefits">"Benefits"</label>
                    <textarea
                        id="plan_benefits"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().benefits.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.benefits = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="What the plan includes (optional)"
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
