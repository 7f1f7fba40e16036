use super::view_model::StaffDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
#[allow(non_snake_case)]
pub fn StaffDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = StaffDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container staff-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit staff member" } else { "New staff member" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="staff_name">"Name"</label>
                    <input
                        type="text"
                        id="staff_name"
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
                        placeholder="Full name"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="staff_email">"Email"</label>
                        <input
                            type="email"
                            id="staff_email"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().email
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.email = event_target_value(&ev));
                                }
                            }
                            placeholder="name@example.com"
                        />
                    </div>

                    <div class="form-group">
                        <label for="staff_phone">"Phone"</label>
                        <input
                            type="tel"
                            id="staff_phone"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().phone.clone().unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.phone = if value.is_empty() { None } else { Some(value) };
                                    });
                                }
                            }
                            placeholder="Optional"
                        />
                    </div>
                </div>

                {
                    let vm = vm_clone.clone();
                    move || (!vm.is_edit_mode()()).then(|| {
                        let vm = vm.clone();
                        view! {
                            <div class="form-group">
                                <label for="staff_password">"Password"</label>
                                <input
                                    type="password"
                                    id="staff_password"
                                    prop:value={
                                        let vm = vm.clone();
                                        move || vm.form.get().password.clone().unwrap_or_default()
                                    }
                                    on:input={
                                        let vm = vm.clone();
                                        move |ev| {
                                            let value = event_target_value(&ev);
                                            vm.form.update(|f| {
                                                f.password = if value.is_empty() { None } else { Some(value) };
                                            });
                                        }
                                    }
                                    placeholder="At least 6 characters"
                                />
                            </div>
                        }
                    })
                }

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
