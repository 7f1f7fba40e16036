use super::view_model::BannerDetailsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn BannerDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = BannerDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container banner-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit banner" } else { "New banner" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="banner_title">"Title"</label>
                    <input
                        type="text"
                        id="banner_title"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().title
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.title = event_target_value(&ev));
                            }
                        }
                        placeholder="Banner title"
                    />
                </div>

                <div class="form-group">
                    <label for="banner_link">"Link URL"</label>
                    <input
                        type="text"
                        id="banner_link"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().link_url.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.link_url = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="https://... (optional)"
                    />
                </div>

                <div class="form-group">
                    <label for="banner_image">"Image"</label>
                    {
                        let vm = vm_clone.clone();
                        move || vm.existing_image.get().map(|url| view! {
                            <img class="details-form__preview" src={url} alt="Current image" />
                        })
                    }
                    <input
                        type="file"
                        id="banner_image"
                        accept="image/*"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let input = ev
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                                let file = input.and_then(|i| i.files()).and_then(|fs| fs.get(0));
                                vm.image_file.set(file);
                            }
                        }
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
