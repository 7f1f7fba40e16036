use contracts::domain::a001_category::aggregate::CategoryDto;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a001_category::api;

/// ViewModel for the category details form
#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// File picked in this session; None keeps the stored image on update
    pub image_file: RwSignal<Option<web_sys::File>>,
    /// URL of the image already stored on the server, for the preview
    pub existing_image: RwSignal<Option<String>>,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CategoryDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            image_file: RwSignal::new(None),
            existing_image: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().validate().is_ok()
    }

    /// Load form data from the server when editing an existing record
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        let existing_image = self.existing_image;

        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(record) => {
                    existing_image.set(record.image_url.clone());
                    form.set(CategoryDto::from_record(&record));
                }
                Err(e) => error.set(Some(format!("Load failed: {}", e))),
            }
        });
    }

    /// Save the form; creates or updates depending on the id
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let image = self.image_file.get_untracked();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match current.id {
                Some(id) => api::update(id, &current, image.as_ref()).await,
                None => api::create(&current, image.as_ref()).await,
            };
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
