use contracts::domain::a004_advertisement::aggregate::AdvertisementDto;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a004_advertisement::api;

/// ViewModel for the advertisement details form
#[derive(Clone)]
pub struct AdvertisementDetailsViewModel {
    pub form: RwSignal<AdvertisementDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub image_file: RwSignal<Option<web_sys::File>>,
    pub existing_image: RwSignal<Option<String>>,
}

impl AdvertisementDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AdvertisementDto::default()),
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
                    form.set(AdvertisementDto::from_record(&record));
                }
                Err(e) => error.set(Some(format!("Load failed: {}", e))),
            }
        });
    }

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
