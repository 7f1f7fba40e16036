use contracts::domain::a006_staff::aggregate::StaffDto;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a006_staff::api;

/// ViewModel for the staff details form.
///
/// The password field is only required when creating; on edit it stays
/// empty and the backend keeps the stored hash.
#[derive(Clone)]
pub struct StaffDetailsViewModel {
    pub form: RwSignal<StaffDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl StaffDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(StaffDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
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
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(record) => form.set(StaffDto::from_record(&record)),
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

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match current.id {
                Some(id) => api::update(id, &current).await,
                None => api::create(&current).await,
            };
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
