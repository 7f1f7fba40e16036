use contracts::domain::a005_subscription::aggregate::SubscriptionDto;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a005_subscription::api;

/// ViewModel for the subscription plan form.
///
/// Numeric fields stay as strings until submit; `to_payload` parses them.
#[derive(Clone)]
pub struct SubscriptionDetailsViewModel {
    pub form: RwSignal<SubscriptionDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl SubscriptionDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(SubscriptionDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().to_payload().is_ok()
    }

    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(record) => form.set(SubscriptionDto::from_record(&record)),
                Err(e) => error.set(Some(format!("Load failed: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let payload = match self.form.get().to_payload() {
            Ok(p) => p,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match payload.id {
                Some(id) => api::update(id, &payload).await,
                None => api::create(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
