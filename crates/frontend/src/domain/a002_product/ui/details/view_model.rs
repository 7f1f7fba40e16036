use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::ProductDto;
use contracts::domain::common::ListQuery;
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_product::api;

/// ViewModel for the product details form
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Options for the category select
    pub categories: RwSignal<Vec<Category>>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            categories: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().validate().is_ok()
    }

    /// Fill the category select; the form only stores the chosen id
    pub fn load_categories(&self) {
        let categories = self.categories;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let query = ListQuery {
                page: 1,
                limit: 100,
                search: None,
            };
            match category_api::fetch_page(&query).await {
                Ok(page) => categories.set(page.data),
                Err(e) => error.set(Some(format!("Categories failed to load: {}", e))),
            }
        });
    }

    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(existing_id).await {
                Ok(record) => form.set(ProductDto::from_record(&record)),
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
