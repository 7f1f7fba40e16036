use contracts::domain::common::{ListQuery, PaginationMeta};
use leptos::prelude::*;

/// Server-pagination state for the customer list
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerListState {
    pub page: usize,
    pub page_size: usize,
    pub search: String,

    // Client-side sort of the fetched page
    pub sort_field: &'static str,
    pub sort_ascending: bool,

    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for CustomerListState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: String::new(),
            sort_field: "registered",
            sort_ascending: false,
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl CustomerListState {
    pub fn query(&self) -> ListQuery {
        let trimmed = self.search.trim();
        ListQuery {
            page: self.page.max(1),
            limit: self.page_size,
            search: if trimmed.len() < 3 {
                None
            } else {
                Some(trimmed.to_string())
            },
        }
    }

    /// Header click: same column flips direction, a new column sorts ascending
    pub fn toggle_sort(&mut self, field: &'static str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field;
            self.sort_ascending = true;
        }
    }

    pub fn apply_meta(&mut self, meta: &PaginationMeta) {
        self.total_count = meta.total_items;
        self.total_pages = meta.total_pages;
        if meta.total_pages > 0 && self.page > meta.total_pages {
            self.page = meta.total_pages;
        }
    }
}

pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(CustomerListState::default())
}
