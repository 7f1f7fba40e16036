use contracts::domain::common::{ListQuery, PaginationMeta};
use leptos::prelude::*;

/// Server-pagination state for the banner list
#[derive(Clone, Debug, PartialEq)]
pub struct BannerListState {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for BannerListState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: String::new(),
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl BannerListState {
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

    pub fn apply_meta(&mut self, meta: &PaginationMeta) {
        self.total_count = meta.total_items;
        self.total_pages = meta.total_pages;
        if meta.total_pages > 0 && self.page > meta.total_pages {
            self.page = meta.total_pages;
        }
    }
}

pub fn create_state() -> RwSignal<BannerListState> {
    RwSignal::new(BannerListState::default())
}
