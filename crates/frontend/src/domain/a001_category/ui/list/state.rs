use contracts::domain::common::{ListQuery, PaginationMeta};
use leptos::prelude::*;

/// Server-pagination state for the category list
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryListState {
    pub page: usize,
    pub page_size: usize,
    pub search: String,

    // Client-side sort of the fetched page
    pub sort_field: &'static str,
    pub sort_ascending: bool,

    // Totals reported by the server
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for CategoryListState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: String::new(),
            sort_field: "created",
            sort_ascending: false,
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl CategoryListState {
    /// Query for the current page; short search terms are not sent
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

    /// Absorb the totals from a response; clamps the page when the
    /// collection shrank under us.
    pub fn apply_meta(&mut self, meta: &PaginationMeta) {
        self.total_count = meta.total_items;
        self.total_pages = meta.total_pages;
        if meta.total_pages > 0 && self.page > meta.total_pages {
            self.page = meta.total_pages;
        }
    }
}

pub fn create_state() -> RwSignal<CategoryListState> {
    RwSignal::new(CategoryListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_carries_page_and_search() {
        let state = CategoryListState {
            page: 3,
            page_size: 25,
            search: "boxes".into(),
            ..Default::default()
        };
        let q = state.query();
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, 25);
        assert_eq!(q.search.as_deref(), Some("boxes"));
    }

    #[test]
    fn test_apply_meta_clamps_page() {
        let mut state = CategoryListState {
            page: 5,
            ..Default::default()
        };
        state.apply_meta(&PaginationMeta {
            current_page: 5,
            total_pages: 2,
            total_items: 14,
            items_per_page: 10,
        });
        assert_eq!(state.page, 2);
        assert_eq!(state.total_count, 14);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = CategoryListState::default();
        state.toggle_sort("name");
        assert_eq!(state.sort_field, "name");
        assert!(state.sort_ascending);
        state.toggle_sort("name");
        assert!(!state.sort_ascending);
    }
}
