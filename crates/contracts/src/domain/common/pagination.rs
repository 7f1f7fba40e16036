use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside every collection.
///
/// Field names mirror the backend JSON exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page, 1-indexed
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl PaginationMeta {
    pub fn empty(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_items: 0,
            items_per_page,
        }
    }
}

/// Envelope for paginated collection responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Query parameters for paginated list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Requested page, 1-indexed
    pub page: usize,
    /// Page size
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Change the page size and reset to the first page
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self.page = 1;
        self
    }

    /// Set the search term; terms shorter than 3 characters are not sent
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = if trimmed.len() < 3 {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.page = 1;
        self
    }

    /// Clamp the requested page to what the server reports.
    ///
    /// Used after deletes: removing the last row of the final page must pull
    /// the screen back to the new last page before the refetch.
    pub fn clamped_to(&self, meta: &PaginationMeta) -> Self {
        let mut q = self.clone();
        if meta.total_pages > 0 && q.page > meta.total_pages {
            q.page = meta.total_pages;
        }
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let q = ListQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        assert!(q.search.is_none());
    }

    #[test]
    fn test_limit_change_resets_page() {
        let q = ListQuery::default().with_page(4).with_limit(50);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 50);
    }

    #[test]
    fn test_short_search_is_dropped() {
        let q = ListQuery::default().with_search("ab");
        assert!(q.search.is_none());
        let q = ListQuery::default().with_search("  box ");
        assert_eq!(q.search.as_deref(), Some("box"));
    }

    #[test]
    fn test_clamp_after_delete() {
        let meta = PaginationMeta {
            current_page: 3,
            total_pages: 2,
            total_items: 11,
            items_per_page: 10,
        };
        let q = ListQuery::default().with_page(3).clamped_to(&meta);
        assert_eq!(q.page, 2);

        // Empty collection keeps the requested page
        let q = ListQuery::default().with_page(1).clamped_to(&PaginationMeta::empty(10));
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_meta_json_shape() {
        let meta: PaginationMeta = serde_json::from_str(
            r#"{"currentPage":2,"totalPages":5,"totalItems":48,"itemsPerPage":10}"#,
        )
        .unwrap();
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.items_per_page, 10);
    }
}
