//! Types shared by every entity module

pub mod pagination;
pub mod status;

// Re-exports
pub use pagination::{ListQuery, PagedResponse, PaginationMeta};
pub use status::Status;
