use contracts::domain::a007_customer::aggregate::Customer;
use contracts::domain::common::{ListQuery, PagedResponse};

use crate::shared::api_utils::{self, with_query};

const BASE: &str = "/api/v1/customers";

pub async fn fetch_page(query: &ListQuery) -> Result<PagedResponse<Customer>, String> {
    api_utils::get_json(&with_query(BASE, query)).await
}

/// Customers register through the mobile app; the admin panel can only
/// read and remove them.
pub async fn delete(id: i64) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", BASE, id)).await
}
