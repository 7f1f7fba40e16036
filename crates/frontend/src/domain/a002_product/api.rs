use contracts::domain::a002_product::aggregate::{Product, ProductDto};
use contracts::domain::common::{ListQuery, PagedResponse, Status};

use crate::shared::api_utils::{self, with_query};

const BASE: &str = "/api/v1/product/products";

pub async fn fetch_page(query: &ListQuery) -> Result<PagedResponse<Product>, String> {
    api_utils::get_json(&with_query(BASE, query)).await
}

pub async fn fetch_by_id(id: i64) -> Result<Product, String> {
    api_utils::get_json(&format!("{}/{}", BASE, id)).await
}

pub async fn create(dto: &ProductDto) -> Result<(), String> {
    api_utils::post_json(BASE, dto).await
}

pub async fn update(id: i64, dto: &ProductDto) -> Result<(), String> {
    api_utils::put_json(&format!("{}/{}", BASE, id), dto).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", BASE, id)).await
}

pub async fn set_status(id: i64, status: Status) -> Result<(), String> {
    api_utils::put_json(
        &format!("{}/{}/status", BASE, id),
        &serde_json::json!({ "status": status }),
    )
    .await
}
