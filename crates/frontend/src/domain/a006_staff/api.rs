use contracts::domain::a006_staff::aggregate::{Staff, StaffDto, StaffPermission};
use contracts::domain::common::{ListQuery, PagedResponse, Status};

use crate::shared::api_utils::{self, with_query};

const BASE: &str = "/api/v1/staff";

pub async fn fetch_page(query: &ListQuery) -> Result<PagedResponse<Staff>, String> {
    api_utils::get_json(&with_query(BASE, query)).await
}

pub async fn fetch_by_id(id: i64) -> Result<Staff, String> {
    api_utils::get_json(&format!("{}/{}", BASE, id)).await
}

pub async fn create(dto: &StaffDto) -> Result<(), String> {
    api_utils::post_json(BASE, dto).await
}

pub async fn update(id: i64, dto: &StaffDto) -> Result<(), String> {
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

/// Access flags for one staff member, one entry per module
pub async fn fetch_permissions(staff_id: i64) -> Result<Vec<StaffPermission>, String> {
    api_utils::get_json(&format!("{}/permissions/{}", BASE, staff_id)).await
}

/// Replace the whole permission set in one call
pub async fn save_permissions(staff_id: i64, permissions: &[StaffPermission]) -> Result<(), String> {
    api_utils::put_json(
        &format!("{}/permissions/{}", BASE, staff_id),
        &serde_json::json!({ "permissions": permissions }),
    )
    .await
}
