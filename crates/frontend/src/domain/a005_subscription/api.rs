use contracts::domain::a005_subscription::aggregate::{Subscription, SubscriptionPayload};
use contracts::domain::common::{ListQuery, PagedResponse, Status};

use crate::shared::api_utils::{self, with_query};

const BASE: &str = "/api/v1/master/subscriptions";

pub async fn fetch_page(query: &ListQuery) -> Result<PagedResponse<Subscription>, String> {
    api_utils::get_json(&with_query(BASE, query)).await
}

pub async fn fetch_by_id(id: i64) -> Result<Subscription, String> {
    api_utils::get_json(&format!("{}/{}", BASE, id)).await
}

pub async fn create(payload: &SubscriptionPayload) -> Result<(), String> {
    api_utils::post_json(BASE, payload).await
}

pub async fn update(id: i64, payload: &SubscriptionPayload) -> Result<(), String> {
    api_utils::put_json(&format!("{}/{}", BASE, id), payload).await
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
