use serde::{Deserialize, Serialize};

/// Registered customer of the consumer app.
///
/// Customers sign up through the mobile app; the admin panel only reads and,
/// when necessary, removes these records, so there is no form DTO here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub active_subscription: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
