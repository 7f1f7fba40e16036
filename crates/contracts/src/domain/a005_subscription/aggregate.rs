use crate::domain::common::Status;
use serde::{Deserialize, Serialize};

/// Subscription plan offered to customers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    pub duration_days: i32,
    pub price: f64,
    #[serde(default)]
    pub benefits: Option<String>,
    pub status: Status,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Form model; numeric fields stay as strings until submit so the inputs can
/// hold whatever the user typed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubscriptionDto {
    pub id: Option<i64>,
    pub name: String,
    pub duration_days: String,
    pub price: String,
    pub benefits: Option<String>,
    pub status: Status,
}

/// Payload actually sent to the backend, with parsed numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPayload {
    pub id: Option<i64>,
    pub name: String,
    pub duration_days: i32,
    pub price: f64,
    pub benefits: Option<String>,
    pub status: Status,
}

impl SubscriptionDto {
    pub fn from_record(s: &Subscription) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            duration_days: s.duration_days.to_string(),
            price: format!("{}", s.price),
            benefits: s.benefits.clone(),
            status: s.status,
        }
    }

    /// Validate and parse into the wire payload
    pub fn to_payload(&self) -> Result<SubscriptionPayload, String> {
        if self.name.trim().is_empty() {
            return Err("Plan name is required".into());
        }
        let duration_days: i32 = self
            .duration_days
            .trim()
            .parse()
            .map_err(|_| "Duration must be a whole number of days".to_string())?;
        if duration_days <= 0 {
            return Err("Duration must be positive".into());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number".to_string())?;
        if price < 0.0 {
            return Err("Price cannot be negative".into());
        }
        Ok(SubscriptionPayload {
            id: self.id,
            name: self.name.trim().to_string(),
            duration_days,
            price,
            benefits: self.benefits.clone(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_parsing() {
        let mut dto = SubscriptionDto {
            name: "Gold".into(),
            duration_days: "365".into(),
            price: "4999.50".into(),
            ..Default::default()
        };
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.duration_days, 365);
        assert_eq!(payload.price, 4999.50);

        dto.duration_days = "a year".into();
        assert!(dto.to_payload().is_err());

        dto.duration_days = "-5".into();
        assert!(dto.to_payload().is_err());

        dto.duration_days = "30".into();
        dto.price = "free".into();
        assert!(dto.to_payload().is_err());
    }
}
