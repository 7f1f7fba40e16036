use crate::domain::common::Status;
use serde::{Deserialize, Serialize};

/// Paid advertisement with a display window.
///
/// The backend keeps `start_date`/`end_date` as plain `YYYY-MM-DD` strings,
/// matching the HTML date inputs that produce them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advertisement {
    pub id: i64,
    pub title: String,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub status: Status,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdvertisementDto {
    pub id: Option<i64>,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub status: Status,
}

impl AdvertisementDto {
    pub fn from_record(a: &Advertisement) -> Self {
        Self {
            id: Some(a.id),
            title: a.title.clone(),
            start_date: a.start_date.clone(),
            end_date: a.end_date.clone(),
            status: a.status,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Advertisement title is required".into());
        }
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return Err("Start and end dates are required".into());
        }
        // ISO date strings compare correctly lexicographically
        if self.end_date < self.start_date {
            return Err("End date must not be before the start date".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(start: &str, end: &str) -> AdvertisementDto {
        AdvertisementDto {
            title: "Festive combo".into(),
            start_date: start.into(),
            end_date: end.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_date_window() {
        assert!(dto("2026-01-10", "2026-02-01").validate().is_ok());
        assert!(dto("2026-02-01", "2026-01-10").validate().is_err());
        assert!(dto("", "2026-01-10").validate().is_err());
    }
}
