use crate::domain::common::Status;
use serde::{Deserialize, Serialize};

/// Promotional banner shown in the customer app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: i64,
    pub title: String,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    /// Optional click-through target
    #[serde(default)]
    pub link_url: Option<String>,
    pub status: Status,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BannerDto {
    pub id: Option<i64>,
    pub title: String,
    pub link_url: Option<String>,
    pub status: Status,
}

impl BannerDto {
    pub fn from_record(b: &Banner) -> Self {
        Self {
            id: Some(b.id),
            title: b.title.clone(),
            link_url: b.link_url.clone(),
            status: b.status,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Banner title is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_title() {
        let mut dto = BannerDto::default();
        assert!(dto.validate().is_err());
        dto.title = "Monsoon sale".into();
        assert!(dto.validate().is_ok());
    }
}
