use crate::domain::common::Status;
use serde::{Deserialize, Serialize};

/// Packaging product, owned by a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<i64>,
    /// 0 means "not chosen yet" in the form
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
}

impl ProductDto {
    pub fn from_record(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            category_id: p.category_id,
            name: p.name.clone(),
            description: p.description.clone(),
            status: p.status,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        if self.category_id <= 0 {
            return Err("Select a category".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut dto = ProductDto {
            name: "Bubble wrap".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err()); // no category yet
        dto.category_id = 3;
        assert!(dto.validate().is_ok());
        dto.name.clear();
        assert!(dto.validate().is_err());
    }
}
