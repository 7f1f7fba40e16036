use crate::domain::common::Status;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Packaging category, mirrored 1:1 from the backend JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// URL of the uploaded category image, served by the backend
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    pub status: Status,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Form model for creating/updating a category.
///
/// The image itself travels as a multipart part, not in this DTO.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<i64>,
    pub name: String,
    pub status: Status,
}

impl CategoryDto {
    pub fn from_record(c: &Category) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            status: c.status,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name() {
        let mut dto = CategoryDto::default();
        assert!(dto.validate().is_err());
        dto.name = "  ".into();
        assert!(dto.validate().is_err());
        dto.name = "Corrugated boxes".into();
        assert!(dto.validate().is_ok());
    }
}
