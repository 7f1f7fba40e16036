use crate::domain::common::Status;
use serde::{Deserialize, Serialize};

/// Back-office staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: Status,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Per-module access flags for one staff member.
///
/// `module` matches the screen keys used by the sidebar
/// ("categories", "products", "banners", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPermission {
    pub module: String,
    pub can_view: bool,
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl StaffPermission {
    pub fn none(module: &str) -> Self {
        Self {
            module: module.to_string(),
            can_view: false,
            can_add: false,
            can_edit: false,
            can_delete: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaffDto {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Only sent on create
    pub password: Option<String>,
    pub status: Status,
}

impl StaffDto {
    pub fn from_record(s: &Staff) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            password: None,
            status: s.status,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".into());
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err("Email looks invalid".into());
        }
        if self.id.is_none() {
            match &self.password {
                Some(p) if p.len() >= 6 => {}
                _ => return Err("Password of at least 6 characters is required".into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_password() {
        let mut dto = StaffDto {
            name: "Asha".into(),
            email: "asha@packarma.in".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.password = Some("secret1".into());
        assert!(dto.validate().is_ok());

        // Existing record does not need a password
        dto.password = None;
        dto.id = Some(12);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        let dto = StaffDto {
            id: Some(1),
            name: "Asha".into(),
            email: "not-an-email".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
