use crate::domain::a006_staff::aggregate::StaffPermission;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminUser,
}

/// Action kinds that permissions gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionAction {
    View,
    Add,
    Edit,
    Delete,
}

/// Currently signed-in admin, as returned by `/admin/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_super_admin: bool,
    #[serde(default)]
    pub permissions: Vec<StaffPermission>,
}

impl AdminUser {
    /// Check a module/action pair. Super admins pass everything; everyone
    /// else needs an explicit grant for the module.
    pub fn can(&self, module: &str, action: PermissionAction) -> bool {
        if self.is_super_admin {
            return true;
        }
        self.permissions
            .iter()
            .find(|p| p.module == module)
            .map(|p| match action {
                PermissionAction::View => p.can_view,
                PermissionAction::Add => p.can_add,
                PermissionAction::Edit => p.can_edit,
                PermissionAction::Delete => p.can_delete,
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_with(perm: StaffPermission) -> AdminUser {
        AdminUser {
            id: 1,
            name: "Asha".into(),
            email: "asha@packarma.in".into(),
            is_super_admin: false,
            permissions: vec![perm],
        }
    }

    #[test]
    fn test_super_admin_bypass() {
        let admin = AdminUser {
            id: 1,
            name: "Root".into(),
            email: "root@packarma.in".into(),
            is_super_admin: true,
            permissions: Vec::new(),
        };
        assert!(admin.can("categories", PermissionAction::Delete));
    }

    #[test]
    fn test_explicit_grants() {
        let admin = admin_with(StaffPermission {
            module: "banners".into(),
            can_view: true,
            can_add: true,
            can_edit: false,
            can_delete: false,
        });
        assert!(admin.can("banners", PermissionAction::View));
        assert!(admin.can("banners", PermissionAction::Add));
        assert!(!admin.can("banners", PermissionAction::Edit));
        // Unlisted module grants nothing
        assert!(!admin.can("categories", PermissionAction::View));
    }
}
