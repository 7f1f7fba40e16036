use contracts::system::auth::{AdminUser, LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&format!("{}/api/v1/admin/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Get the currently signed-in admin profile
pub async fn get_current_admin(token: &str) -> Result<AdminUser, String> {
    let response = Request::get(&format!("{}/api/v1/admin/me", api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current admin failed: {}", response.status()));
    }

    response
        .json::<AdminUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
