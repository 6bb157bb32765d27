use contracts::system::auth::{LoginRequest, UserInfo};

use crate::shared::api_utils::{get_json, post_json};

/// Log in with email and password; the backend answers with a session cookie
pub async fn login(email: String, password: String) -> Result<(), String> {
    let request = LoginRequest { email, password };
    post_json::<serde_json::Value, _>("/auth/login", &request)
        .await?
        .into_ack()
        .map(|_| ())
        .map_err(|e| format!("Login failed: {}", e))
}

/// Log out (clears the session cookie)
pub async fn logout() -> Result<(), String> {
    post_json::<serde_json::Value, _>("/auth/logout", &serde_json::json!({}))
        .await?
        .into_ack()
        .map(|_| ())
        .map_err(|e| format!("Logout failed: {}", e))
}

/// Get current user info
pub async fn get_current_user() -> Result<UserInfo, String> {
    get_json::<UserInfo>("/user/me")
        .await?
        .into_result()
        .map_err(|e| format!("Get current user failed: {}", e))
}
