use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    User,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signed-in user as returned by `GET /user/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        let role: Role = serde_json::from_str(r#""SUPER_ADMIN""#).unwrap();
        assert_eq!(role, Role::SuperAdmin);
        assert!(role.is_admin());
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""USER""#);
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn test_user_info() {
        let json = r#"{"_id":"u1","name":"Rahim","email":"rahim@example.com","role":"ADMIN"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.picture, None);
    }
}
