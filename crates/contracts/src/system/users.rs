use serde::{Deserialize, Serialize};

/// Account row as stored in sys_users (password hash lives next to it
/// in the table but never leaves the backend).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: String,
}

/// DTO for creating an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}
