use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{CreateUserDto, User};

use super::repository;
use crate::system::auth::password;

/// Create a new account
pub async fn create(dto: CreateUserDto) -> Result<String> {
    let email = dto.email.trim().to_lowercase();

    if email.is_empty() {
        return Err(anyhow::anyhow!("Email cannot be empty"));
    }
    // Basic email shape check; the mail system is the real validator
    let (local, domain) = email.split_once('@').unwrap_or(("", ""));
    if local.is_empty() || domain.is_empty() {
        return Err(anyhow::anyhow!("Invalid email format"));
    }

    if repository::get_by_email(&email).await?.is_some() {
        return Err(anyhow::anyhow!("Email already registered"));
    }

    password::validate_password_strength(&dto.password)?;
    let password_hash = password::hash_password(&dto.password)?;

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        email,
        is_admin: dto.is_admin,
        created_at: Utc::now().to_rfc3339(),
    };

    repository::create_with_password(&user, &password_hash).await?;

    Ok(user.id)
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

/// Verify email/password; returns the user on success
pub async fn verify_credentials(email: &str, password: &str) -> Result<Option<User>> {
    let email = email.trim().to_lowercase();

    let Some(user) = repository::get_by_email(&email).await? else {
        return Ok(None);
    };

    let Some(hash) = repository::get_password_hash(&email).await? else {
        return Ok(None);
    };

    if password::verify_password(password, &hash)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}
