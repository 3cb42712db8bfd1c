use anyhow::Result;

/// Ensure admin user exists (create if table is empty)
pub async fn ensure_admin_user_exists() -> Result<()> {
    use crate::system::users::{repository, service};
    use contracts::system::users::CreateUserDto;

    let count = repository::count_users().await?;

    if count == 0 {
        tracing::info!("No users found. Creating default admin user...");

        let admin_dto = CreateUserDto {
            email: "admin@localhost".to_string(),
            password: "admin".to_string(),
            is_admin: true,
        };

        let user_id = service::create(admin_dto).await?;
        tracing::info!("Default admin user created with id {}", user_id);
        tracing::warn!("Default credentials are admin@localhost / admin. Change the password.");
    }

    Ok(())
}
