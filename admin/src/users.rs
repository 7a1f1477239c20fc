// User directory - admin account management
use bragboard_client::domain::{AdminUser, UserRole};
use bragboard_client::{ApiGateway, ClientResult};
use tracing::info;

/// Cached view of the user directory with management operations.
pub struct UserDirectory<G> {
    gateway: G,
    users: Vec<AdminUser>,
}

impl<G: ApiGateway> UserDirectory<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            users: Vec::new(),
        }
    }

    pub fn users(&self) -> &[AdminUser] {
        &self.users
    }

    pub fn get(&self, user_id: i64) -> Option<&AdminUser> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Reload the directory from the server.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.users = self.gateway.admin_users().await?;
        Ok(())
    }

    pub async fn update_role(&mut self, user_id: i64, role: UserRole) -> ClientResult<()> {
        self.gateway.admin_update_role(user_id, role).await?;
        info!(user_id, role = ?role, "user role updated");
        self.refresh().await
    }

    pub async fn toggle_active(&mut self, user_id: i64) -> ClientResult<()> {
        self.gateway.admin_toggle_active(user_id).await?;
        info!(user_id, "user active status toggled");
        self.refresh().await
    }

    /// One-way deactivation, unlike [`Self::toggle_active`].
    pub async fn block(&mut self, user_id: i64) -> ClientResult<()> {
        self.gateway.admin_block_user(user_id).await?;
        info!(user_id, "user blocked");
        self.refresh().await
    }

    pub async fn delete(&mut self, user_id: i64) -> ClientResult<()> {
        self.gateway.admin_delete_user(user_id).await?;
        info!(user_id, "user deleted");
        self.refresh().await
    }
}
