use campusconnect_shared::user::Role;

use crate::repository;

impl super::Command {
    pub async fn set_role(
        &self,
        id: impl Into<String>,
        role: Role,
    ) -> campusconnect_shared::Result<()> {
        let id = id.into();
        let updated = repository::update_role(&self.write_db, id.to_owned(), role).await?;
        if updated == 0 {
            campusconnect_shared::not_found!("user profile", id);
        }

        tracing::info!(user_id = %id, role = %role, "role updated");

        Ok(())
    }
}
