use crate::{Principal, Profile, repository};

impl super::Command {
    pub async fn ensure_profile(
        &self,
        principal: &Principal,
    ) -> campusconnect_shared::Result<Profile> {
        if let Some(profile) = self.query().find(&principal.id).await? {
            return Ok(profile);
        }

        repository::create(
            &self.write_db,
            repository::CreateInput {
                id: principal.id.to_owned(),
                name: principal.name.to_owned(),
                student_id: None,
                email: principal.email.to_owned(),
            },
            repository::OnExisting::Keep,
        )
        .await?;

        tracing::info!(user_id = %principal.id, "profile provisioned on first sign-in");

        let Some(profile) = self.query().find(&principal.id).await? else {
            campusconnect_shared::bail!("profile missing after provisioning");
        };

        Ok(profile)
    }
}
