use serde::Deserialize;
use validator::Validate;

use crate::{Principal, Profile, repository};

#[derive(Validate, Deserialize)]
pub struct CreateProfileInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 30))]
    pub student_id: String,
}

impl super::Command {
    /// Self sign-up. Re-submitting overwrites name, student id and email but
    /// never the role.
    pub async fn create_profile(
        &self,
        principal: &Principal,
        input: CreateProfileInput,
    ) -> campusconnect_shared::Result<Profile> {
        input.validate()?;

        repository::create(
            &self.write_db,
            repository::CreateInput {
                id: principal.id.to_owned(),
                name: Some(input.name),
                student_id: Some(input.student_id),
                email: principal.email.to_owned(),
            },
            repository::OnExisting::UpdateAttributes,
        )
        .await?;

        tracing::info!(user_id = %principal.id, "profile created");

        let Some(profile) = self.query().find(&principal.id).await? else {
            campusconnect_shared::bail!("profile missing after sign-up");
        };

        Ok(profile)
    }
}
