use clap::ValueEnum;
use campusconnect::Config;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Role {
    User,
    Admin,
}

impl From<Role> for campusconnect_user::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::User => campusconnect_user::Role::User,
            Role::Admin => campusconnect_user::Role::Admin,
        }
    }
}

pub async fn set_role(config: Config, email: String, role: Role) -> anyhow::Result<()> {
    let pool = campusconnect::db::create_pool(&config.database.url, 1).await?;
    campusconnect::db::migrate(&pool).await?;
    let command = campusconnect_user::Command::new(campusconnect_shared::State::single(pool.clone()));

    let Some(profile) = campusconnect_user::Query(pool.clone())
        .find_by_email(&email)
        .await?
    else {
        tracing::error!("user {email} not found");
        return Ok(());
    };

    let role = campusconnect_user::Role::from(role);
    command.set_role(&profile.id, role).await?;

    tracing::info!(user_id = %profile.id, "{email} now has role {role}");

    pool.close().await;

    Ok(())
}
