use std::{path::PathBuf, str::FromStr};

use campusconnect_shared::State;
use campusconnect_user::{Command, CreateProfileInput, Principal};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    campusconnect_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

pub fn principal(name: &str) -> Principal {
    Principal {
        id: format!("uid-{name}"),
        email: Some(format!("{name}@campusconnect.localhost")),
        name: Some(name.to_owned()),
    }
}

#[allow(dead_code)]
pub async fn create_profile(command: &Command, name: &str) -> anyhow::Result<Principal> {
    let principal = principal(name);
    command
        .create_profile(
            &principal,
            CreateProfileInput {
                name: name.to_owned(),
                student_id: format!("S-{name}"),
            },
        )
        .await?;

    Ok(principal)
}
