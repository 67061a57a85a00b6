use std::{path::PathBuf, str::FromStr};

use campusconnect_registration::RegisterInput;
use campusconnect_shared::State;
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

pub fn register_input(user_id: &str, event_id: &str) -> RegisterInput {
    RegisterInput {
        event_id: event_id.to_owned(),
        user_id: user_id.to_owned(),
        student_name: format!("Student {user_id}"),
        student_id: format!("S-{user_id}"),
        student_email: Some(format!("{user_id}@campusconnect.localhost")),
    }
}
