use std::{path::PathBuf, str::FromStr};

use campusconnect_shared::State;
use campusconnect_event::{Category, Command, CreateEventInput};
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

#[allow(dead_code)]
pub fn event_input(title: &str, date: &str) -> CreateEventInput {
    CreateEventInput {
        title: title.to_owned(),
        date: date.to_owned(),
        time: "18:00".to_owned(),
        location: "Main Hall".to_owned(),
        description: format!("{title} for all students"),
        category: Category::Technology,
        organizer: "Computing Society".to_owned(),
        image_url: None,
    }
}

#[allow(dead_code)]
pub async fn create_event(command: &Command, title: &str, date: &str) -> anyhow::Result<String> {
    Ok(command.create(event_input(title, date)).await?)
}
