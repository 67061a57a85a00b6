use campusconnect_db::table::Event;
use campusconnect_shared::event::Category;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Deserialize, Clone)]
pub struct CreateEventInput {
    #[validate(length(min = 1, max = 150))]
    pub title: String,
    #[validate(length(min = 1, max = 25))]
    pub date: String,
    #[validate(length(min = 1, max = 25))]
    pub time: String,
    #[validate(length(min = 1, max = 150))]
    pub location: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    pub category: Category,
    #[validate(length(min = 1, max = 100))]
    pub organizer: String,
    #[validate(url)]
    pub image_url: Option<String>,
}

impl super::Command {
    pub async fn create(&self, input: CreateEventInput) -> campusconnect_shared::Result<String> {
        input.validate()?;

        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(Event::Table)
            .columns([
                Event::Id,
                Event::Title,
                Event::Date,
                Event::Time,
                Event::Location,
                Event::Description,
                Event::Category,
                Event::Organizer,
                Event::ImageUrl,
                Event::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.title.into(),
                input.date.into(),
                input.time.into(),
                input.location.into(),
                input.description.into(),
                input.category.as_ref().into(),
                input.organizer.into(),
                input.image_url.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(event_id = %id, "event created");

        Ok(id)
    }
}
