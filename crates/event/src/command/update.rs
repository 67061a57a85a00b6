use campusconnect_db::table::Event;
use campusconnect_shared::event::Category;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Fields left as `None` keep their stored value. An explicit `null`
/// `image_url` removes the image.
#[derive(Validate, Deserialize, Default, Clone)]
pub struct UpdateEventInput {
    #[validate(length(min = 1, max = 150))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 25))]
    pub date: Option<String>,
    #[validate(length(min = 1, max = 25))]
    pub time: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub location: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,
    pub category: Option<Category>,
    #[validate(length(min = 1, max = 100))]
    pub organizer: Option<String>,
    #[validate(url)]
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
}

/// Tells a present `null` (`Some(None)`) apart from a missing field (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateEventInput,
    ) -> campusconnect_shared::Result<()> {
        input.validate()?;

        let id = id.into();
        let mut statement = Query::update()
            .table(Event::Table)
            .and_where(Expr::col(Event::Id).eq(id.to_owned()))
            .to_owned();

        let mut changed = false;
        let fields = [
            (Event::Title, input.title),
            (Event::Date, input.date),
            (Event::Time, input.time),
            (Event::Location, input.location),
            (Event::Description, input.description),
            (Event::Category, input.category.map(|c| c.to_string())),
            (Event::Organizer, input.organizer),
        ];

        for (col, value) in fields {
            if let Some(value) = value {
                statement.value(col, value);
                changed = true;
            }
        }

        if let Some(image_url) = input.image_url {
            statement.value(Event::ImageUrl, image_url);
            changed = true;
        }

        if !changed {
            if crate::Query(self.read_db.clone()).find(&id).await?.is_none() {
                campusconnect_shared::not_found!("event", id);
            }

            return Ok(());
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        if result.rows_affected() == 0 {
            campusconnect_shared::not_found!("event", id);
        }

        tracing::info!(event_id = %id, "event updated");

        Ok(())
    }
}
