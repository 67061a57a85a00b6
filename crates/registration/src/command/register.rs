use campusconnect_db::table::Registration;
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

#[derive(Validate, Deserialize, Clone)]
pub struct RegisterInput {
    #[validate(length(min = 1))]
    pub event_id: String,
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1, max = 100))]
    pub student_name: String,
    #[validate(length(min = 1, max = 30))]
    pub student_id: String,
    #[validate(email)]
    pub student_email: Option<String>,
}

impl super::Command {
    /// Stores a registration and returns its new id.
    ///
    /// At most one registration exists per `(user_id, event_id)`. The
    /// insert is conditional on the unique index, so a concurrent duplicate
    /// fails with [`campusconnect_shared::Error::DuplicateRegistration`]
    /// even when both callers checked `is_registered` first.
    pub async fn register(&self, input: RegisterInput) -> campusconnect_shared::Result<String> {
        input.validate()?;

        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(Registration::Table)
            .columns([
                Registration::Id,
                Registration::EventId,
                Registration::UserId,
                Registration::StudentName,
                Registration::StudentId,
                Registration::StudentEmail,
                Registration::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.event_id.to_owned().into(),
                input.user_id.to_owned().into(),
                input.student_name.into(),
                input.student_id.into(),
                input.student_email.into(),
                now.into(),
            ])
            .on_conflict(
                OnConflict::columns([Registration::UserId, Registration::EventId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        if result.rows_affected() == 0 {
            tracing::debug!(
                user_id = %input.user_id,
                event_id = %input.event_id,
                "duplicate registration rejected"
            );

            return Err(campusconnect_shared::Error::DuplicateRegistration);
        }

        tracing::info!(
            registration_id = %id,
            user_id = %input.user_id,
            event_id = %input.event_id,
            "registered"
        );

        Ok(id)
    }
}
