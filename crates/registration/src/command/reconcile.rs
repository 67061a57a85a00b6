use campusconnect_db::table::Registration;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Copies the profile email onto registrations of `event_id` that have
    /// none. Returns how many rows were repaired.
    ///
    /// Rows whose profile lookup or update fails are logged and skipped.
    /// Running it again repairs nothing new.
    pub async fn reconcile_emails(
        &self,
        event_id: impl Into<String>,
    ) -> campusconnect_shared::Result<u64> {
        let event_id = event_id.into();
        let statement = Query::select()
            .columns([Registration::Id, Registration::UserId])
            .from(Registration::Table)
            .and_where(Expr::col(Registration::EventId).eq(event_id.to_owned()))
            .and_where(Expr::col(Registration::StudentEmail).is_null())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let missing = sqlx::query_as_with::<_, (String, String), _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let profiles = campusconnect_user::Query(self.read_db.clone());
        let mut repaired = 0;

        for (id, user_id) in missing {
            let email = match profiles.find(&user_id).await {
                Ok(profile) => profile.and_then(|p| p.email),
                Err(err) => {
                    tracing::error!(
                        err = %err,
                        registration_id = %id,
                        user_id = %user_id,
                        "failed to look up profile for email backfill"
                    );
                    continue;
                }
            };

            let Some(email) = email else {
                continue;
            };

            match self.fill_email(&id, email).await {
                Ok(rows) => repaired += rows,
                Err(err) => {
                    tracing::error!(
                        err = %err,
                        registration_id = %id,
                        "failed to backfill registration email"
                    );
                }
            }
        }

        if repaired > 0 {
            tracing::info!(event_id = %event_id, repaired, "registration emails reconciled");
        }

        Ok(repaired)
    }

    async fn fill_email(&self, id: &str, email: String) -> campusconnect_shared::Result<u64> {
        let statement = Query::update()
            .table(Registration::Table)
            .value(Registration::StudentEmail, email)
            .and_where(Expr::col(Registration::Id).eq(id))
            .and_where(Expr::col(Registration::StudentEmail).is_null())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(result.rows_affected())
    }
}
