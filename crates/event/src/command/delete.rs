use campusconnect_db::table::Event;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Deleting an unknown id succeeds. Registrations of the event are left
    /// untouched.
    pub async fn delete(&self, id: impl Into<String>) -> campusconnect_shared::Result<()> {
        let id = id.into();
        let statement = Query::delete()
            .from_table(Event::Table)
            .and_where(Expr::col(Event::Id).eq(id.to_owned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        if result.rows_affected() == 0 {
            tracing::debug!(event_id = %id, "delete of absent event ignored");
        } else {
            tracing::info!(event_id = %id, "event deleted");
        }

        Ok(())
    }
}
