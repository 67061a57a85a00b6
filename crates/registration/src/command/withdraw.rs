use campusconnect_db::table::Registration;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn withdraw(&self, id: impl Into<String>) -> campusconnect_shared::Result<()> {
        let id = id.into();
        let statement = Query::delete()
            .from_table(Registration::Table)
            .and_where(Expr::col(Registration::Id).eq(id.to_owned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        if result.rows_affected() > 0 {
            tracing::info!(registration_id = %id, "registration withdrawn");
        }

        Ok(())
    }
}
