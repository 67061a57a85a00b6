use campusconnect_db::table::Registration as RegistrationTable;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize)]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub student_name: String,
    pub student_id: String,
    /// Absent on rows created before the email was collected.
    pub student_email: Option<String>,
    pub created_at: i64,
}

/// Read side of registrations. Nothing here writes, see
/// [`crate::Command::reconcile_emails`] for the repair path.
#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    pub async fn is_registered(
        &self,
        user_id: impl Into<String>,
        event_id: impl Into<String>,
    ) -> campusconnect_shared::Result<bool> {
        let statement = sea_query::Query::select()
            .column(RegistrationTable::Id)
            .from(RegistrationTable::Table)
            .and_where(Expr::col(RegistrationTable::UserId).eq(user_id.into()))
            .and_where(Expr::col(RegistrationTable::EventId).eq(event_id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(id.is_some())
    }

    pub async fn list_for_event(
        &self,
        event_id: impl Into<String>,
    ) -> campusconnect_shared::Result<Vec<Registration>> {
        let statement = select_statement()
            .and_where(Expr::col(RegistrationTable::EventId).eq(event_id.into()))
            .to_owned();

        self.fetch_all(statement).await
    }

    pub async fn list_for_user(
        &self,
        user_id: impl Into<String>,
    ) -> campusconnect_shared::Result<Vec<Registration>> {
        let statement = select_statement()
            .and_where(Expr::col(RegistrationTable::UserId).eq(user_id.into()))
            .to_owned();

        self.fetch_all(statement).await
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> campusconnect_shared::Result<Option<Registration>> {
        let statement = select_statement()
            .and_where(Expr::col(RegistrationTable::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Registration, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    async fn fetch_all(
        &self,
        mut statement: SelectStatement,
    ) -> campusconnect_shared::Result<Vec<Registration>> {
        statement
            .order_by(RegistrationTable::CreatedAt, Order::Asc)
            .order_by(RegistrationTable::Id, Order::Asc);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Registration, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}

fn select_statement() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            RegistrationTable::Id,
            RegistrationTable::EventId,
            RegistrationTable::UserId,
            RegistrationTable::StudentName,
            RegistrationTable::StudentId,
            RegistrationTable::StudentEmail,
            RegistrationTable::CreatedAt,
        ])
        .from(RegistrationTable::Table)
        .to_owned()
}
