use campusconnect_db::table::UserProfile;
use campusconnect_shared::user::Role;
use sea_query::{Expr, ExprTrait, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, FromRow)]
pub(crate) struct ProfileRow {
    pub id: String,
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub email: Option<String>,
    pub role: sqlx::types::Text<Role>,
    pub created_at: i64,
}

/// Persisted description of a principal: role plus the self-reported
/// attributes used to prefill registrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Profile {
    pub id: String,
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: i64,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            student_id: row.student_id,
            email: row.email,
            role: row.role.0,
            created_at: row.created_at,
        }
    }
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> campusconnect_shared::Result<Option<Profile>> {
        let statement = select_statement()
            .and_where(Expr::col(UserProfile::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        self.fetch_optional(statement).await
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> campusconnect_shared::Result<Option<Profile>> {
        let statement = select_statement()
            .and_where(Expr::col(UserProfile::Email).eq(email.into()))
            .limit(1)
            .to_owned();

        self.fetch_optional(statement).await
    }

    async fn fetch_optional(
        &self,
        statement: SelectStatement,
    ) -> campusconnect_shared::Result<Option<Profile>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ProfileRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .map(Profile::from))
    }
}

fn select_statement() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            UserProfile::Id,
            UserProfile::Name,
            UserProfile::StudentId,
            UserProfile::Email,
            UserProfile::Role,
            UserProfile::CreatedAt,
        ])
        .from(UserProfile::Table)
        .to_owned()
}
