use campusconnect_db::table::UserProfile;
use campusconnect_shared::user::Role;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;
use time::OffsetDateTime;

pub struct CreateInput {
    pub id: String,
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub email: Option<String>,
}

pub enum OnExisting {
    /// Overwrite the self-reported attributes, keep the role.
    UpdateAttributes,
    Keep,
}

pub(crate) async fn create(
    pool: &SqlitePool,
    input: CreateInput,
    on_existing: OnExisting,
) -> campusconnect_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let on_conflict = match on_existing {
        OnExisting::UpdateAttributes => OnConflict::column(UserProfile::Id)
            .update_columns([
                UserProfile::Name,
                UserProfile::StudentId,
                UserProfile::Email,
            ])
            .to_owned(),
        OnExisting::Keep => OnConflict::column(UserProfile::Id).do_nothing().to_owned(),
    };

    let statement = Query::insert()
        .into_table(UserProfile::Table)
        .columns([
            UserProfile::Id,
            UserProfile::Name,
            UserProfile::StudentId,
            UserProfile::Email,
            UserProfile::Role,
            UserProfile::CreatedAt,
        ])
        .values_panic([
            input.id.into(),
            input.name.into(),
            input.student_id.into(),
            input.email.into(),
            Role::User.as_ref().into(),
            now.into(),
        ])
        .on_conflict(on_conflict)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Returns the number of profiles touched.
pub(crate) async fn update_role(
    pool: &SqlitePool,
    id: String,
    role: Role,
) -> campusconnect_shared::Result<u64> {
    let statement = Query::update()
        .table(UserProfile::Table)
        .value(UserProfile::Role, role.as_ref())
        .and_where(Expr::col(UserProfile::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}
