use campusconnect_db::table::{Event, Registration};
use sea_query::{Asterisk, Expr, Func, IntoTableRef, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;

/// Placeholder, no rating data is collected.
pub const AVG_RATING: f64 = 4.5;
/// Placeholder, no history is kept to compute growth from.
pub const GROWTH: u32 = 12;

#[derive(Debug, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_events: u32,
    pub total_attendees: u32,
    pub avg_rating: f64,
    pub growth: u32,
}

pub async fn query_dashboard_stats(
    pool: &sqlx::SqlitePool,
) -> campusconnect_shared::Result<DashboardStats> {
    let total_events = count(pool, Event::Table).await?;
    let total_attendees = count(pool, Registration::Table).await?;

    Ok(DashboardStats {
        total_events,
        total_attendees,
        avg_rating: AVG_RATING,
        growth: GROWTH,
    })
}

async fn count(
    pool: &sqlx::SqlitePool,
    table: impl IntoTableRef,
) -> campusconnect_shared::Result<u32> {
    let statement = Query::select()
        .expr(Func::count(Expr::col(Asterisk)))
        .from(table)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let total = sqlx::query_scalar_with::<_, u32, _>(&sql, values)
        .fetch_one(pool)
        .await?;

    Ok(total)
}
