use std::str::FromStr;

use campusconnect_db::table::Event as EventTable;
use campusconnect_shared::event::Category;
use sea_query::{Cond, Expr, ExprTrait, LikeExpr, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Deserializer, Serialize, de};
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub organizer: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// `All` or an empty value means no category filter.
    #[serde(default, deserialize_with = "category_filter")]
    pub category: Option<Category>,
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    /// All events, earliest date first. Dates are compared as stored text.
    pub async fn list(&self) -> campusconnect_shared::Result<Vec<Event>> {
        self.filter(FilterQuery::default()).await
    }

    pub async fn filter(&self, input: FilterQuery) -> campusconnect_shared::Result<Vec<Event>> {
        let mut statement = select_statement();

        if let Some(category) = input.category {
            statement.and_where(Expr::col(EventTable::Category).eq(category.as_ref()));
        }

        if let Some(search) = input
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let pattern = format!("%{}%", escape_like(search));
            statement.cond_where(
                Cond::any()
                    .add(Expr::col(EventTable::Title).like(LikeExpr::new(&pattern).escape('\\')))
                    .add(
                        Expr::col(EventTable::Description)
                            .like(LikeExpr::new(&pattern).escape('\\')),
                    ),
            );
        }

        statement
            .order_by(EventTable::Date, Order::Asc)
            .order_by(EventTable::Id, Order::Asc);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Event, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> campusconnect_shared::Result<Option<Event>> {
        let statement = select_statement()
            .and_where(Expr::col(EventTable::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Event, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}

fn select_statement() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            EventTable::Id,
            EventTable::Title,
            EventTable::Date,
            EventTable::Time,
            EventTable::Location,
            EventTable::Description,
            EventTable::Category,
            EventTable::Organizer,
            EventTable::ImageUrl,
        ])
        .from(EventTable::Table)
        .to_owned()
}

fn category_filter<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Category>, D::Error> {
    let value = String::deserialize(deserializer)?;

    match value.trim() {
        "" | "All" => Ok(None),
        name => Category::from_str(name)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("unknown category '{name}'"))),
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
