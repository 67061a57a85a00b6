use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Event;

pub struct Operation;

fn create_event_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Event::Table)
        .col(
            ColumnDef::new(Event::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Event::Title).string().not_null())
        .col(ColumnDef::new(Event::Date).string().not_null())
        .col(ColumnDef::new(Event::Time).string().not_null())
        .col(ColumnDef::new(Event::Location).string().not_null())
        .col(ColumnDef::new(Event::Description).text().not_null())
        .col(
            ColumnDef::new(Event::Category)
                .string()
                .not_null()
                .string_len(25),
        )
        .col(ColumnDef::new(Event::Organizer).string().not_null())
        .col(ColumnDef::new(Event::ImageUrl).string().null())
        .col(ColumnDef::new(Event::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_event_table_statement() -> TableDropStatement {
    Table::drop().table(Event::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = create_event_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = drop_event_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
