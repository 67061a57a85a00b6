use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Registration;

pub struct Operation;

fn create_registration_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Registration::Table)
        .col(
            ColumnDef::new(Registration::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Registration::EventId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Registration::UserId).string().not_null())
        .col(ColumnDef::new(Registration::StudentName).string().not_null())
        .col(ColumnDef::new(Registration::StudentId).string().not_null())
        .col(ColumnDef::new(Registration::StudentEmail).string().null())
        .col(
            ColumnDef::new(Registration::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_registration_table_statement() -> TableDropStatement {
    Table::drop().table(Registration::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment =
            create_registration_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment =
            drop_registration_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
